use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::commit::{CommitRecord, parse_log_output};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn recent_commits(&self, count: u32) -> AppResult<Vec<CommitRecord>> {
        let limit = format!("-{count}");
        tracing::debug!(
            workspace = %self.workspace_root.display(),
            count,
            "running git log"
        );

        let output = Command::new("git")
            .args(["log", limit.as_str(), "--pretty=format:%h %s"])
            .current_dir(&self.workspace_root)
            .env("LC_ALL", "C")
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(status = %output.status, stderr = %stderr.trim(), "git log failed");
            if stderr.contains("does not have any commits")
                || stderr.contains("bad default revision 'HEAD'")
            {
                return Ok(Vec::new());
            }
            return Err(AppError::NotARepository(format!(
                "{} (run this command inside a git repository)",
                self.workspace_root.display()
            )));
        }

        let commits = parse_log_output(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(found = commits.len(), "read commit history");
        Ok(commits)
    }
}
