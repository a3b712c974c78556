use async_trait::async_trait;

use crate::domain::commit::CommitRecord;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// The last `count` commits, most recent first. Fewer are returned when history is short.
    async fn recent_commits(&self, count: u32) -> AppResult<Vec<CommitRecord>>;
}
