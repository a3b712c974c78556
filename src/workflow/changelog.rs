use crate::context::AppContext;
use crate::domain::changelog::{
    ApiReply, ChangelogOutcome, ChangelogRequest, extract_changelog_text,
};
use crate::domain::commit::CommitRecord;
use crate::domain::prompt::build_changelog_request;
use crate::error::{AppError, AppResult};

const SAMPLE_COMMITS: [&str; 3] = [
    "abcd123 Fixed login issue",
    "efgh456 Improved database query performance",
    "ijkl789 Refactored authentication logic",
];

pub async fn generate_changelog(ctx: &AppContext, count: u32) -> AppResult<ChangelogOutcome> {
    let Some(request) = preview_request(ctx, count).await? else {
        return Ok(ChangelogOutcome::NoCommits);
    };
    request_changelog(ctx, &request).await
}

/// Reads history and builds the request without sending it. `None` when there is no history.
pub async fn preview_request(ctx: &AppContext, count: u32) -> AppResult<Option<ChangelogRequest>> {
    let commits = ctx.version_control.recent_commits(count).await?;
    if commits.is_empty() {
        return Ok(None);
    }

    let request = build_changelog_request(&commits, &ctx.prompt_settings());
    tracing::debug!(
        commits = commits.len(),
        prompt_chars = request.prompt().map_or(0, str::len),
        payload = %serde_json::to_string(&request).unwrap_or_default(),
        "built changelog request"
    );
    Ok(Some(request))
}

/// Sends a request built from fixed sample commits to confirm the proxy answers.
pub async fn check_connectivity(ctx: &AppContext) -> AppResult<ChangelogOutcome> {
    let commits: Vec<CommitRecord> = SAMPLE_COMMITS.iter().map(|c| CommitRecord::new(*c)).collect();
    let request = build_changelog_request(&commits, &ctx.prompt_settings());
    request_changelog(ctx, &request).await
}

async fn request_changelog(
    ctx: &AppContext,
    request: &ChangelogRequest,
) -> AppResult<ChangelogOutcome> {
    let reply = match ctx.language_model.send(request).await {
        Ok(reply) => reply,
        Err(AppError::MalformedResponse(detail)) => return Ok(ChangelogOutcome::Malformed(detail)),
        Err(err) => return Err(err),
    };

    match reply {
        ApiReply::Success(value) => match extract_changelog_text(&value) {
            Ok(text) => Ok(ChangelogOutcome::Generated(text)),
            Err(AppError::MalformedResponse(detail)) => Ok(ChangelogOutcome::Malformed(detail)),
            Err(err) => Err(err),
        },
        ApiReply::Rejected { status, body } => Ok(ChangelogOutcome::Rejected { status, body }),
    }
}
