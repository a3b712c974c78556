use async_trait::async_trait;

use crate::domain::changelog::{ApiReply, ChangelogRequest};
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Sends one request. Non-200 replies come back as `ApiReply::Rejected`, not errors.
    async fn send(&self, request: &ChangelogRequest) -> AppResult<ApiReply>;
}
