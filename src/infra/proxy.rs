use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use crate::domain::changelog::{ApiReply, ChangelogRequest};
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the Claude message proxy.
pub struct ProxyClient {
    http: Client,
    url: String,
    api_key: String,
}

impl ProxyClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl LanguageModelService for ProxyClient {
    async fn send(&self, request: &ChangelogRequest) -> AppResult<ApiReply> {
        tracing::debug!(url = %self.url, max_tokens = request.max_tokens, "sending changelog request");

        let response = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to call proxy: {err}")))?;

        let status = response.status();
        tracing::debug!(%status, "proxy responded");

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Ok(ApiReply::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await.map_err(|err| {
            AppError::MalformedResponse(format!("response body is not valid JSON: {err}"))
        })?;

        Ok(ApiReply::Success(payload))
    }
}
