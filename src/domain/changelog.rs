use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangelogRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChangelogRequest {
    pub fn prompt(&self) -> Option<&str> {
        self.messages.first().map(|message| message.content.as_str())
    }
}

/// What the proxy sent back for a single request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// HTTP 200 with the body parsed as JSON, untouched.
    Success(Value),
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChangelogOutcome {
    Generated(String),
    NoCommits,
    Rejected { status: u16, body: String },
    Malformed(String),
}

/// Reads `content[0].text` from a proxy response.
pub fn extract_changelog_text(response: &Value) -> AppResult<String> {
    let content = response
        .get("content")
        .ok_or_else(|| malformed("missing 'content' field"))?
        .as_array()
        .ok_or_else(|| malformed("'content' is not an array"))?;
    let first = content
        .first()
        .ok_or_else(|| malformed("'content' is empty"))?;
    let text = first
        .get("text")
        .ok_or_else(|| malformed("missing 'text' in first content item"))?
        .as_str()
        .ok_or_else(|| malformed("'text' in first content item is not a string"))?;
    Ok(text.to_string())
}

fn malformed(detail: &str) -> AppError {
    AppError::MalformedResponse(detail.to_string())
}
