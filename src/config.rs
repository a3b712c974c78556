use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://mintlify-take-home.com";
pub const DEFAULT_ENDPOINT: &str = "/api/message";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

const INSTALL_NAME: &str = "generate-changelog";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub workspace_root: PathBuf,
    pub install_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Self::from_lookup(workspace_hint, |key| env::var(key).ok())
    }

    /// Builds the configuration from defaults, overridden by whatever `lookup`
    /// returns for the `CHANGELOG_*` keys.
    pub fn from_lookup<F>(workspace_hint: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = non_empty("CHANGELOG_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(AppError::Configuration(format!(
                "base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let endpoint = non_empty("CHANGELOG_ENDPOINT")
            .map(|path| {
                let path = path.trim();
                if path.starts_with('/') {
                    path.to_string()
                } else {
                    format!("/{path}")
                }
            })
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            api_key: lookup("CHANGELOG_API_KEY").unwrap_or_default(),
            base_url,
            endpoint,
            model: non_empty("CHANGELOG_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            workspace_root: workspace_hint.to_path_buf(),
            install_path: dirs::home_dir()
                .map(|home| home.join(".local").join("bin").join(INSTALL_NAME)),
        })
    }

    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}
