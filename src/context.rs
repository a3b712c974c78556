use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::prompt::PromptSettings;
use crate::services::{LanguageModelService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub language_model: Arc<dyn LanguageModelService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
    ) -> Self {
        Self {
            config,
            version_control,
            language_model,
        }
    }

    pub fn prompt_settings(&self) -> PromptSettings {
        PromptSettings {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
        }
    }
}
