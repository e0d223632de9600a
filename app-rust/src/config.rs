//! Runtime settings resolved from flags, the environment and `.env`.

use crate::{ScholarError, ScholarResult};
use cognipath_sdk::{
    google::{GoogleModel, GoogleModelOptions},
    LanguageModel,
};
use std::{env, path::PathBuf, sync::Arc};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const APP_FOLDER_NAME: &str = "cognipath";

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";
pub const MODEL_VAR: &str = "COGNIPATH_MODEL";
pub const BASE_URL_VAR: &str = "COGNIPATH_BASE_URL";
pub const DATA_DIR_VAR: &str = "COGNIPATH_DATA_DIR";

/// Values given explicitly on the command line. They win over the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub data_dir: PathBuf,
}

impl Config {
    /// Load `.env` if present, then resolve against the process environment.
    pub fn load(overrides: ConfigOverrides) -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::resolve(overrides, |name| env::var(name).ok())
    }

    /// Resolve settings using `lookup` to read variables.
    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            api_key: overrides
                .api_key
                .or_else(|| var(API_KEY_VAR))
                .or_else(|| var(API_KEY_FALLBACK_VAR)),
            model: overrides
                .model
                .or_else(|| var(MODEL_VAR))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: overrides.base_url.or_else(|| var(BASE_URL_VAR)),
            data_dir: overrides
                .data_dir
                .or_else(|| var(DATA_DIR_VAR).map(PathBuf::from))
                .unwrap_or_else(default_data_dir),
        }
    }

    /// Build the Gemini client. Fails when no API key is configured.
    pub fn language_model(&self) -> ScholarResult<Arc<dyn LanguageModel>> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| ScholarError::Config(format!("{API_KEY_VAR} is not set")))?;

        Ok(Arc::new(GoogleModel::new(
            self.model.clone(),
            GoogleModelOptions {
                api_key,
                base_url: self.base_url.clone(),
                ..Default::default()
            },
        )))
    }
}

pub(crate) fn require_model(
    model: Option<&Arc<dyn LanguageModel>>,
) -> ScholarResult<&Arc<dyn LanguageModel>> {
    model.ok_or_else(|| {
        ScholarError::Config(format!(
            "{API_KEY_VAR} is not set; add it to the environment or a .env file"
        ))
    })
}

#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
}
