use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScholarError {
    #[error("Language model error: {0}")]
    LanguageModel(#[from] cognipath_sdk::LanguageModelError),
    /// The model answered but the reply carried no text to parse.
    #[error("No response from AI")]
    EmptyResponse,
    /// The model reply did not match the requested JSON shape.
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage error for key '{key}': {source}")]
    Store {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Stored value for key '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Value for key '{key}' cannot be stored as JSON: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not read attachment '{}': {source}", path.display())]
    Attachment {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("No user is logged in")]
    NotLoggedIn,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScholarError {
    /// Whether the failure came from the remote model rather than from local
    /// input or storage. These are the ones a user can simply retry.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::LanguageModel(_) | Self::EmptyResponse | Self::Json(_))
    }
}

pub type ScholarResult<T> = Result<T, ScholarError>;
