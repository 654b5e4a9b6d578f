use thiserror::Error;

/// Unified error type for herald operations
#[derive(Error, Debug)]
pub enum HeraldError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in herald
pub type Result<T> = std::result::Result<T, HeraldError>;

impl HeraldError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HeraldError::Config(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        HeraldError::Repository(msg.into())
    }

    /// Create an API error from a response status and message
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        HeraldError::Api {
            status,
            message: msg.into(),
        }
    }
}
