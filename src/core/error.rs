//! Error types for the logging facade
//!
//! Log-write paths are infallible by construction; errors surface only from
//! level parsing and configuration loading.

pub type Result<T> = std::result::Result<T, FacadeError>;

#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    /// IO error (configuration file access, file destinations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized log level name
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl FacadeError {
    /// Create an invalid-level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        FacadeError::InvalidLevel(name.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        FacadeError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
