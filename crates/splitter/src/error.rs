use thiserror::Error;

/// Result type for splitter operations
pub type Result<T> = std::result::Result<T, SplitterError>;

/// Errors that can occur while configuring a splitter
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SplitterError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
