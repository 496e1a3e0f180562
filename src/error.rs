use std::io;

/// Custom error type for hook_relay operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid {event} payload: {message}")]
    InvalidPayload { event: String, message: String },

    #[error("Telegram delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Helper type for Results that use RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
