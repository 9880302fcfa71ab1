use thiserror::Error;

/// Errors raised while building or validating installer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The engine name does not match any supported database.
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    #[error("Unknown clear method: {0}")]
    UnknownClearMethod(String),

    /// A required property was absent or empty.
    #[error("Missing required property: {0}")]
    MissingProperty(String),
}
