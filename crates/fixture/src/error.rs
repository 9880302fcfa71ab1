use connectors::{
    file::error::ProviderError,
    sql::base::error::{ConnectorError, DbError},
};
use engine_config::ConfigError;
use thiserror::Error;

/// Failures while turning a source into an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// No registered provider accepts the source.
    #[error("Can't find dataset parser for source `{0}`")]
    NoProvider(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Top-level error for fixture operations.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}
