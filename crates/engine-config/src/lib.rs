pub mod error;
pub mod installer;

pub use error::ConfigError;
pub use installer::{ClearMethod, EngineKind, InstallerConfig};
