//! Database test fixtures.
//!
//! Load a dataset into an [`Image`], install it with an [`Installer`], read a
//! table back and diff it against what was expected.
//!
//! ```no_run
//! # async fn run() -> Result<(), fixture::FixtureError> {
//! use fixture::{EngineKind, ImageQuery, InstallerConfig, Tester};
//!
//! let config = InstallerConfig::new(EngineKind::MySql, "mysql://root@localhost/app");
//! let mut tester = Tester::connect(config).await?;
//!
//! let expected = tester.image_manager().load_image("fixtures/users.xml")?;
//! let installer = tester.installer();
//! installer.install_image(&expected).await?;
//!
//! let actual = installer.table_image("users", &ImageQuery::all()).await?;
//! assert!(tester.image_manager().images_diff(&expected, &actual).is_empty());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod manager;
pub mod tester;

pub use connectors::{
    file::{error::ProviderError, provider::ImageProvider, xml::provider::XmlImageProvider},
    installer::DbInstaller,
    sql::base::{
        error::{ConnectorError, DbError},
        installer::Installer,
        requests::ImageQuery,
    },
};
pub use engine_config::{ClearMethod, ConfigError, EngineKind, InstallerConfig};
pub use error::{FixtureError, ImageError};
pub use manager::ImageManager;
pub use model::{
    records::{image::Image, row::Row},
    transform::modifier::{Modifier, ModifiersList},
};
pub use planner::query::ast::common::OrderDir as SortDirection;
pub use tester::Tester;
