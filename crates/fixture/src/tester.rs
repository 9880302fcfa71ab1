use crate::{error::FixtureError, manager::ImageManager};
use connectors::{installer::DbInstaller, sql::base::installer::Installer};
use engine_config::InstallerConfig;
use tracing::info;

/// An image manager paired with an installer for one database.
pub struct Tester {
    image_manager: ImageManager,
    installer: DbInstaller,
}

impl Tester {
    /// Validates `config` and builds the installer for its engine.
    pub async fn connect(config: InstallerConfig) -> Result<Self, FixtureError> {
        config.validate()?;
        let installer = DbInstaller::connect(&config).await?;
        info!(engine = %config.engine, "Tester ready");

        Ok(Tester {
            image_manager: ImageManager::default(),
            installer,
        })
    }

    pub fn image_manager(&self) -> &ImageManager {
        &self.image_manager
    }

    pub fn image_manager_mut(&mut self) -> &mut ImageManager {
        &mut self.image_manager
    }

    pub fn installer(&mut self) -> &mut dyn Installer {
        self.installer.as_installer_mut()
    }

    pub fn db_installer(&self) -> &DbInstaller {
        &self.installer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_config::{ClearMethod, ConfigError, EngineKind};

    #[tokio::test]
    async fn test_connect_rejects_invalid_config() {
        let config = InstallerConfig::new(EngineKind::MySql, "  ");
        let err = Tester::connect(config).await.err().unwrap();
        assert!(matches!(
            err,
            FixtureError::Config(ConfigError::MissingProperty(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_lazily() {
        let config = InstallerConfig::new(EngineKind::Postgres, "postgres://u@127.0.0.1:1/db")
            .with_clear_method(ClearMethod::DeleteAll)
            .skip_conn_check(true);

        let mut tester = Tester::connect(config).await.unwrap();
        assert_eq!(tester.db_installer().kind(), EngineKind::Postgres);
        assert_eq!(tester.installer().clear_method(), ClearMethod::DeleteAll);
        assert_eq!(tester.image_manager().providers().count(), 1);
    }
}
