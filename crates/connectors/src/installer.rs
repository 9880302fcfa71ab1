use crate::sql::{
    base::{error::ConnectorError, installer::Installer},
    mysql::session::MySqlInstaller,
    postgres::session::PgInstaller,
};
use engine_config::{EngineKind, InstallerConfig};
use tracing::info;

/// An installer for whichever engine the config names.
pub enum DbInstaller {
    MySql(MySqlInstaller),
    Postgres(PgInstaller),
}

impl DbInstaller {
    pub async fn connect(config: &InstallerConfig) -> Result<Self, ConnectorError> {
        let installer = match config.engine {
            EngineKind::MySql => DbInstaller::MySql(MySqlInstaller::connect(config).await?),
            EngineKind::Postgres => DbInstaller::Postgres(PgInstaller::connect(config).await?),
        };
        info!(engine = %config.engine, clear_method = ?config.clear_method, "Installer ready");
        Ok(installer)
    }

    pub fn as_installer(&self) -> &dyn Installer {
        match self {
            DbInstaller::MySql(installer) => installer,
            DbInstaller::Postgres(installer) => installer,
        }
    }

    pub fn as_installer_mut(&mut self) -> &mut dyn Installer {
        match self {
            DbInstaller::MySql(installer) => installer,
            DbInstaller::Postgres(installer) => installer,
        }
    }

    pub fn kind(&self) -> EngineKind {
        self.as_installer().kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_config::ClearMethod;

    #[tokio::test]
    async fn test_connect_picks_engine_from_config() {
        let config = InstallerConfig::new(EngineKind::MySql, "mysql://root@127.0.0.1:1/db")
            .skip_conn_check(true);
        let installer = DbInstaller::connect(&config).await.unwrap();
        assert!(matches!(installer, DbInstaller::MySql(_)));

        let config = InstallerConfig::new(EngineKind::Postgres, "postgres://u@127.0.0.1:1/db")
            .with_clear_method(ClearMethod::NoClear)
            .skip_conn_check(true);
        let mut installer = DbInstaller::connect(&config).await.unwrap();
        assert_eq!(installer.kind(), EngineKind::Postgres);
        assert_eq!(
            installer.as_installer_mut().clear_method(),
            ClearMethod::NoClear
        );
    }
}
