use crate::sql::{
    base::{
        error::{ConnectorError, DbError},
        installer::SqlInstaller,
        session::SqlSession,
    },
    postgres::{
        params::PgParamStore,
        utils::{connect_client, parse_config},
    },
};
use async_trait::async_trait;
use engine_config::{EngineKind, InstallerConfig};
use model::records::row::Row;
use planner::query::dialect::{self, Dialect};
use tokio_postgres::{Client, Config, SimpleQueryMessage, SimpleQueryRow};
use tracing::trace;

pub type PgInstaller = SqlInstaller<PgSession>;

impl SqlInstaller<PgSession> {
    pub async fn connect(config: &InstallerConfig) -> Result<Self, ConnectorError> {
        let session = PgSession::new(&config.conn_string)?;
        SqlInstaller::from_session(session, config.clear_method, config.skip_conn_check).await
    }
}

/// One Postgres client, opened on first use.
pub struct PgSession {
    config: Config,
    client: Option<Client>,
    dialect: dialect::Postgres,
    in_transaction: bool,
}

impl PgSession {
    /// Parses the URL; nothing is opened yet.
    pub fn new(url: &str) -> Result<Self, ConnectorError> {
        Ok(PgSession {
            config: parse_config(url)?,
            client: None,
            dialect: dialect::Postgres,
            in_transaction: false,
        })
    }

    async fn client(&mut self) -> Result<&Client, DbError> {
        if self.client.is_none() {
            let client = connect_client(&self.config).await?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| DbError::UnexpectedResult("Postgres client is not open".into()))
    }
}

#[async_trait]
impl SqlSession for PgSession {
    fn kind(&self) -> EngineKind {
        EngineKind::Postgres
    }

    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    async fn ping(&mut self) -> Result<(), DbError> {
        self.client().await?.simple_query("SELECT 1").await?;
        Ok(())
    }

    async fn exec(&mut self, sql: &str) -> Result<(), DbError> {
        self.client().await?.batch_execute(sql).await?;
        Ok(())
    }

    /// Values go out in the text format and the server converts each one to
    /// the type it inferred for the placeholder.
    async fn exec_params(&mut self, sql: &str, params: &[String]) -> Result<(), DbError> {
        let client = self.client().await?;
        let statement = client.prepare(sql).await?;
        trace!(types = ?statement.params(), ?params, "Binding Postgres parameters");

        let bindings = PgParamStore::from_text(params);
        client.execute(&statement, &bindings.as_refs()).await?;
        Ok(())
    }

    async fn query_text(&mut self, table: &str, sql: &str) -> Result<Vec<Row>, DbError> {
        let messages = self.client().await?.simple_query(sql).await?;
        messages
            .iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => Some(text_row(table, row)),
                _ => None,
            })
            .collect()
    }

    async fn query_count(&mut self, sql: &str) -> Result<i64, DbError> {
        let row = self.client().await?.query_one(sql, &[]).await?;
        Ok(row.try_get::<_, i64>(0)?)
    }

    async fn begin(&mut self) -> Result<(), DbError> {
        self.client().await?.batch_execute("BEGIN").await?;
        self.in_transaction = true;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DbError> {
        self.client().await?.batch_execute("ROLLBACK").await?;
        self.in_transaction = false;
        Ok(())
    }

    fn in_transaction(&self) -> bool {
        self.in_transaction
    }
}

fn text_row(table: &str, row: &SimpleQueryRow) -> Result<Row, DbError> {
    let mut text = Row::new(table);
    for (i, column) in row.columns().iter().enumerate() {
        let value = row.try_get(i)?.unwrap_or_default();
        text.insert(column.name(), value);
    }
    Ok(text)
}
