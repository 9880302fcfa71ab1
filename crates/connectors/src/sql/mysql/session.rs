use crate::sql::{
    base::{
        error::{ConnectorError, DbError},
        installer::SqlInstaller,
        session::SqlSession,
    },
    mysql::params::{MySqlParamStore, value_to_text},
};
use async_trait::async_trait;
use engine_config::{EngineKind, InstallerConfig};
use model::records::row::Row;
use mysql_async::{Conn, Opts, Pool, Row as MySqlRow, prelude::Queryable};
use planner::query::dialect::{self, Dialect};
use tracing::{debug, trace};

pub type MySqlInstaller = SqlInstaller<MySqlSession>;

impl SqlInstaller<MySqlSession> {
    pub async fn connect(config: &InstallerConfig) -> Result<Self, ConnectorError> {
        let session = MySqlSession::new(&config.conn_string)?;
        SqlInstaller::from_session(session, config.clear_method, config.skip_conn_check).await
    }
}

/// A MySQL pool with one connection pinned for the life of the session.
///
/// Pinning keeps `START TRANSACTION` and the statements after it on the same
/// server connection.
pub struct MySqlSession {
    pool: Pool,
    conn: Option<Conn>,
    dialect: dialect::MySql,
    in_transaction: bool,
}

impl MySqlSession {
    /// Parses the URL and prepares the pool; nothing is opened yet.
    pub fn new(url: &str) -> Result<Self, ConnectorError> {
        let opts = Opts::from_url(url).map_err(|err| ConnectorError::InvalidUrl(err.to_string()))?;
        Ok(MySqlSession {
            pool: Pool::new(opts),
            conn: None,
            dialect: dialect::MySql,
            in_transaction: false,
        })
    }

    async fn conn(&mut self) -> Result<&mut Conn, DbError> {
        if self.conn.is_none() {
            let conn = self.pool.get_conn().await.map_err(ConnectorError::from)?;
            debug!("MySQL connection opened");
            self.conn = Some(conn);
        }
        self.conn
            .as_mut()
            .ok_or_else(|| DbError::UnexpectedResult("MySQL connection is not open".into()))
    }
}

#[async_trait]
impl SqlSession for MySqlSession {
    fn kind(&self) -> EngineKind {
        EngineKind::MySql
    }

    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    async fn ping(&mut self) -> Result<(), DbError> {
        self.conn().await?.query_drop("SELECT 1").await?;
        Ok(())
    }

    async fn exec(&mut self, sql: &str) -> Result<(), DbError> {
        self.conn().await?.query_drop(sql).await?;
        Ok(())
    }

    async fn exec_params(&mut self, sql: &str, params: &[String]) -> Result<(), DbError> {
        let bindings = MySqlParamStore::from_text(params);
        trace!(?params, "Binding MySQL parameters");
        self.conn().await?.exec_drop(sql, bindings.params()).await?;
        Ok(())
    }

    async fn query_text(&mut self, table: &str, sql: &str) -> Result<Vec<Row>, DbError> {
        let rows: Vec<MySqlRow> = self.conn().await?.query(sql).await?;
        Ok(rows.iter().map(|row| text_row(table, row)).collect())
    }

    async fn query_count(&mut self, sql: &str) -> Result<i64, DbError> {
        self.conn()
            .await?
            .query_first::<i64, _>(sql)
            .await?
            .ok_or_else(|| DbError::UnexpectedResult(format!("`{sql}` returned no rows")))
    }

    async fn begin(&mut self) -> Result<(), DbError> {
        self.conn().await?.query_drop("START TRANSACTION").await?;
        self.in_transaction = true;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DbError> {
        self.conn().await?.query_drop("ROLLBACK").await?;
        self.in_transaction = false;
        Ok(())
    }

    fn in_transaction(&self) -> bool {
        self.in_transaction
    }
}

fn text_row(table: &str, row: &MySqlRow) -> Row {
    let mut text = Row::new(table);
    for (i, column) in row.columns_ref().iter().enumerate() {
        let value = row.as_ref(i).map(value_to_text).unwrap_or_default();
        text.insert(column.name_str().into_owned(), value);
    }
    text
}
