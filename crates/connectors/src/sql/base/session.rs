use crate::sql::base::error::DbError;
use async_trait::async_trait;
use engine_config::EngineKind;
use model::records::row::Row;
use planner::query::dialect::Dialect;

/// The statement-executing side of an installer.
///
/// A session owns one logical connection. Once [`SqlSession::begin`] has
/// succeeded, every statement runs inside that transaction until
/// [`SqlSession::rollback`].
#[async_trait]
pub trait SqlSession: Send {
    fn kind(&self) -> EngineKind;

    fn dialect(&self) -> &dyn Dialect;

    /// Opens the connection if needed and checks it with `SELECT 1`.
    async fn ping(&mut self) -> Result<(), DbError>;

    async fn exec(&mut self, sql: &str) -> Result<(), DbError>;

    /// Runs a parameterized statement. Values are bound in placeholder order.
    async fn exec_params(&mut self, sql: &str, params: &[String]) -> Result<(), DbError>;

    /// Runs a query and returns every row as text, tagged with `table`.
    /// NULL comes back as an empty string.
    async fn query_text(&mut self, table: &str, sql: &str) -> Result<Vec<Row>, DbError>;

    /// Runs a query returning a single integer.
    async fn query_count(&mut self, sql: &str) -> Result<i64, DbError>;

    async fn begin(&mut self) -> Result<(), DbError>;

    async fn rollback(&mut self) -> Result<(), DbError>;

    fn in_transaction(&self) -> bool;
}
