use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// MySQL driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Postgres driver error.
    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// A lazily opened connection could not be established.
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectorError),

    #[error("A transaction is already active")]
    TransactionAlreadyActive,

    #[error("No active transaction to roll back")]
    NoActiveTransaction,

    /// The server answered with something the caller did not expect.
    #[error("Unexpected result: {0}")]
    UnexpectedResult(String),
}

/// Errors happening during installer or connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("MySQL connection failed: {0}")]
    MySql(#[from] mysql_async::Error),

    #[error("Postgres connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// The connection opened but the `SELECT 1` probe failed.
    #[error("Connection check failed: {0}")]
    Ping(#[source] Box<DbError>),
}
