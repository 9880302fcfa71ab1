use crate::sql::base::{
    error::{ConnectorError, DbError},
    query::generator::QueryGenerator,
    requests::ImageQuery,
    session::SqlSession,
};
use async_trait::async_trait;
use engine_config::{ClearMethod, EngineKind};
use model::records::image::Image;
use tracing::{debug, info};

/// Loads images into a database and reads tables back.
#[async_trait]
pub trait Installer: Send {
    /// Clears every table the image references, then inserts its rows one by
    /// one in image order. Rows without data are skipped. The first failing
    /// statement aborts the install; statements already run stay applied.
    async fn install_image(&mut self, image: &Image) -> Result<(), DbError>;

    async fn table_rows_count(&mut self, table: &str) -> Result<i64, DbError>;

    /// Reads `table` back as an image, every value as text.
    async fn table_image(&mut self, table: &str, query: &ImageQuery) -> Result<Image, DbError>;

    /// Starts a transaction that every later statement runs in.
    async fn with_transaction(&mut self) -> Result<(), DbError>;

    async fn rollback(&mut self) -> Result<(), DbError>;

    fn set_clear_method(&mut self, method: ClearMethod) -> &mut dyn Installer;

    fn clear_method(&self) -> ClearMethod;

    fn kind(&self) -> EngineKind;
}

/// Engine-independent installer over a [`SqlSession`].
pub struct SqlInstaller<S: SqlSession> {
    session: S,
    clear_method: ClearMethod,
}

impl<S: SqlSession> SqlInstaller<S> {
    /// Wraps a session. Unless `skip_conn_check` is set, the connection is
    /// opened and probed right away.
    pub async fn from_session(
        mut session: S,
        clear_method: ClearMethod,
        skip_conn_check: bool,
    ) -> Result<Self, ConnectorError> {
        if skip_conn_check {
            debug!(engine = %session.kind(), "Skipping connection check");
        } else {
            session.ping().await.map_err(|err| match err {
                DbError::Connection(err) => err,
                other => ConnectorError::Ping(Box::new(other)),
            })?;
            info!(engine = %session.kind(), "Connection check passed");
        }

        Ok(Self {
            session,
            clear_method,
        })
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn generator(&self) -> QueryGenerator<'_> {
        QueryGenerator::new(self.session.dialect())
    }

    async fn clear_tables(&mut self, image: &Image) -> Result<(), DbError> {
        if self.clear_method == ClearMethod::NoClear {
            return Ok(());
        }

        for table in image.tables() {
            let Some(sql) = self.generator().clear_table(table, self.clear_method) else {
                continue;
            };
            debug!(%sql, "Clearing table");
            self.session.exec(&sql).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<S: SqlSession> Installer for SqlInstaller<S> {
    async fn install_image(&mut self, image: &Image) -> Result<(), DbError> {
        self.clear_tables(image).await?;

        let mut inserted = 0usize;
        for row in image.iter().filter(|row| !row.is_empty()) {
            let (sql, params) = self.generator().insert_row(row);
            debug!(%sql, table = %row.table, "Inserting row");
            self.session.exec_params(&sql, &params).await?;
            inserted += 1;
        }

        info!(
            engine = %self.kind(),
            rows = inserted,
            skipped = image.len() - inserted,
            "Image installed"
        );
        Ok(())
    }

    async fn table_rows_count(&mut self, table: &str) -> Result<i64, DbError> {
        let sql = self.generator().count_rows(table);
        debug!(%sql, "Counting rows");
        self.session.query_count(&sql).await
    }

    async fn table_image(&mut self, table: &str, query: &ImageQuery) -> Result<Image, DbError> {
        let sql = self.generator().select_image(table, query);
        debug!(%sql, "Reading table image");
        let rows = self.session.query_text(table, &sql).await?;
        Ok(Image::from(rows))
    }

    async fn with_transaction(&mut self) -> Result<(), DbError> {
        if self.session.in_transaction() {
            return Err(DbError::TransactionAlreadyActive);
        }
        self.session.begin().await?;
        debug!(engine = %self.kind(), "Transaction started");
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DbError> {
        if !self.session.in_transaction() {
            return Err(DbError::NoActiveTransaction);
        }
        self.session.rollback().await?;
        debug!(engine = %self.kind(), "Transaction rolled back");
        Ok(())
    }

    fn set_clear_method(&mut self, method: ClearMethod) -> &mut dyn Installer {
        self.clear_method = method;
        self
    }

    fn clear_method(&self) -> ClearMethod {
        self.clear_method
    }

    fn kind(&self) -> EngineKind {
        self.session.kind()
    }
}
