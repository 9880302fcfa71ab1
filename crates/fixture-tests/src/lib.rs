#![allow(dead_code)]

use connectors::sql::postgres::utils::{connect_client, parse_config};
use fixture::{ClearMethod, EngineKind, InstallerConfig, Tester};
use mysql_async::{Pool, prelude::Queryable};
use std::env;
use tokio::sync::{Mutex, MutexGuard};

pub mod integration;
pub mod utils;

// Live database URLs; a test is skipped when its variable is unset.
const TEST_MYSQL_URL_VAR: &str = "DBFIXTURE_TEST_MYSQL_URL";
const TEST_PG_URL_VAR: &str = "DBFIXTURE_TEST_PG_URL";

/// Tests share one database and the same tables, so they take turns.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn lock_db() -> MutexGuard<'static, ()> {
    DB_LOCK.lock().await
}

fn test_url(var: &str) -> Option<String> {
    match env::var(var) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("{var} is not set, skipping");
            None
        }
    }
}

fn mysql_url() -> Option<String> {
    test_url(TEST_MYSQL_URL_VAR)
}

fn pg_url() -> Option<String> {
    test_url(TEST_PG_URL_VAR)
}

fn url_for(kind: EngineKind) -> Option<String> {
    match kind {
        EngineKind::MySql => mysql_url(),
        EngineKind::Postgres => pg_url(),
    }
}

/// Runs the DDL statements one by one against the engine's test database.
async fn execute(kind: EngineKind, url: &str, statements: &[&str]) {
    match kind {
        EngineKind::MySql => {
            let pool = Pool::from_url(url).expect("mysql url");
            let mut conn = pool.get_conn().await.expect("connect mysql");
            for statement in statements {
                conn.query_drop(*statement).await.expect("mysql ddl");
            }
            drop(conn);
            pool.disconnect().await.expect("disconnect mysql");
        }
        EngineKind::Postgres => {
            let config = parse_config(url).expect("postgres url");
            let client = connect_client(&config).await.expect("connect postgres");
            for statement in statements {
                client.batch_execute(statement).await.expect("postgres ddl");
            }
        }
    }
}

/// A tester for `kind` with the delete-all clear method, so reruns start
/// from empty tables.
async fn tester(kind: EngineKind, url: &str) -> Tester {
    let config = InstallerConfig::new(kind, url).with_clear_method(ClearMethod::DeleteAll);
    Tester::connect(config).await.expect("tester")
}
