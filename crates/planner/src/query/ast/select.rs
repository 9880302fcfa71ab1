//! Defines the Abstract Syntax Tree (AST) for a single-table SELECT query.

use crate::query::ast::common::{OrderDir, TableRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    /// What the query returns.
    pub projection: Projection,

    /// e.g., `FROM users`
    pub from: TableRef,

    /// The ORDER BY clause, rendered in list order.
    pub order_by: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// `SELECT *`
    #[default]
    Wildcard,
    /// `SELECT "a", "b"`
    Columns(Vec<String>),
    /// `SELECT COUNT(*)`
    CountAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderByExpr {
    pub column: String,
    pub direction: OrderDir,
}

impl OrderByExpr {
    pub fn new(column: &str, direction: OrderDir) -> Self {
        Self {
            column: column.to_string(),
            direction,
        }
    }
}
