//! Defines the AST for a single-row INSERT statement.

use crate::query::ast::common::TableRef;
use serde::{Deserialize, Serialize};

/// `columns` and `values` are parallel; every value is bound as a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    pub values: Vec<String>,
}
