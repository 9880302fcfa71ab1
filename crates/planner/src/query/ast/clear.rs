use crate::query::ast::common::TableRef;
use serde::{Deserialize, Serialize};

/// Empties a table, either row by row or in one shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clear {
    /// `DELETE FROM table`
    Delete(TableRef),
    /// `TRUNCATE TABLE table`
    Truncate(TableRef),
}
