use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One record bound to a table: column name to textual value.
///
/// Columns keep the order they were added in, which is the attribute order
/// for parsed datasets and the result-set order for rows read back from a
/// database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub table: String,
    pub data: IndexMap<String, String>,
}

impl Row {
    pub fn new(table: &str) -> Self {
        Row {
            table: table.to_string(),
            data: IndexMap::new(),
        }
    }

    pub fn with_data<K, V, I>(table: &str, data: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Row {
            table: table.to_string(),
            data: data
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }

    /// Sets a column value, returning the previous one if the column existed.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.data.insert(column.into(), value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.data.values().map(String::as_str)
    }
}
