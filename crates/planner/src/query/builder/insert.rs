use crate::query::ast::{common::TableRef, insert::Insert};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    pub fn value(mut self, column: &str, value: &str) -> Self {
        self.ast.columns.push(column.to_string());
        self.ast.values.push(value.to_string());
        self
    }

    pub fn values<'a, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (column, value) in pairs {
            self = self.value(column, value);
        }
        self
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}
