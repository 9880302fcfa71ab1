use crate::query::ast::{
    common::{OrderDir, TableRef},
    select::{OrderByExpr, Projection, Select},
};

#[derive(Debug, Clone)]
pub struct SelectBuilder {
    ast: Select,
}

impl SelectBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Select {
                from: table,
                ..Default::default()
            },
        }
    }

    /// Restricts the projection. An empty list keeps `*`.
    pub fn columns(mut self, columns: &[String]) -> Self {
        if !columns.is_empty() {
            self.ast.projection = Projection::Columns(columns.to_vec());
        }
        self
    }

    pub fn count(mut self) -> Self {
        self.ast.projection = Projection::CountAll;
        self
    }

    pub fn order_by(mut self, column: &str, direction: OrderDir) -> Self {
        self.ast.order_by.push(OrderByExpr::new(column, direction));
        self
    }

    pub fn order_by_all(mut self, order_by: &[OrderByExpr]) -> Self {
        self.ast.order_by.extend(order_by.iter().cloned());
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_ref;

    #[test]
    fn test_empty_columns_keep_wildcard() {
        let ast = SelectBuilder::new(table_ref!("users")).columns(&[]).build();
        assert_eq!(ast.projection, Projection::Wildcard);
        assert!(ast.order_by.is_empty());
    }

    #[test]
    fn test_order_by_keeps_call_order() {
        let ast = SelectBuilder::new(table_ref!("users"))
            .order_by("b", OrderDir::Desc)
            .order_by("a", OrderDir::Asc)
            .build();

        let columns: Vec<_> = ast.order_by.iter().map(|o| o.column.as_str()).collect();
        assert_eq!(columns, vec!["b", "a"]);
    }
}
