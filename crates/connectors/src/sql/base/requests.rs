use planner::query::ast::{common::OrderDir, select::OrderByExpr};

/// Options for reading a table back as an image.
///
/// An empty `columns` list selects every column. `order_by` is rendered in
/// the order the entries were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQuery {
    pub columns: Vec<String>,
    pub order_by: Vec<OrderByExpr>,
}

impl ImageQuery {
    /// Every column, server order.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn column(mut self, column: &str) -> Self {
        self.columns.push(column.to_string());
        self
    }

    pub fn order_by(mut self, column: &str, direction: OrderDir) -> Self {
        self.order_by.push(OrderByExpr::new(column, direction));
        self
    }
}
