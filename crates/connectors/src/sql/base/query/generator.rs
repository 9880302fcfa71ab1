use crate::sql::base::requests::ImageQuery;
use engine_config::ClearMethod;
use model::records::row::Row;
use planner::query::{
    ast::clear::Clear,
    builder::{insert::InsertBuilder, select::SelectBuilder},
    dialect::Dialect,
    renderer::{Render, Renderer},
};
use planner::table_ref;

/// Builds the statements an installer runs, in the dialect of its engine.
pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// `SELECT <columns|*> FROM <table> [ORDER BY ...]`
    pub fn select_image(&self, table: &str, query: &ImageQuery) -> String {
        let select = SelectBuilder::new(table_ref!(table))
            .columns(&query.columns)
            .order_by_all(&query.order_by)
            .build();

        let (sql, _) = self.render_ast(select);
        sql
    }

    pub fn count_rows(&self, table: &str) -> String {
        let select = SelectBuilder::new(table_ref!(table)).count().build();
        let (sql, _) = self.render_ast(select);
        sql
    }

    /// Single-row parameterized insert. Values are returned in placeholder order.
    pub fn insert_row(&self, row: &Row) -> (String, Vec<String>) {
        let insert = InsertBuilder::new(table_ref!(row.table))
            .values(row.data.iter())
            .build();
        self.render_ast(insert)
    }

    /// The statement emptying `table`, or `None` when the method keeps rows.
    pub fn clear_table(&self, table: &str, method: ClearMethod) -> Option<String> {
        let clear = match method {
            ClearMethod::NoClear => return None,
            ClearMethod::Truncate => Clear::Truncate(table_ref!(table)),
            ClearMethod::DeleteAll => Clear::Delete(table_ref!(table)),
        };
        let (sql, _) = self.render_ast(clear);
        Some(sql)
    }

    fn render_ast(&self, ast: impl Render) -> (String, Vec<String>) {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }
}
