use crate::query::{
    ast::select::{Projection, Select},
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        match &self.projection {
            Projection::Wildcard => r.sql.push('*'),
            Projection::Columns(columns) => r.render_identifier_list(columns),
            Projection::CountAll => r.sql.push_str("COUNT(*)"),
        }

        r.sql.push_str(" FROM ");
        r.render_table_ref(&self.from);

        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            let clauses: Vec<String> = self
                .order_by
                .iter()
                .map(|o| format!("{} {}", r.dialect.quote_identifier(&o.column), o.direction))
                .collect();
            r.sql.push_str(&clauses.join(", "));
        }
    }
}
