use crate::query::{
    ast::clear::Clear,
    renderer::{Render, Renderer},
};

impl Render for Clear {
    fn render(&self, r: &mut Renderer) {
        match self {
            Clear::Delete(table) => {
                r.sql.push_str("DELETE FROM ");
                r.render_table_ref(table);
            }
            Clear::Truncate(table) => {
                r.sql.push_str("TRUNCATE TABLE ");
                r.render_table_ref(table);
            }
        }
    }
}
