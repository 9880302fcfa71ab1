use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{Format, IsNull, ToSql, Type, to_sql_checked};

/// A dataset value bound in the text format.
///
/// The server parses it with the input function of the parameter type, so
/// every type (numeric, timestamptz, money, enums, arrays, ...) is read
/// exactly as `psql` would read the same literal, in the session's settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParam(pub String);

impl ToSql for TextParam {
    fn to_sql(
        &self,
        _ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        out.extend_from_slice(self.0.as_bytes());
        Ok(IsNull::No)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn encode_format(&self, _ty: &Type) -> Format {
        Format::Text
    }

    to_sql_checked!();
}

#[derive(Debug, Default)]
pub struct PgParamStore {
    pub params: Vec<TextParam>,
}

impl PgParamStore {
    pub fn from_text(values: &[String]) -> Self {
        Self {
            params: values.iter().cloned().map(TextParam).collect(),
        }
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>()
    }
}
