use mysql_async::Value as MySqlValue;
use mysql_common::params::Params;

/// A dataset value bound as a MySQL string; the server converts it to the
/// column type.
pub struct MySqlParam(MySqlValue);

impl MySqlParam {
    pub fn from_text(value: &str) -> Self {
        MySqlParam(MySqlValue::Bytes(value.as_bytes().to_vec()))
    }
}

pub struct MySqlParamStore {
    pub params: Vec<MySqlParam>,
}

impl MySqlParamStore {
    pub fn from_text(values: &[String]) -> Self {
        let params = values.iter().map(|v| MySqlParam::from_text(v)).collect();
        MySqlParamStore { params }
    }

    pub fn params(&self) -> Params {
        if self.params.is_empty() {
            return Params::Empty;
        }
        let mysql_values: Vec<MySqlValue> = self.params.iter().map(|p| p.0.clone()).collect();
        Params::Positional(mysql_values)
    }
}

/// Renders a value read from the server as text. NULL becomes `""`.
pub(crate) fn value_to_text(value: &MySqlValue) -> String {
    match value {
        MySqlValue::NULL => String::new(),
        MySqlValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        MySqlValue::Int(v) => v.to_string(),
        MySqlValue::UInt(v) => v.to_string(),
        MySqlValue::Float(v) => v.to_string(),
        MySqlValue::Double(v) => v.to_string(),
        MySqlValue::Date(year, month, day, hour, minute, second, micros) => {
            let mut text =
                format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
            if *micros > 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            text
        }
        MySqlValue::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if *negative { "-" } else { "" };
            let hours = u32::from(*days) * 24 + u32::from(*hours);
            let mut text = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
            if *micros > 0 {
                text.push_str(&format!(".{micros:06}"));
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_are_bound_as_strings() {
        let store = MySqlParamStore::from_text(&["1".to_string(), "alice".to_string()]);
        match store.params() {
            Params::Positional(values) => {
                assert_eq!(values[0], MySqlValue::Bytes(b"1".to_vec()));
                assert_eq!(values[1], MySqlValue::Bytes(b"alice".to_vec()));
            }
            other => panic!("unexpected params: {other:?}"),
        }
        assert_eq!(MySqlParamStore::from_text(&[]).params(), Params::Empty);
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&MySqlValue::NULL), "");
        assert_eq!(value_to_text(&MySqlValue::Bytes(b"abc".to_vec())), "abc");
        assert_eq!(value_to_text(&MySqlValue::Int(-5)), "-5");
        assert_eq!(
            value_to_text(&MySqlValue::Date(2024, 3, 1, 10, 5, 0, 0)),
            "2024-03-01 10:05:00"
        );
        assert_eq!(
            value_to_text(&MySqlValue::Date(2024, 3, 1, 10, 5, 0, 250)),
            "2024-03-01 10:05:00.000250"
        );
        assert_eq!(
            value_to_text(&MySqlValue::Time(true, 1, 2, 3, 4, 0)),
            "-26:03:04"
        );
    }
}
