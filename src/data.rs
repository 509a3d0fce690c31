use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

pub mod form;
pub mod prodi;
pub mod student;

pub type RawRecord = Map<String, Value>;

///id of a record, the api hands out both numeric and string ids
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Number),
            Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    ///parses a form input, numbers stay numbers so the api gets the same shape it sent
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        Some(
            input
                .parse()
                .map_or_else(|_| Self::Text(input.to_string()), Self::Number),
        )
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

fn read_str<'a>(record: &'a RawRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

fn read_id(record: &RawRecord) -> Option<RecordId> {
    ["_id", "id"]
        .into_iter()
        .find_map(|key| record.get(key).and_then(RecordId::from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_parsing_keeps_numbers_numeric() {
        assert_eq!(RecordId::from_input("2"), Some(RecordId::Number(2)));
        assert_eq!(
            RecordId::from_input(" 65a1f "),
            Some(RecordId::Text("65a1f".into()))
        );
        assert_eq!(RecordId::from_input("   "), None);
    }

    #[test]
    fn id_prefers_underscore_id() {
        let record = json!({"_id": "abc123", "id": 7});
        let Value::Object(record) = record else {
            unreachable!()
        };
        assert_eq!(read_id(&record), Some(RecordId::Text("abc123".into())));
    }

    #[test]
    fn ids_serialise_untagged() {
        assert_eq!(serde_json::to_value(RecordId::Number(2)).unwrap(), json!(2));
        assert_eq!(
            serde_json::to_value(RecordId::Text("x".into())).unwrap(),
            json!("x")
        );
    }
}
