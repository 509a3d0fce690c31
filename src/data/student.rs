use crate::data::{RawRecord, RecordId, read_id, read_str};
use maud::{Markup, Render, html};
use serde::{Deserialize, Serialize};

///a student as the api sends it, unknown fields are kept untouched
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Student(pub RawRecord);

impl Student {
    pub fn id(&self) -> Option<RecordId> {
        read_id(&self.0)
    }

    pub fn nama(&self) -> Option<&str> {
        read_str(&self.0, "nama")
    }

    pub fn npm(&self) -> Option<&str> {
        read_str(&self.0, "npm")
    }

    pub fn jenis_kelamin(&self) -> Option<&str> {
        read_str(&self.0, "jenis_kelamin")
    }

    pub fn asal_sekolah(&self) -> Option<&str> {
        read_str(&self.0, "asal_sekolah")
    }

    pub fn prodi_id(&self) -> Option<RecordId> {
        self.0.get("prodi_id").and_then(RecordId::from_value)
    }
}

impl Render for Student {
    fn render(&self) -> Markup {
        html! {
            @if let Some(nama) = self.nama() {
                (nama)
            } @else {
                span class="italic" {"Tanpa nama"}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn budi() -> Student {
        serde_json::from_value(json!({
            "_id": "abc123",
            "nama": "Budi",
            "npm": "12345",
            "jenis_kelamin": "L",
            "asal_sekolah": "SMA 1",
            "prodi_id": 2,
            "createdAt": "2024-01-01"
        }))
        .unwrap()
    }

    #[test]
    fn accessors_read_observed_fields() {
        let student = budi();
        assert_eq!(student.id(), Some(RecordId::Text("abc123".into())));
        assert_eq!(student.nama(), Some("Budi"));
        assert_eq!(student.npm(), Some("12345"));
        assert_eq!(student.jenis_kelamin(), Some("L"));
        assert_eq!(student.asal_sekolah(), Some("SMA 1"));
        assert_eq!(student.prodi_id(), Some(RecordId::Number(2)));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let student = budi();
        let back = serde_json::to_value(&student).unwrap();
        assert_eq!(back["createdAt"], json!("2024-01-01"));
    }

    #[test]
    fn missing_fields_are_tolerated() {
        let student: Student = serde_json::from_value(json!({"npm": 1})).unwrap();
        assert_eq!(student.nama(), None);
        assert_eq!(student.npm(), None);
        assert_eq!(student.id(), None);
        assert!(student.render().into_string().contains("Tanpa nama"));
    }
}
