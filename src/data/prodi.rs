use crate::data::{RawRecord, RecordId, read_id, read_str};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Prodi(pub RawRecord);

impl Prodi {
    pub fn id(&self) -> Option<RecordId> {
        read_id(&self.0)
    }

    pub fn nama(&self) -> Option<&str> {
        ["nama_prodi", "nama"]
            .into_iter()
            .find_map(|key| read_str(&self.0, key))
    }

    ///label for dropdowns and tables, falls back on the id
    pub fn label(&self) -> String {
        self.nama()
            .map(ToString::to_string)
            .or_else(|| self.id().map(|id| id.to_string()))
            .unwrap_or_default()
    }
}

///weak lookup, the api never promises that a student's prodi still exists
pub fn find_prodi<'a>(all_prodi: &'a [Prodi], id: &RecordId) -> Option<&'a Prodi> {
    all_prodi.iter().find(|prodi| prodi.id().as_ref() == Some(id))
}

///maps a submitted `<option>` value back onto the loaded prodi id, parsing it only when nothing matches
pub fn resolve_prodi_input(all_prodi: &[Prodi], input: &str) -> Option<RecordId> {
    let input = input.trim();
    all_prodi
        .iter()
        .filter_map(Prodi::id)
        .find(|id| id.to_string() == input)
        .or_else(|| RecordId::from_input(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prodi(value: serde_json::Value) -> Prodi {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn label_prefers_nama_prodi() {
        let p = prodi(json!({"id": 2, "nama_prodi": "Informatika", "nama": "x"}));
        assert_eq!(p.label(), "Informatika");
    }

    #[test]
    fn label_falls_back_on_id() {
        let p = prodi(json!({"id": 2}));
        assert_eq!(p.label(), "2");
    }

    #[test]
    fn lookup_is_weak() {
        let all = vec![
            prodi(json!({"id": 1, "nama": "Sistem Informasi"})),
            prodi(json!({"id": 2, "nama": "Informatika"})),
        ];
        assert_eq!(
            find_prodi(&all, &RecordId::Number(2)).and_then(Prodi::nama),
            Some("Informatika")
        );
        assert!(find_prodi(&all, &RecordId::Number(9)).is_none());
    }

    #[test]
    fn submitted_value_keeps_the_server_id_type() {
        let all = vec![
            prodi(json!({"id": "007", "nama": "Sistem Informasi"})),
            prodi(json!({"id": "2", "nama": "Informatika"})),
            prodi(json!({"id": 3, "nama": "Teknik Elektro"})),
        ];

        assert_eq!(
            resolve_prodi_input(&all, "007"),
            Some(RecordId::Text("007".into()))
        );
        assert_eq!(
            resolve_prodi_input(&all, "2"),
            Some(RecordId::Text("2".into()))
        );
        assert_eq!(resolve_prodi_input(&all, "3"), Some(RecordId::Number(3)));
        assert_eq!(resolve_prodi_input(&all, "9"), Some(RecordId::Number(9)));
        assert_eq!(resolve_prodi_input(&all, ""), None);
    }
}
