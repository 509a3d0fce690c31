use crate::data::RecordId;
use serde::{Deserialize, Serialize};

///the five fields that get posted when adding a student
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub nama: String,
    pub npm: String,
    pub jenis_kelamin: String,
    pub asal_sekolah: String,
    pub prodi_id: Option<RecordId>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Nama,
    Npm,
    JenisKelamin,
    AsalSekolah,
    ProdiId,
}

impl FormField {
    #[cfg(test)]
    pub const ALL: [Self; 5] = [
        Self::Nama,
        Self::Npm,
        Self::JenisKelamin,
        Self::AsalSekolah,
        Self::ProdiId,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Nama => "nama",
            Self::Npm => "npm",
            Self::JenisKelamin => "jenis_kelamin",
            Self::AsalSekolah => "asal_sekolah",
            Self::ProdiId => "prodi_id",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldValidator {
    Required(FormField),
}

impl FieldValidator {
    fn passes(self, draft: &StudentDraft) -> bool {
        match self {
            Self::Required(field) => !draft.is_empty(field),
        }
    }
}

impl StudentDraft {
    pub fn is_empty(&self, field: FormField) -> bool {
        match field {
            FormField::Nama => self.nama.trim().is_empty(),
            FormField::Npm => self.npm.trim().is_empty(),
            FormField::JenisKelamin => self.jenis_kelamin.trim().is_empty(),
            FormField::AsalSekolah => self.asal_sekolah.trim().is_empty(),
            FormField::ProdiId => self.prodi_id.is_none(),
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Nama => self.nama = value.to_string(),
            FormField::Npm => self.npm = value.to_string(),
            FormField::JenisKelamin => self.jenis_kelamin = value.to_string(),
            FormField::AsalSekolah => self.asal_sekolah = value.to_string(),
            FormField::ProdiId => self.prodi_id = RecordId::from_input(value),
        }
    }

    pub fn get(&self, field: FormField) -> String {
        match field {
            FormField::Nama => self.nama.clone(),
            FormField::Npm => self.npm.clone(),
            FormField::JenisKelamin => self.jenis_kelamin.clone(),
            FormField::AsalSekolah => self.asal_sekolah.clone(),
            FormField::ProdiId => self
                .prodi_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

///holds the draft plus whatever validators got attached, none by default
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    draft: StudentDraft,
    validators: Vec<FieldValidator>,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_validators(validators: impl IntoIterator<Item = FieldValidator>) -> Self {
        Self {
            draft: StudentDraft::default(),
            validators: validators.into_iter().collect(),
        }
    }

    pub const fn value(&self) -> &StudentDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.draft.set(field, value);
    }

    pub fn set_prodi(&mut self, prodi_id: Option<RecordId>) {
        self.draft.prodi_id = prodi_id;
    }

    pub fn replace(&mut self, draft: StudentDraft) {
        self.draft = draft;
    }

    pub fn valid(&self) -> bool {
        self.validators.iter().all(|v| v.passes(&self.draft))
    }

    pub fn reset(&mut self) {
        self.draft = StudentDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_draft_serialises_with_null_prodi() {
        assert_eq!(
            serde_json::to_value(StudentDraft::default()).unwrap(),
            json!({"nama": "", "npm": "", "jenis_kelamin": "", "asal_sekolah": "", "prodi_id": null})
        );
    }

    #[test]
    fn form_without_validators_is_always_valid() {
        let form = StudentForm::new();
        assert!(form.valid());
    }

    #[test]
    fn required_validator_checks_emptiness() {
        let mut form = StudentForm::with_validators([
            FieldValidator::Required(FormField::Nama),
            FieldValidator::Required(FormField::ProdiId),
        ]);
        assert!(!form.valid());

        form.set_field(FormField::Nama, "Budi");
        assert!(!form.valid());

        form.set_field(FormField::ProdiId, "2");
        assert!(form.valid());

        form.set_field(FormField::Nama, "   ");
        assert!(!form.valid());
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut form = StudentForm::new();
        for field in FormField::ALL {
            form.set_field(field, "1");
        }
        assert_eq!(form.value().prodi_id, Some(RecordId::Number(1)));

        form.reset();
        assert_eq!(form.value(), &StudentDraft::default());
    }

    #[test]
    fn clearing_prodi_goes_back_to_null() {
        let mut draft = StudentDraft::default();
        draft.set(FormField::ProdiId, "2");
        draft.set(FormField::ProdiId, "");
        assert_eq!(draft.prodi_id, None);
        assert_eq!(draft.get(FormField::ProdiId), "");
    }
}
