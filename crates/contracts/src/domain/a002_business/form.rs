use serde::{Deserialize, Serialize};

use crate::shared::form::{any_blank, FormDraft, ValidationError};
use crate::shared::submission::SubmissionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum District {
    KingFahd,
    AlHamra,
    Olaya,
    AlMalqa,
    Tahlia,
    AlNakheel,
    AlAziziyah,
    AlRawdah,
}

impl District {
    pub fn all() -> [District; 8] {
        [
            District::KingFahd,
            District::AlHamra,
            District::Olaya,
            District::AlMalqa,
            District::Tahlia,
            District::AlNakheel,
            District::AlAziziyah,
            District::AlRawdah,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            District::KingFahd => "king-fahd",
            District::AlHamra => "al-hamra",
            District::Olaya => "olaya",
            District::AlMalqa => "al-malqa",
            District::Tahlia => "tahlia",
            District::AlNakheel => "al-nakheel",
            District::AlAziziyah => "al-aziziyah",
            District::AlRawdah => "al-rawdah",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            District::KingFahd => "King Fahd District",
            District::AlHamra => "Al-Hamra District",
            District::Olaya => "Olaya District",
            District::AlMalqa => "Al-Malqa District",
            District::Tahlia => "Tahlia Street",
            District::AlNakheel => "Al-Nakheel District",
            District::AlAziziyah => "Al-Aziziyah District",
            District::AlRawdah => "Al-Rawdah District",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.value() == value)
    }
}

/// Metadata of the registration document picked in the dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub name: String,
    pub size_bytes: u64,
}

impl DocumentInfo {
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBusinessDraft {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub district: Option<District>,
    pub password: String,
    pub document: Option<DocumentInfo>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBusiness {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub district: District,
    pub password: String,
    pub document: DocumentInfo,
}

impl FormDraft for AddBusinessDraft {
    type Payload = NewBusiness;

    const KIND: SubmissionKind = SubmissionKind::AddBusiness;

    fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.name, &self.email, &self.mobile, &self.password]) || self.district.is_none() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if self.document.is_none() {
            return Err(ValidationError::MissingDocument);
        }
        Ok(())
    }

    fn to_payload(&self) -> NewBusiness {
        NewBusiness {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            district: self.district.unwrap_or(District::KingFahd),
            password: self.password.clone(),
            document: self.document.clone().unwrap_or(DocumentInfo {
                name: String::new(),
                size_bytes: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FormState, SubmitError};
    use crate::shared::submission::testing::RecordingSink;

    fn filled() -> AddBusinessDraft {
        AddBusinessDraft {
            name: "Najd Bakery".into(),
            email: "hello@najdbakery.sa".into(),
            mobile: "+966 50 000 1111".into(),
            district: Some(District::Olaya),
            password: "s3cret".into(),
            document: Some(DocumentInfo {
                name: "cr.pdf".into(),
                size_bytes: 1_572_864,
            }),
        }
    }

    #[test]
    fn empty_password_is_refused_and_nothing_is_sent() {
        let sink = RecordingSink::default();
        let mut form = FormState::<AddBusinessDraft>::new();
        form.open();
        form.edit(|d| {
            *d = filled();
            d.password.clear();
        });

        let err = form.submit(&sink).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ValidationError::MissingRequiredFields)));
        assert!(form.open);
        assert!(sink.sent.borrow().is_empty());
    }

    #[test]
    fn missing_district_counts_as_missing_field() {
        let mut draft = filled();
        draft.district = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn document_is_checked_after_fields() {
        let mut draft = filled();
        draft.document = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingDocument));
        draft.name.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn complete_form_is_dispatched_and_reset() {
        let sink = RecordingSink::default();
        let mut form = FormState::<AddBusinessDraft>::new();
        form.open();
        form.edit(|d| *d = filled());

        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.kind, SubmissionKind::AddBusiness);
        assert_eq!(sent.payload["district"], "olaya");
        assert_eq!(sent.payload["document"]["name"], "cr.pdf");
        assert!(!form.open);
        assert_eq!(form.draft, AddBusinessDraft::default());
        assert_eq!(sink.sent.borrow().len(), 1);
    }

    #[test]
    fn document_size_in_megabytes() {
        assert_eq!(filled().document.unwrap().size_label(), "1.50 MB");
    }

    #[test]
    fn district_values_round_trip() {
        for d in District::all() {
            assert_eq!(District::from_value(d.value()), Some(d));
        }
        assert_eq!(District::from_value("downtown"), None);
    }
}
