use serde::Serialize;

use crate::shared::form::{any_blank, FormDraft, ValidationError};
use crate::shared::submission::SubmissionKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFeedDraft {
    pub title: String,
    pub description: String,
    /// Value of the `datetime-local` input, e.g. `2025-03-15T10:00`.
    pub date_time: String,
    pub location: String,
    pub image_name: Option<String>,
}

impl FormDraft for AddFeedDraft {
    type Payload = AddFeedDraft;

    const KIND: SubmissionKind = SubmissionKind::AddFeed;

    fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.title, &self.description]) {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    fn to_payload(&self) -> AddFeedDraft {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::submission::testing::RecordingSink;

    #[test]
    fn title_and_description_are_enough() {
        let sink = RecordingSink::default();
        let mut form = FormState::<AddFeedDraft>::new();
        form.open();
        form.edit(|d| d.title = "Night market".into());
        assert!(form.submit(&sink).is_err());
        assert!(form.open);

        form.edit(|d| d.description = "Food trucks and live music".into());
        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.kind, SubmissionKind::AddFeed);
        assert!(sent.payload["imageName"].is_null());
        assert_eq!(sink.sent.borrow().len(), 1);
    }
}
