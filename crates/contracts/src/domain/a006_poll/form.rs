use serde::Serialize;

use crate::shared::form::{any_blank, FormDraft, ValidationError};
use crate::shared::submission::SubmissionKind;

const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollDraft {
    pub question: String,
    pub description: String,
    pub options: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

impl Default for CreatePollDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            description: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl CreatePollDraft {
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Does nothing when only the minimum number of options is left.
    pub fn remove_option(&mut self, index: usize) {
        if self.options.len() > MIN_OPTIONS && index < self.options.len() {
            self.options.remove(index);
        }
    }

    pub fn update_option(&mut self, index: usize, text: String) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = text;
        }
    }

    pub fn can_remove_options(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    fn filled_options(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| !o.trim().is_empty())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPoll {
    pub question: String,
    pub description: String,
    pub options: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

impl FormDraft for CreatePollDraft {
    type Payload = NewPoll;

    const KIND: SubmissionKind = SubmissionKind::CreatePoll;

    fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.question, &self.start_date, &self.end_date]) {
            return Err(ValidationError::MissingRequiredFields);
        }
        if self.filled_options().len() < MIN_OPTIONS {
            return Err(ValidationError::NotEnoughOptions);
        }
        Ok(())
    }

    fn to_payload(&self) -> NewPoll {
        NewPoll {
            question: self.question.clone(),
            description: self.description.clone(),
            options: self.filled_options(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::submission::testing::RecordingSink;

    fn dated() -> CreatePollDraft {
        CreatePollDraft {
            question: "Favourite cuisine?".into(),
            start_date: "2025-04-01".into(),
            end_date: "2025-04-30".into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_two_empty_options() {
        assert_eq!(CreatePollDraft::default().options, vec!["", ""]);
    }

    #[test]
    fn never_drops_below_two_options() {
        let mut draft = CreatePollDraft::default();
        draft.remove_option(0);
        assert_eq!(draft.options.len(), 2);

        draft.add_option();
        draft.update_option(2, "Third".into());
        assert!(draft.can_remove_options());
        draft.remove_option(0);
        assert_eq!(draft.options, vec!["", "Third"]);
        assert!(!draft.can_remove_options());
    }

    #[test]
    fn blank_options_do_not_count() {
        let mut draft = dated();
        draft.update_option(0, "Najdi".into());
        draft.update_option(1, "   ".into());
        assert_eq!(draft.validate(), Err(ValidationError::NotEnoughOptions));
    }

    #[test]
    fn dates_are_required() {
        let mut draft = dated();
        draft.end_date.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn submit_sends_only_filled_options() {
        let sink = RecordingSink::default();
        let mut form = FormState::<CreatePollDraft>::new();
        form.open();
        form.edit(|d| {
            *d = dated();
            d.update_option(0, "Najdi".into());
            d.update_option(1, "Hijazi".into());
            d.add_option();
        });

        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.payload["options"], serde_json::json!(["Najdi", "Hijazi"]));
        assert_eq!(form.draft.options.len(), 2);
    }
}
