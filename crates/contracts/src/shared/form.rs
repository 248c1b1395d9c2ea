//! Create-dialog state shared by every management screen.
//!
//! A dialog edits a draft, checks that the required fields are present and,
//! when they are, hands a payload to a [`SubmissionSink`], resets the draft
//! and closes. A failed check leaves both the draft and the dialog as they
//! were and records the message shown in the dialog until it is next opened
//! or closed.

use serde::Serialize;
use thiserror::Error;

use super::submission::{Submission, SubmissionKind, SubmissionSink};

/// Why a draft was refused. Deliberately coarse: the UI shows one message,
/// not a per-field breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Please upload a document")]
    MissingDocument,
    #[error("Maximum uses must be a positive number")]
    InvalidMaxUses,
    #[error("A poll needs at least two options")]
    NotEnoughOptions,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A transient record accumulated by a create dialog.
pub trait FormDraft: Default + Clone {
    type Payload: Serialize;

    const KIND: SubmissionKind;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Only called after [`FormDraft::validate`] succeeded.
    fn to_payload(&self) -> Self::Payload;
}

/// `true` when any of the given values is empty.
pub fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub open: bool,
    /// Message of the last refused submit.
    pub error: Option<String>,
}

impl<D: FormDraft> FormState<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            open: false,
            error: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// Cancelling keeps the draft, reopening shows the same values.
    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    pub fn reset(&mut self) {
        self.draft = D::default();
    }

    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<Submission, SubmitError> {
        match self.try_submit(sink) {
            Ok(submission) => {
                self.reset();
                self.close();
                Ok(submission)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn try_submit(&self, sink: &dyn SubmissionSink) -> Result<Submission, SubmitError> {
        self.draft.validate()?;
        let submission = Submission::new(D::KIND, &self.draft.to_payload())?;
        sink.dispatch(&submission);
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::submission::testing::RecordingSink;

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    struct Note {
        title: String,
        body: String,
    }

    impl FormDraft for Note {
        type Payload = Note;
        const KIND: SubmissionKind = SubmissionKind::AddFeed;

        fn validate(&self) -> Result<(), ValidationError> {
            if any_blank(&[&self.title]) {
                return Err(ValidationError::MissingRequiredFields);
            }
            Ok(())
        }

        fn to_payload(&self) -> Note {
            self.clone()
        }
    }

    #[test]
    fn failed_validation_keeps_dialog_open_and_dispatches_nothing() {
        let sink = RecordingSink::default();
        let mut form = FormState::<Note>::new();
        form.open();
        form.edit(|d| d.body = "text".into());

        let err = form.submit(&sink).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ValidationError::MissingRequiredFields)));
        assert!(form.open);
        assert_eq!(form.draft.body, "text");
        assert_eq!(form.error.as_deref(), Some("Please fill in all required fields"));
        assert!(sink.sent.borrow().is_empty());
    }

    #[test]
    fn refused_message_is_gone_after_close_and_reopen() {
        let sink = RecordingSink::default();
        let mut form = FormState::<Note>::new();
        form.open();
        assert!(form.submit(&sink).is_err());
        assert!(form.error.is_some());

        form.close();
        assert_eq!(form.error, None);

        form.open();
        assert!(form.submit(&sink).is_err());
        form.open();
        assert_eq!(form.error, None);
    }

    #[test]
    fn successful_submit_clears_earlier_message() {
        let sink = RecordingSink::default();
        let mut form = FormState::<Note>::new();
        form.open();
        assert!(form.submit(&sink).is_err());
        form.edit(|d| d.title = "Hello".into());
        assert!(form.submit(&sink).is_ok());
        assert_eq!(form.error, None);
    }

    #[test]
    fn successful_submit_dispatches_resets_and_closes() {
        let sink = RecordingSink::default();
        let mut form = FormState::<Note>::new();
        form.open();
        form.edit(|d| {
            d.title = "Hello".into();
            d.body = "World".into();
        });

        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.payload["title"], "Hello");
        assert!(!form.open);
        assert_eq!(form.draft, Note::default());
        assert_eq!(sink.sent.borrow().len(), 1);
    }

    #[test]
    fn close_keeps_draft() {
        let mut form = FormState::<Note>::new();
        form.open();
        form.edit(|d| d.title = "kept".into());
        form.close();
        form.open();
        assert_eq!(form.draft.title, "kept");
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(ValidationError::MissingDocument.to_string(), "Please upload a document");
    }
}
