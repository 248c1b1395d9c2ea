//! Where finished forms go. There is no backend: submissions are written to
//! the log as JSON and acknowledged with a toast.

use contracts::shared::form::{FormDraft, FormState, SubmitError};
use contracts::shared::submission::{Submission, SubmissionSink};
use leptos::prelude::*;

use crate::shared::notifications::NotificationService;

#[derive(Clone, Copy)]
pub struct ConsoleSink {
    notifications: NotificationService,
}

impl ConsoleSink {
    pub fn new(notifications: NotificationService) -> Self {
        Self { notifications }
    }
}

impl SubmissionSink for ConsoleSink {
    fn dispatch(&self, submission: &Submission) {
        match serde_json::to_string(submission) {
            Ok(json) => log::info!("submission {:?}: {}", submission.kind, json),
            Err(e) => log::warn!("submission {} not printable: {}", submission.id, e),
        }
        self.notifications.success(submission.kind.success_message());
    }
}

/// Submit the dialog's draft. A refused draft keeps the dialog open with its
/// message and raises an error toast.
pub fn submit_form<D>(form: RwSignal<FormState<D>>, sink: &ConsoleSink)
where
    D: FormDraft + Send + Sync + 'static,
{
    let Some(result) = form.try_update(|f| f.submit(sink)) else {
        return;
    };
    match result {
        Ok(_) => {}
        Err(SubmitError::Invalid(reason)) => {
            log::debug!("form refused: {}", reason);
            sink.notifications.error(reason.to_string());
        }
        Err(e) => {
            log::error!("form could not be sent: {}", e);
            sink.notifications.error(e.to_string());
        }
    }
}
