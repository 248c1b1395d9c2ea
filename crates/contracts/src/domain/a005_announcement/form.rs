use serde::Serialize;

use super::aggregate::{AnnouncementStatus, Audience, Priority};
use crate::shared::form::{any_blank, FormDraft, ValidationError};
use crate::shared::submission::SubmissionKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementDraft {
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub target_audience: Audience,
    /// Empty means "send now".
    pub scheduled_date: String,
    pub push_notification: bool,
}

impl Default for CreateAnnouncementDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            priority: Priority::Medium,
            target_audience: Audience::AllUsers,
            scheduled_date: String::new(),
            push_notification: true,
        }
    }
}

impl CreateAnnouncementDraft {
    pub fn is_scheduled(&self) -> bool {
        !self.scheduled_date.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_scheduled() {
            "Schedule"
        } else {
            "Send Now"
        }
    }

    pub fn intended_status(&self) -> AnnouncementStatus {
        if self.is_scheduled() {
            AnnouncementStatus::Scheduled
        } else {
            AnnouncementStatus::Sent
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub target_audience: Audience,
    pub scheduled_date: Option<String>,
    pub push_notification: bool,
    pub status: AnnouncementStatus,
}

impl FormDraft for CreateAnnouncementDraft {
    type Payload = NewAnnouncement;

    const KIND: SubmissionKind = SubmissionKind::CreateAnnouncement;

    fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.title, &self.message]) {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    fn to_payload(&self) -> NewAnnouncement {
        NewAnnouncement {
            title: self.title.clone(),
            message: self.message.clone(),
            priority: self.priority,
            target_audience: self.target_audience,
            scheduled_date: self.is_scheduled().then(|| self.scheduled_date.clone()),
            push_notification: self.push_notification,
            status: self.intended_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::submission::testing::RecordingSink;

    #[test]
    fn defaults() {
        let draft = CreateAnnouncementDraft::default();
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.target_audience, Audience::AllUsers);
        assert!(draft.push_notification);
        assert_eq!(draft.submit_label(), "Send Now");
    }

    #[test]
    fn scheduled_date_switches_label_and_status() {
        let sink = RecordingSink::default();
        let mut form = FormState::<CreateAnnouncementDraft>::new();
        form.open();
        form.edit(|d| {
            d.title = "Ramadan hours".into();
            d.message = "Partner opening hours change next week".into();
            d.scheduled_date = "2025-03-01".into();
        });
        assert_eq!(form.draft.submit_label(), "Schedule");

        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.payload["status"], "Scheduled");
        assert_eq!(sent.payload["scheduledDate"], "2025-03-01");
        assert_eq!(sent.payload["targetAudience"], "All Users");
        assert_eq!(form.draft, CreateAnnouncementDraft::default());
    }

    #[test]
    fn unscheduled_is_sent_immediately() {
        let draft = CreateAnnouncementDraft {
            title: "Hello".into(),
            message: "World".into(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.status, AnnouncementStatus::Sent);
        assert!(payload.scheduled_date.is_none());
    }

    #[test]
    fn message_is_required() {
        let draft = CreateAnnouncementDraft {
            title: "Hello".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }
}
