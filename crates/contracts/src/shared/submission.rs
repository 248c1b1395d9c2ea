use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a create or moderation action is asking the platform to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    AddBusiness,
    AddPerk,
    AddFeed,
    CreateAnnouncement,
    GenerateInviteCode,
    CreatePoll,
    ApproveUser,
    RejectUser,
}

impl SubmissionKind {
    /// Message shown once the payload has been handed off.
    pub fn success_message(&self) -> &'static str {
        match self {
            SubmissionKind::AddBusiness => "Business added successfully!",
            SubmissionKind::AddPerk => "Perk created successfully!",
            SubmissionKind::AddFeed => "Feed published successfully!",
            SubmissionKind::CreateAnnouncement => "Announcement saved successfully!",
            SubmissionKind::GenerateInviteCode => "Invite code generated successfully!",
            SubmissionKind::CreatePoll => "Poll created successfully!",
            SubmissionKind::ApproveUser => "User approved",
            SubmissionKind::RejectUser => "User rejected",
        }
    }
}

/// Envelope handed to whatever sits behind the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub kind: SubmissionKind,
    pub submitted_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl Submission {
    pub fn new<P: Serialize>(kind: SubmissionKind, payload: &P) -> serde_json::Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            submitted_at: Utc::now(),
            payload: serde_json::to_value(payload)?,
        })
    }
}

/// Receiver of finished submissions. Dispatch is fire-and-forget: the caller
/// never waits for, retries or interprets an answer.
pub trait SubmissionSink {
    fn dispatch(&self, submission: &Submission);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Keeps every dispatched envelope for assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        pub sent: RefCell<Vec<Submission>>,
    }

    impl SubmissionSink for RecordingSink {
        fn dispatch(&self, submission: &Submission) {
            self.sent.borrow_mut().push(submission.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_wraps_payload_as_json() {
        let s = Submission::new(SubmissionKind::AddPerk, &json!({"title": "x"})).unwrap();
        assert_eq!(s.kind, SubmissionKind::AddPerk);
        assert_eq!(s.payload["title"], "x");

        let wire = serde_json::to_value(&s).unwrap();
        assert_eq!(wire["kind"], "add_perk");
        assert!(wire.get("submittedAt").is_some());
    }

    #[test]
    fn ids_are_unique() {
        let a = Submission::new(SubmissionKind::AddFeed, &()).unwrap();
        let b = Submission::new(SubmissionKind::AddFeed, &()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
