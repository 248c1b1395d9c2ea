//! Approve / reject actions on the awaiting-approval tab.
//!
//! The pending list is never edited in place; a decision is only reported
//! through the submission sink.

use serde::Serialize;

use super::aggregate::PendingUser;
use crate::shared::submission::{Submission, SubmissionKind, SubmissionSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDecision {
    pub user_id: u32,
    pub name: String,
    pub email: String,
    pub decision: Decision,
}

impl UserDecision {
    pub fn new(user: &PendingUser, decision: Decision) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            decision,
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        match self.decision {
            Decision::Approve => SubmissionKind::ApproveUser,
            Decision::Reject => SubmissionKind::RejectUser,
        }
    }
}

pub fn submit_decision(
    user: &PendingUser,
    decision: Decision,
    sink: &dyn SubmissionSink,
) -> serde_json::Result<Submission> {
    let payload = UserDecision::new(user, decision);
    let submission = Submission::new(payload.kind(), &payload)?;
    sink.dispatch(&submission);
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::awaiting_store;
    use crate::shared::submission::testing::RecordingSink;

    #[test]
    fn reject_is_dispatched_and_store_is_untouched() {
        let sink = RecordingSink::default();
        let before = awaiting_store().len();
        let sent = submit_decision(&awaiting_store()[0], Decision::Reject, &sink).unwrap();

        assert_eq!(sent.kind, SubmissionKind::RejectUser);
        assert_eq!(sent.payload["userId"], 9);
        assert_eq!(sent.payload["decision"], "reject");
        assert_eq!(sink.sent.borrow().len(), 1);
        assert_eq!(awaiting_store().len(), before);
    }
}
