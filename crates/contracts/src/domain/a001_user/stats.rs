use super::aggregate::{awaiting_store, registered_store, PendingUser, RegisteredUser, UserStatus};
use crate::shared::aggregates::count_by_status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub registered: usize,
    pub active: usize,
    pub awaiting: usize,
}

impl UserStats {
    pub fn compute(registered: &[RegisteredUser], awaiting: &[PendingUser]) -> Self {
        Self {
            registered: registered.len(),
            active: count_by_status(registered, UserStatus::Active),
            awaiting: awaiting.len(),
        }
    }

    pub fn current() -> Self {
        Self::compute(registered_store(), awaiting_store())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_numbers() {
        let stats = UserStats::current();
        assert_eq!(stats.registered, 8);
        assert_eq!(stats.active, 7);
        assert_eq!(stats.awaiting, 4);
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = UserStats::current();
        let visible = crate::shared::list_query::filter_records(awaiting_store(), "no-such-user");
        assert_eq!(visible.len(), 0);
        assert_eq!(UserStats::current(), before);
    }
}
