use super::aggregate::{store, Poll, PollStatus};
use crate::shared::aggregates::{count_by_status, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollStats {
    pub total: usize,
    pub active: usize,
    pub total_votes: u64,
    pub closed: usize,
}

impl PollStats {
    pub fn compute(items: &[Poll]) -> Self {
        Self {
            total: items.len(),
            active: count_by_status(items, PollStatus::Active),
            total_votes: sum_by(items, |p| p.total_votes as u64),
            closed: count_by_status(items, PollStatus::Closed),
        }
    }

    pub fn current() -> Self {
        Self::compute(store())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_numbers() {
        let stats = PollStats::current();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total_votes, 1836);
        assert_eq!(stats.closed, 1);
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = PollStats::current();
        let visible = crate::shared::list_query::filter_records(store(), "no-such-poll");
        assert_eq!(visible.len(), 0);
        assert_eq!(PollStats::current(), before);
    }
}
