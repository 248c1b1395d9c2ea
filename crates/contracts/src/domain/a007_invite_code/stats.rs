use super::aggregate::{store, InviteCode, InviteCodeStatus};
use crate::shared::aggregates::{count_by_status, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InviteCodeStats {
    pub total: usize,
    pub active: usize,
    pub total_uses: u64,
    /// Uses still left on active codes.
    pub available_uses: u64,
}

impl InviteCodeStats {
    pub fn compute(items: &[InviteCode]) -> Self {
        Self {
            total: items.len(),
            active: count_by_status(items, InviteCodeStatus::Active),
            total_uses: sum_by(items, |c| c.usage_count as u64),
            available_uses: sum_by(items, |c| match c.status {
                InviteCodeStatus::Active => c.remaining_uses() as u64,
                InviteCodeStatus::Expired => 0,
            }),
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
        let stats = InviteCodeStats::current();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.total_uses, 427);
        assert_eq!(stats.available_uses, 448);
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = InviteCodeStats::current();
        let visible = crate::shared::list_query::filter_records(store(), "no-such-code");
        assert_eq!(visible.len(), 0);
        assert_eq!(InviteCodeStats::current(), before);
    }
}
