use super::aggregate::{store, Business, BusinessStatus};
use crate::shared::aggregates::{count_by_status, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub total_perks: u64,
}

impl BusinessStats {
    pub fn compute(items: &[Business]) -> Self {
        Self {
            total: items.len(),
            active: count_by_status(items, BusinessStatus::Active),
            pending: count_by_status(items, BusinessStatus::Pending),
            total_perks: sum_by(items, |b| b.perks_count as u64),
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
        let stats = BusinessStats::current();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total_perks, 38);
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = BusinessStats::current();
        let visible = crate::shared::list_query::filter_records(store(), "coffee");
        assert_eq!(visible.len(), 1);
        assert_eq!(BusinessStats::current(), before);
    }
}
