use super::aggregate::{store, Perk, PerkStatus};
use crate::shared::aggregates::{count_by_status, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerkStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub redemptions: u64,
}

impl PerkStats {
    pub fn compute(items: &[Perk]) -> Self {
        Self {
            total: items.len(),
            active: count_by_status(items, PerkStatus::Active),
            pending: count_by_status(items, PerkStatus::Pending),
            redemptions: sum_by(items, |p| p.redeemed as u64),
        }
    }

    pub fn current() -> Self {
        Self::compute(store())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;

    #[test]
    fn sample_numbers() {
        let stats = PerkStats::current();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.redemptions, 762);
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = PerkStats::current();
        let visible = filter_records(store(), "spa");
        assert_eq!(visible.len(), 1);
        assert_eq!(PerkStats::current(), before);
    }
}
