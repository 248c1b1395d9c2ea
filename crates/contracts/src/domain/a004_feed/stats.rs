use super::aggregate::{store, Feed, FeedStatus};
use crate::shared::aggregates::count_by_status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub total: usize,
    pub published: usize,
    pub scheduled: usize,
    pub drafts: usize,
}

impl FeedStats {
    pub fn compute(items: &[Feed]) -> Self {
        Self {
            total: items.len(),
            published: count_by_status(items, FeedStatus::Published),
            scheduled: count_by_status(items, FeedStatus::Scheduled),
            drafts: count_by_status(items, FeedStatus::Draft),
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
        assert_eq!(
            FeedStats::current(),
            FeedStats {
                total: 4,
                published: 2,
                scheduled: 1,
                drafts: 1,
            }
        );
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = FeedStats::current();
        let visible = crate::shared::list_query::filter_records(store(), "no-such-feed");
        assert_eq!(visible.len(), 0);
        assert_eq!(FeedStats::current(), before);
    }
}
