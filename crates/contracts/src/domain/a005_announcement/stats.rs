use super::aggregate::{store, Announcement, AnnouncementStatus};
use crate::shared::aggregates::{count_by_status, sum_by};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementStats {
    pub sent: usize,
    pub scheduled: usize,
    pub drafts: usize,
    pub total_views: u64,
}

impl AnnouncementStats {
    pub fn compute(items: &[Announcement]) -> Self {
        Self {
            sent: count_by_status(items, AnnouncementStatus::Sent),
            scheduled: count_by_status(items, AnnouncementStatus::Scheduled),
            drafts: count_by_status(items, AnnouncementStatus::Draft),
            total_views: sum_by(items, |a| a.views as u64),
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
        let stats = AnnouncementStats::current();
        assert_eq!(stats.sent, 3);
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.drafts, 1);
        assert_eq!(stats.total_views, 5526);
    }

    #[test]
    fn stats_ignore_the_search_query() {
        let before = AnnouncementStats::current();
        let visible = crate::shared::list_query::filter_records(store(), "no-such-announcement");
        assert_eq!(visible.len(), 0);
        assert_eq!(AnnouncementStats::current(), before);
    }
}
