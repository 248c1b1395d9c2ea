use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Headline figure on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineStat {
    pub title: String,
    pub value: String,
    /// Change versus last month, already signed, e.g. `+12%`.
    pub change: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub subject: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingApproval {
    pub label: String,
    pub count: u32,
    pub note: String,
}

/// Everything the overview page shows. The figures are fixed, they are not
/// derived from the record stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub stats: Vec<HeadlineStat>,
    pub recent_activity: Vec<ActivityEntry>,
    pub pending_approvals: Vec<PendingApproval>,
}

fn stat(title: &str, value: &str, change: &str, icon: &str) -> HeadlineStat {
    HeadlineStat {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        icon: icon.into(),
    }
}

fn activity(action: &str, subject: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        action: action.into(),
        subject: subject.into(),
        time: time.into(),
    }
}

fn pending(label: &str, count: u32, note: &str) -> PendingApproval {
    PendingApproval {
        label: label.into(),
        count,
        note: note.into(),
    }
}

static OVERVIEW: Lazy<OverviewResponse> = Lazy::new(|| OverviewResponse {
    stats: vec![
        stat("Total Users", "2,847", "+12%", "users"),
        stat("Active Businesses", "156", "+8%", "building"),
        stat("Available Perks", "423", "+23%", "gift"),
        stat("Monthly Growth", "18.5%", "+4.2%", "trending-up"),
    ],
    recent_activity: vec![
        activity("New user registered", "Ahmed Al-Rashid", "2 minutes ago"),
        activity("Business approved", "Riyadh Coffee House", "15 minutes ago"),
        activity("Perk added", "25% off all beverages", "1 hour ago"),
        activity("Invite code generated", "SAUDI2025", "3 hours ago"),
        activity("User awaiting approval", "Fatima Al-Otaibi", "5 hours ago"),
    ],
    pending_approvals: vec![
        pending("Users Awaiting Approval", 12, "Pending verification"),
        pending("Business Applications", 5, "Pending review"),
        pending("Perk Submissions", 8, "Awaiting moderation"),
    ],
});

pub fn overview() -> &'static OverviewResponse {
    &OVERVIEW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_figures() {
        let o = overview();
        assert_eq!(o.stats.len(), 4);
        assert_eq!(o.stats[0].value, "2,847");
        assert_eq!(o.stats[3].change, "+4.2%");
        assert_eq!(o.recent_activity.len(), 5);
        let counts: Vec<u32> = o.pending_approvals.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![12, 5, 8]);
    }
}
