use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::ymd;
use crate::shared::aggregates::HasStatus;
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnouncementStatus {
    Sent,
    Scheduled,
    Draft,
}

impl AnnouncementStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementStatus::Sent => "Sent",
            AnnouncementStatus::Scheduled => "Scheduled",
            AnnouncementStatus::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Audience {
    #[default]
    #[serde(rename = "All Users")]
    AllUsers,
    #[serde(rename = "New Users")]
    NewUsers,
    #[serde(rename = "Active Users")]
    ActiveUsers,
    Businesses,
}

impl Audience {
    pub fn all() -> [Audience; 4] {
        [
            Audience::AllUsers,
            Audience::NewUsers,
            Audience::ActiveUsers,
            Audience::Businesses,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::AllUsers => "All Users",
            Audience::NewUsers => "New Users",
            Audience::ActiveUsers => "Active Users",
            Audience::Businesses => "Businesses",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub target_audience: Audience,
    pub created_date: NaiveDate,
    pub scheduled_date: Option<NaiveDate>,
    pub status: AnnouncementStatus,
    pub push_notification: bool,
    pub views: u32,
}

impl Searchable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }
}

impl HasStatus for Announcement {
    type Status = AnnouncementStatus;

    fn status(&self) -> AnnouncementStatus {
        self.status
    }
}

static ANNOUNCEMENTS: Lazy<Vec<Announcement>> = Lazy::new(|| {
    use AnnouncementStatus::*;
    vec![
        Announcement {
            id: 1,
            title: "Platform Maintenance Notice".into(),
            message: "Our platform will undergo scheduled maintenance on March 15th from 2:00 AM to 4:00 AM. Services may be temporarily unavailable.".into(),
            priority: Priority::High,
            target_audience: Audience::AllUsers,
            created_date: ymd(2025, 3, 1),
            scheduled_date: Some(ymd(2025, 3, 15)),
            status: Scheduled,
            push_notification: true,
            views: 0,
        },
        Announcement {
            id: 2,
            title: "New Perks Available This Week".into(),
            message: "Check out the latest perks from our partner businesses! Limited time offers on dining, fitness, and entertainment.".into(),
            priority: Priority::Medium,
            target_audience: Audience::AllUsers,
            created_date: ymd(2025, 2, 25),
            scheduled_date: Some(ymd(2025, 2, 28)),
            status: Sent,
            push_notification: true,
            views: 1847,
        },
        Announcement {
            id: 3,
            title: "Welcome to CRCL!".into(),
            message: "Thank you for joining CRCL. Discover exclusive perks and benefits from the best businesses in Saudi Arabia.".into(),
            priority: Priority::Low,
            target_audience: Audience::NewUsers,
            created_date: ymd(2025, 2, 20),
            scheduled_date: Some(ymd(2025, 2, 20)),
            status: Sent,
            push_notification: false,
            views: 2156,
        },
        Announcement {
            id: 4,
            title: "Spring Sale Alert".into(),
            message: "Spring season special offers now live! Get up to 50% off on selected perks from our retail partners.".into(),
            priority: Priority::High,
            target_audience: Audience::AllUsers,
            created_date: ymd(2025, 3, 5),
            scheduled_date: None,
            status: Draft,
            push_notification: true,
            views: 0,
        },
        Announcement {
            id: 5,
            title: "Community Guidelines Update".into(),
            message: "We've updated our community guidelines. Please review the changes to ensure continued access to all features.".into(),
            priority: Priority::Medium,
            target_audience: Audience::AllUsers,
            created_date: ymd(2025, 2, 15),
            scheduled_date: Some(ymd(2025, 2, 18)),
            status: Sent,
            push_notification: false,
            views: 1523,
        },
    ]
});

pub fn store() -> &'static [Announcement] {
    &ANNOUNCEMENTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;

    #[test]
    fn title_and_message_are_searched() {
        assert_eq!(filter_records(store(), "perks").len(), 3);
        assert_eq!(filter_records(store(), "maintenance")[0].id, 1);
        assert!(filter_records(store(), "new users").is_empty());
    }

    #[test]
    fn audience_serialises_with_its_label() {
        let wire = serde_json::to_value(&store()[2]).unwrap();
        assert_eq!(wire["targetAudience"], "New Users");
        assert_eq!(wire["priority"], "Low");
        assert_eq!(Audience::from_label("Businesses"), Some(Audience::Businesses));
    }
}
