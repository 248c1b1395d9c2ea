use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::{ymd, ymd_hm};
use crate::shared::aggregates::HasStatus;
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedStatus {
    Published,
    Scheduled,
    Draft,
}

impl FeedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeedStatus::Published => "Published",
            FeedStatus::Scheduled => "Scheduled",
            FeedStatus::Draft => "Draft",
        }
    }
}

/// Event card shown in the member app's feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub description: String,
    pub date_time: NaiveDateTime,
    pub location: String,
    pub status: FeedStatus,
    pub published_date: Option<NaiveDate>,
}

impl Feed {
    pub fn date_time_label(&self) -> String {
        self.date_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn published_label(&self) -> Option<String> {
        self.published_date.map(|date| format!("Published on {}", date))
    }
}

impl Searchable for Feed {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.location.as_str()]
    }
}

impl HasStatus for Feed {
    type Status = FeedStatus;

    fn status(&self) -> FeedStatus {
        self.status
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?w=400", photo)
}

static FEEDS: Lazy<Vec<Feed>> = Lazy::new(|| {
    vec![
        Feed {
            id: 1,
            image: unsplash("photo-1590846406792-0adc7f938f1d"),
            title: "New Coffee Shop Opens in Riyadh".into(),
            description: "Discover the newest artisan coffee shop featuring premium Saudi beans and traditional Arabian hospitality.".into(),
            date_time: ymd_hm(2025, 3, 15, 10, 0),
            location: "King Fahd District, Riyadh".into(),
            status: FeedStatus::Published,
            published_date: Some(ymd(2025, 3, 1)),
        },
        Feed {
            id: 2,
            image: unsplash("photo-1540189549336-e6e99c3679fe"),
            title: "Weekend Food Festival".into(),
            description: "Join us for a spectacular weekend celebrating Saudi cuisine with local restaurants and food vendors.".into(),
            date_time: ymd_hm(2025, 3, 20, 16, 0),
            location: "Jeddah Waterfront".into(),
            status: FeedStatus::Published,
            published_date: Some(ymd(2025, 2, 28)),
        },
        Feed {
            id: 3,
            image: unsplash("photo-1571902943202-507ec2618e8f"),
            title: "Fitness Week Special Offers".into(),
            description: "Get fit this month with exclusive gym memberships and wellness packages from our partner fitness centers.".into(),
            date_time: ymd_hm(2025, 3, 25, 8, 0),
            location: "Multiple Locations".into(),
            status: FeedStatus::Scheduled,
            published_date: Some(ymd(2025, 3, 5)),
        },
        Feed {
            id: 4,
            image: unsplash("photo-1607082348824-0a96f2a4b9da"),
            title: "Tech Hub Grand Opening".into(),
            description: "Experience the future of technology at our newest electronics store featuring the latest gadgets and innovations.".into(),
            date_time: ymd_hm(2025, 4, 1, 12, 0),
            location: "Red Sea Mall, Jeddah".into(),
            status: FeedStatus::Draft,
            published_date: None,
        },
    ]
});

pub fn store() -> &'static [Feed] {
    &FEEDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;

    #[test]
    fn description_and_location_are_searched() {
        let jeddah: Vec<u32> = filter_records(store(), "jeddah").iter().map(|f| f.id).collect();
        assert_eq!(jeddah, vec![2, 4]);
        assert_eq!(filter_records(store(), "saudi").len(), 2);
    }

    #[test]
    fn labels() {
        let feed = &store()[0];
        assert_eq!(feed.date_time_label(), "2025-03-15 10:00");
        assert_eq!(feed.published_label().as_deref(), Some("Published on 2025-03-01"));
        assert_eq!(store()[3].published_label(), None);
    }
}
