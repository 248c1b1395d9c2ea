use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::ymd;
use crate::shared::aggregates::HasStatus;
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessStatus {
    Active,
    Pending,
}

impl BusinessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessStatus::Active => "Active",
            BusinessStatus::Pending => "Pending",
        }
    }
}

/// Partner business offering perks on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub location: String,
    pub contact: String,
    pub email: String,
    pub perks_count: u32,
    pub rating: f32,
    pub status: BusinessStatus,
    pub join_date: NaiveDate,
}

impl Searchable for Business {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.location.as_str()]
    }
}

impl HasStatus for Business {
    type Status = BusinessStatus;

    fn status(&self) -> BusinessStatus {
        self.status
    }
}

#[allow(clippy::too_many_arguments)]
fn business(
    id: u32,
    name: &str,
    category: &str,
    location: &str,
    contact: &str,
    email: &str,
    perks_count: u32,
    rating: f32,
    status: BusinessStatus,
    join_date: NaiveDate,
) -> Business {
    Business {
        id,
        name: name.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        perks_count,
        rating,
        status,
        join_date,
    }
}

static BUSINESSES: Lazy<Vec<Business>> = Lazy::new(|| {
    use BusinessStatus::*;
    vec![
        business(1, "Riyadh Coffee House", "Café", "Riyadh, King Fahd District", "+966 50 111 2222", "info@riyadhcoffee.sa", 5, 4.8, Active, ymd(2024, 11, 15)),
        business(2, "Al-Nakheel Restaurant", "Restaurant", "Jeddah, Al-Hamra District", "+966 55 222 3333", "contact@alnakheel.sa", 3, 4.6, Active, ymd(2024, 12, 1)),
        business(3, "Desert Gym & Fitness", "Fitness", "Riyadh, Olaya District", "+966 54 333 4444", "hello@desertgym.sa", 8, 4.9, Active, ymd(2024, 10, 20)),
        business(4, "Saudi Spa & Wellness", "Spa", "Riyadh, Al-Malqa District", "+966 50 444 5555", "info@saudispa.sa", 4, 4.7, Active, ymd(2024, 11, 30)),
        business(5, "Tech Hub Store", "Electronics", "Jeddah, Red Sea Mall", "+966 55 555 6666", "support@techhub.sa", 12, 4.5, Active, ymd(2024, 9, 15)),
        business(6, "Fashion District", "Retail", "Riyadh, Tahlia Street", "+966 54 666 7777", "info@fashiondistrict.sa", 6, 4.4, Pending, ymd(2025, 2, 28)),
    ]
});

pub fn store() -> &'static [Business] {
    &BUSINESSES
}

/// Business names offered by the add-perk dialog.
pub fn names() -> Vec<&'static str> {
    store().iter().map(|b| b.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;
    use crate::shared::selection::Selection;

    #[test]
    fn coffee_query_returns_only_the_coffee_house() {
        let hits = filter_records(store(), "coffee");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Riyadh Coffee House");
        assert!(hits.iter().all(|b| b.name != "Al-Nakheel Restaurant"));
    }

    #[test]
    fn location_and_category_are_searched() {
        let riyadh: Vec<u32> = filter_records(store(), "riyadh").iter().map(|b| b.id).collect();
        assert_eq!(riyadh, vec![1, 3, 4, 6]);
        assert_eq!(filter_records(store(), "SPA").len(), 1);
    }

    #[test]
    fn selection_survives_a_filter_that_hides_it() {
        let mut selection = Selection::new();
        let gym = &store()[2];
        selection.select(gym);

        let visible = filter_records(store(), "coffee");
        assert!(!visible.iter().any(|b| b.id == gym.id));
        assert_eq!(selection.get(), Some(gym));
    }

    #[test]
    fn names_follow_store_order() {
        assert_eq!(names().first(), Some(&"Riyadh Coffee House"));
        assert_eq!(names().len(), 6);
    }
}
