use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::ymd;
use crate::shared::aggregates::HasStatus;
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerkStatus {
    Active,
    Pending,
}

impl PerkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PerkStatus::Active => "Active",
            PerkStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub id: u32,
    pub title: String,
    pub business: String,
    pub category: String,
    pub description: String,
    pub valid_until: NaiveDate,
    pub redeemed: u32,
    pub status: PerkStatus,
}

impl Searchable for Perk {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.business.as_str(), self.category.as_str()]
    }
}

impl HasStatus for Perk {
    type Status = PerkStatus;

    fn status(&self) -> PerkStatus {
        self.status
    }
}

fn perk(
    id: u32,
    (title, business, category): (&str, &str, &str),
    description: &str,
    valid_until: NaiveDate,
    redeemed: u32,
    status: PerkStatus,
) -> Perk {
    Perk {
        id,
        title: title.to_string(),
        business: business.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        valid_until,
        redeemed,
        status,
    }
}

static PERKS: Lazy<Vec<Perk>> = Lazy::new(|| {
    use PerkStatus::*;
    vec![
        perk(
            1,
            ("25% Off All Beverages", "Riyadh Coffee House", "Food & Drink"),
            "Get 25% discount on all hot and cold beverages",
            ymd(2025, 12, 31),
            142,
            Active,
        ),
        perk(
            2,
            ("Free Appetizer with Main Course", "Al-Nakheel Restaurant", "Food & Drink"),
            "Complimentary appetizer when you order any main course",
            ymd(2025, 6, 30),
            87,
            Active,
        ),
        perk(
            3,
            ("3 Months Free Membership", "Desert Gym & Fitness", "Fitness"),
            "Get 3 months of free gym membership for new members",
            ymd(2025, 4, 30),
            234,
            Active,
        ),
        perk(
            4,
            ("50% Off First Spa Treatment", "Saudi Spa & Wellness", "Wellness"),
            "Half price on your first spa treatment session",
            ymd(2025, 12, 31),
            98,
            Active,
        ),
        perk(
            5,
            ("Buy 1 Get 1 Free on Accessories", "Tech Hub Store", "Electronics"),
            "Purchase any accessory and get another one free",
            ymd(2025, 3, 31),
            156,
            Active,
        ),
        perk(
            6,
            ("20% Off Entire Purchase", "Fashion District", "Retail"),
            "Get 20% discount on your entire purchase",
            ymd(2025, 5, 31),
            45,
            Pending,
        ),
    ]
});

pub fn store() -> &'static [Perk] {
    &PERKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;

    #[test]
    fn searches_title_business_and_category() {
        assert_eq!(filter_records(store(), "food & drink").len(), 2);
        assert_eq!(filter_records(store(), "tech hub")[0].id, 5);
        assert_eq!(filter_records(store(), "membership")[0].id, 3);
    }

    #[test]
    fn description_is_not_searched() {
        assert!(filter_records(store(), "complimentary").is_empty());
    }
}
