use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::ymd;
use crate::shared::aggregates::HasStatus;
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

/// Member with a completed registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub status: UserStatus,
}

impl Searchable for RegisteredUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl HasStatus for RegisteredUser {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalReason {
    #[serde(rename = "New Registration")]
    NewRegistration,
    #[serde(rename = "Account Reactivation")]
    AccountReactivation,
}

impl ApprovalReason {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalReason::NewRegistration => "New Registration",
            ApprovalReason::AccountReactivation => "Account Reactivation",
        }
    }
}

/// Applicant waiting for an admin decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub applied_date: NaiveDate,
    pub reason: ApprovalReason,
}

impl Searchable for PendingUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

fn registered(id: u32, name: &str, email: &str, phone: &str, join_date: NaiveDate, status: UserStatus) -> RegisteredUser {
    RegisteredUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        join_date,
        status,
    }
}

fn pending(id: u32, name: &str, email: &str, phone: &str, applied_date: NaiveDate, reason: ApprovalReason) -> PendingUser {
    PendingUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        applied_date,
        reason,
    }
}

static REGISTERED: Lazy<Vec<RegisteredUser>> = Lazy::new(|| {
    use UserStatus::*;
    vec![
        registered(1, "Ahmed Al-Rashid", "ahmed.r@email.com", "+966 50 123 4567", ymd(2025, 1, 15), Active),
        registered(2, "Sarah Al-Mutairi", "sarah.m@email.com", "+966 55 234 5678", ymd(2025, 1, 18), Active),
        registered(3, "Mohammed Al-Qahtani", "mohammed.q@email.com", "+966 54 345 6789", ymd(2025, 1, 20), Active),
        registered(4, "Noura Al-Dosari", "noura.d@email.com", "+966 50 456 7890", ymd(2025, 1, 22), Active),
        registered(5, "Khalid Al-Shahrani", "khalid.s@email.com", "+966 55 567 8901", ymd(2025, 1, 25), Active),
        registered(6, "Lama Al-Ghamdi", "lama.g@email.com", "+966 54 678 9012", ymd(2025, 1, 28), Inactive),
        registered(7, "Faisal Al-Harbi", "faisal.h@email.com", "+966 50 789 0123", ymd(2025, 2, 1), Active),
        registered(8, "Reem Al-Shammari", "reem.s@email.com", "+966 55 890 1234", ymd(2025, 2, 3), Active),
    ]
});

static AWAITING: Lazy<Vec<PendingUser>> = Lazy::new(|| {
    use ApprovalReason::*;
    vec![
        pending(9, "Fatima Al-Otaibi", "fatima.o@email.com", "+966 50 901 2345", ymd(2025, 2, 28), NewRegistration),
        pending(10, "Abdullah Al-Zahrani", "abdullah.z@email.com", "+966 55 012 3456", ymd(2025, 3, 1), NewRegistration),
        pending(11, "Maha Al-Anazi", "maha.a@email.com", "+966 54 123 4567", ymd(2025, 3, 2), AccountReactivation),
        pending(12, "Saud Al-Malki", "saud.m@email.com", "+966 50 234 5678", ymd(2025, 3, 2), NewRegistration),
    ]
});

pub fn registered_store() -> &'static [RegisteredUser] {
    &REGISTERED
}

pub fn awaiting_store() -> &'static [PendingUser] {
    &AWAITING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_across_both_lists() {
        let ids: HashSet<u32> = registered_store()
            .iter()
            .map(|u| u.id)
            .chain(awaiting_store().iter().map(|u| u.id))
            .collect();
        assert_eq!(ids.len(), registered_store().len() + awaiting_store().len());
    }

    #[test]
    fn search_by_phone_fragment() {
        let hits = filter_records(registered_store(), "678 9012");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Lama Al-Ghamdi");
    }

    #[test]
    fn search_by_email_domain_matches_all() {
        assert_eq!(
            filter_records(registered_store(), "@EMAIL.com").len(),
            registered_store().len()
        );
    }

    #[test]
    fn record_serializes_camel_case() {
        let json = serde_json::to_value(&awaiting_store()[2]).unwrap();
        assert_eq!(json["appliedDate"], "2025-03-02");
        assert_eq!(json["reason"], "Account Reactivation");
    }
}
