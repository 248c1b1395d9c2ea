use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::ymd;
use crate::shared::aggregates::{percentage, HasStatus};
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InviteCodeStatus {
    Active,
    Expired,
}

impl InviteCodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InviteCodeStatus::Active => "Active",
            InviteCodeStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteCode {
    pub id: u32,
    pub code: String,
    pub created_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub usage_count: u32,
    pub max_uses: u32,
    pub status: InviteCodeStatus,
    pub created_by: String,
}

impl InviteCode {
    /// Usage bar fill, capped at 100.
    pub fn usage_share(&self) -> f64 {
        percentage(self.usage_count as u64, self.max_uses as u64).min(100.0)
    }

    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.usage_count)
    }
}

impl Searchable for InviteCode {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.created_by.as_str()]
    }
}

impl HasStatus for InviteCode {
    type Status = InviteCodeStatus;

    fn status(&self) -> InviteCodeStatus {
        self.status
    }
}

fn invite_code(
    id: u32,
    code: &str,
    (created_date, expiry_date): (NaiveDate, NaiveDate),
    usage_count: u32,
    max_uses: u32,
    status: InviteCodeStatus,
) -> InviteCode {
    InviteCode {
        id,
        code: code.to_string(),
        created_date,
        expiry_date,
        usage_count,
        max_uses,
        status,
        created_by: "Admin User".to_string(),
    }
}

static INVITE_CODES: Lazy<Vec<InviteCode>> = Lazy::new(|| {
    use InviteCodeStatus::*;
    vec![
        invite_code(1, "SAUDI2025", (ymd(2025, 1, 10), ymd(2025, 12, 31)), 47, 100, Active),
        invite_code(2, "RIYADH100", (ymd(2025, 1, 15), ymd(2025, 6, 30)), 89, 100, Active),
        invite_code(3, "WELCOME2025", (ymd(2025, 1, 20), ymd(2025, 12, 31)), 156, 500, Active),
        invite_code(4, "JEDDAH50", (ymd(2025, 2, 1), ymd(2025, 5, 31)), 23, 50, Active),
        invite_code(5, "BETA2024", (ymd(2024, 12, 1), ymd(2024, 12, 31)), 100, 100, Expired),
        invite_code(6, "VIP2025", (ymd(2025, 2, 15), ymd(2025, 12, 31)), 12, 25, Active),
    ]
});

pub fn store() -> &'static [InviteCode] {
    &INVITE_CODES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;

    #[test]
    fn code_search_ignores_case() {
        let hits: Vec<u32> = filter_records(store(), "2025").iter().map(|c| c.id).collect();
        assert_eq!(hits, vec![1, 3, 6]);
        assert_eq!(filter_records(store(), "jeddah")[0].code, "JEDDAH50");
        assert_eq!(filter_records(store(), "admin").len(), 6);
    }

    #[test]
    fn usage_share_is_capped() {
        let mut code = store()[4].clone();
        assert_eq!(code.usage_share(), 100.0);
        code.usage_count = 150;
        assert_eq!(code.usage_share(), 100.0);
        assert_eq!(code.remaining_uses(), 0);
        code.max_uses = 0;
        assert_eq!(code.usage_share(), 0.0);
    }
}
