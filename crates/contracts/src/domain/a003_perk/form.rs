use serde::{Deserialize, Serialize};

use crate::shared::form::{any_blank, FormDraft, ValidationError};
use crate::shared::submission::SubmissionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerkCategory {
    Food,
    Fitness,
    Wellness,
    Electronics,
    Retail,
    Entertainment,
}

impl PerkCategory {
    pub fn all() -> [PerkCategory; 6] {
        [
            PerkCategory::Food,
            PerkCategory::Fitness,
            PerkCategory::Wellness,
            PerkCategory::Electronics,
            PerkCategory::Retail,
            PerkCategory::Entertainment,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            PerkCategory::Food => "food",
            PerkCategory::Fitness => "fitness",
            PerkCategory::Wellness => "wellness",
            PerkCategory::Electronics => "electronics",
            PerkCategory::Retail => "retail",
            PerkCategory::Entertainment => "entertainment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerkCategory::Food => "Food & Drink",
            PerkCategory::Fitness => "Fitness",
            PerkCategory::Wellness => "Wellness",
            PerkCategory::Electronics => "Electronics",
            PerkCategory::Retail => "Retail",
            PerkCategory::Entertainment => "Entertainment",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPerkDraft {
    pub title: String,
    pub business: String,
    pub category: Option<PerkCategory>,
    pub description: String,
    /// `YYYY-MM-DD` as produced by the date input.
    pub valid_until: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerk {
    pub title: String,
    pub business: String,
    pub category: PerkCategory,
    pub description: String,
    pub valid_until: String,
}

impl FormDraft for AddPerkDraft {
    type Payload = NewPerk;

    const KIND: SubmissionKind = SubmissionKind::AddPerk;

    fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.title, &self.business]) || self.category.is_none() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    fn to_payload(&self) -> NewPerk {
        NewPerk {
            title: self.title.clone(),
            business: self.business.clone(),
            category: self.category.unwrap_or(PerkCategory::Food),
            description: self.description.clone(),
            valid_until: self.valid_until.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::submission::testing::RecordingSink;

    #[test]
    fn category_is_required() {
        let draft = AddPerkDraft {
            title: "Free dessert".into(),
            business: "Al-Nakheel Restaurant".into(),
            category: None,
            description: "With any main".into(),
            valid_until: "2025-09-30".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn description_and_date_are_optional() {
        let draft = AddPerkDraft {
            title: "Free dessert".into(),
            business: "Al-Nakheel Restaurant".into(),
            category: Some(PerkCategory::Food),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn submit_sends_category_value() {
        let sink = RecordingSink::default();
        let mut form = FormState::<AddPerkDraft>::new();
        form.open();
        form.edit(|d| {
            d.title = "Free dessert".into();
            d.business = "Al-Nakheel Restaurant".into();
            d.category = PerkCategory::from_value("food");
            d.description = "With any main".into();
            d.valid_until = "2025-09-30".into();
        });

        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.payload["category"], "food");
        assert_eq!(sent.payload["validUntil"], "2025-09-30");
        assert!(!form.open);
    }
}
