use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::common::ymd;
use crate::shared::aggregates::{percentage, HasStatus};
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollStatus {
    Active,
    Closed,
    Scheduled,
}

impl PollStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PollStatus::Active => "Active",
            PollStatus::Closed => "Closed",
            PollStatus::Scheduled => "Scheduled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: u32,
    pub question: String,
    pub description: String,
    pub options: Vec<PollOption>,
    pub total_votes: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PollStatus,
    pub created_date: NaiveDate,
}

impl Poll {
    /// Share of the poll's votes going to `option`, in percent.
    pub fn option_share(&self, option: &PollOption) -> f64 {
        percentage(option.votes as u64, self.total_votes as u64)
    }

    /// Share formatted for the results panel, e.g. `30.9%`.
    pub fn option_share_label(&self, option: &PollOption) -> String {
        format!("{:.1}%", self.option_share(option))
    }
}

impl Searchable for Poll {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.description.as_str()]
    }
}

impl HasStatus for Poll {
    type Status = PollStatus;

    fn status(&self) -> PollStatus {
        self.status
    }
}

fn options(poll_id: u32, entries: &[(&str, u32)]) -> Vec<PollOption> {
    entries
        .iter()
        .zip('a'..)
        .map(|((text, votes), suffix)| PollOption {
            id: format!("{}{}", poll_id, suffix),
            text: text.to_string(),
            votes: *votes,
        })
        .collect()
}

fn poll(
    id: u32,
    question: &str,
    description: &str,
    entries: &[(&str, u32)],
    (start_date, end_date, created_date): (NaiveDate, NaiveDate, NaiveDate),
    status: PollStatus,
) -> Poll {
    let options = options(id, entries);
    let total_votes = options.iter().map(|o| o.votes).sum();
    Poll {
        id,
        question: question.to_string(),
        description: description.to_string(),
        options,
        total_votes,
        start_date,
        end_date,
        status,
        created_date,
    }
}

static POLLS: Lazy<Vec<Poll>> = Lazy::new(|| {
    use PollStatus::*;
    vec![
        poll(
            1,
            "What type of perks would you like to see more of?",
            "Help us improve your experience by telling us which categories interest you most.",
            &[
                ("Food & Dining", 245),
                ("Fitness & Wellness", 189),
                ("Entertainment", 156),
                ("Shopping & Retail", 203),
            ],
            (ymd(2025, 2, 15), ymd(2025, 3, 15), ymd(2025, 2, 10)),
            Active,
        ),
        poll(
            2,
            "How often do you use CRCL perks?",
            "Your feedback helps us understand user engagement patterns.",
            &[("Daily", 98), ("Weekly", 234), ("Monthly", 167), ("Rarely", 45)],
            (ymd(2025, 2, 1), ymd(2025, 2, 28), ymd(2025, 1, 25)),
            Closed,
        ),
        poll(
            3,
            "Best time for exclusive offers?",
            "When would you prefer to receive special offers and deals?",
            &[("Weekdays", 123), ("Weekends", 289), ("No preference", 87)],
            (ymd(2025, 3, 1), ymd(2025, 3, 31), ymd(2025, 2, 25)),
            Active,
        ),
        poll(
            4,
            "Rate our new app features",
            "Share your thoughts on the recently added features.",
            &[
                ("Excellent", 0),
                ("Good", 0),
                ("Average", 0),
                ("Needs Improvement", 0),
            ],
            (ymd(2025, 3, 20), ymd(2025, 4, 20), ymd(2025, 3, 5)),
            Scheduled,
        ),
    ]
});

pub fn store() -> &'static [Poll] {
    &POLLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_records;
    use crate::shared::selection::Selection;

    #[test]
    fn totals_match_option_votes() {
        let totals: Vec<u32> = store().iter().map(|p| p.total_votes).collect();
        assert_eq!(totals, vec![793, 544, 499, 0]);
        assert_eq!(store()[0].options[3].id, "1d");
    }

    #[test]
    fn option_share_has_one_decimal() {
        let poll = &store()[0];
        assert_eq!(poll.option_share_label(&poll.options[0]), "30.9%");
        let empty = &store()[3];
        assert_eq!(empty.option_share_label(&empty.options[0]), "0.0%");
    }

    #[test]
    fn selected_poll_stays_after_search() {
        let mut selection = Selection::new();
        selection.select(&store()[1]);
        assert!(filter_records(store(), "offers").iter().all(|p| p.id != 2));
        assert_eq!(selection.get().map(|p| p.id), Some(2));
    }
}
