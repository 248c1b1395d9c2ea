use serde::{Deserialize, Serialize};

/// Sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    Users,
    Businesses,
    Perks,
    Feeds,
    Announcements,
    Voting,
    InviteCodes,
}

impl Section {
    pub fn all() -> [Section; 8] {
        [
            Section::Dashboard,
            Section::Users,
            Section::Businesses,
            Section::Perks,
            Section::Feeds,
            Section::Announcements,
            Section::Voting,
            Section::InviteCodes,
        ]
    }

    /// Stable id, used in the URL query.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Businesses => "businesses",
            Section::Perks => "perks",
            Section::Feeds => "feeds",
            Section::Announcements => "announcements",
            Section::Voting => "voting",
            Section::InviteCodes => "invite-codes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Businesses => "Businesses",
            Section::Perks => "Perks",
            Section::Feeds => "Feeds",
            Section::Announcements => "Announcements",
            Section::Voting => "Voting & Polls",
            Section::InviteCodes => "Invite Codes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "layout-dashboard",
            Section::Users => "users",
            Section::Businesses => "building",
            Section::Perks => "gift",
            Section::Feeds => "rss",
            Section::Announcements => "megaphone",
            Section::Voting => "bar-chart",
            Section::InviteCodes => "ticket",
        }
    }

    /// Unknown ids fall back to the dashboard.
    pub fn from_id(id: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_id(section.id()), section);
        }
    }

    #[test]
    fn unknown_id_is_dashboard() {
        assert_eq!(Section::from_id("settings"), Section::Dashboard);
        assert_eq!(Section::from_id(""), Section::Dashboard);
    }

    #[test]
    fn serde_uses_ids() {
        assert_eq!(
            serde_json::to_string(&Section::InviteCodes).unwrap(),
            "\"invite-codes\""
        );
    }
}
