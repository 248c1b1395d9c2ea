//! Section → page mapping, the one place that knows every page.

use contracts::system::navigation::Section;
use leptos::prelude::*;

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_user::ui::list::UsersList;
use crate::domain::a002_business::ui::list::BusinessesList;
use crate::domain::a003_perk::ui::list::PerksList;
use crate::domain::a004_feed::ui::list::FeedsList;
use crate::domain::a005_announcement::ui::list::AnnouncementsList;
use crate::domain::a006_poll::ui::list::PollsList;
use crate::domain::a007_invite_code::ui::list::InviteCodesList;

pub fn render_section_content(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Section::Users => view! { <UsersList /> }.into_any(),
        Section::Businesses => view! { <BusinessesList /> }.into_any(),
        Section::Perks => view! { <PerksList /> }.into_any(),
        Section::Feeds => view! { <FeedsList /> }.into_any(),
        Section::Announcements => view! { <AnnouncementsList /> }.into_any(),
        Section::Voting => view! { <PollsList /> }.into_any(),
        Section::InviteCodes => view! { <InviteCodesList /> }.into_any(),
    }
}
