use contracts::domain::a005_announcement::form::CreateAnnouncementDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AnnouncementsListState {
    pub search_query: RwSignal<String>,
    pub form: RwSignal<FormState<CreateAnnouncementDraft>>,
}

pub fn create_state() -> AnnouncementsListState {
    AnnouncementsListState {
        search_query: RwSignal::new(String::new()),
        form: RwSignal::new(FormState::new()),
    }
}
