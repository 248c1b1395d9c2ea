use contracts::domain::a004_feed::form::AddFeedDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FeedsListState {
    pub search_query: RwSignal<String>,
    pub form: RwSignal<FormState<AddFeedDraft>>,
}

pub fn create_state() -> FeedsListState {
    FeedsListState {
        search_query: RwSignal::new(String::new()),
        form: RwSignal::new(FormState::new()),
    }
}
