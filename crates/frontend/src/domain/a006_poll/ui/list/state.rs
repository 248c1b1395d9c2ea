use contracts::domain::a006_poll::aggregate::Poll;
use contracts::domain::a006_poll::form::CreatePollDraft;
use contracts::shared::form::FormState;
use contracts::shared::selection::Selection;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PollsListState {
    pub search_query: RwSignal<String>,
    pub selected: RwSignal<Selection<Poll>>,
    pub form: RwSignal<FormState<CreatePollDraft>>,
}

pub fn create_state() -> PollsListState {
    PollsListState {
        search_query: RwSignal::new(String::new()),
        selected: RwSignal::new(Selection::new()),
        form: RwSignal::new(FormState::new()),
    }
}
