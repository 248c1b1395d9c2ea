use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::form::AddBusinessDraft;
use contracts::shared::form::FormState;
use contracts::shared::selection::Selection;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BusinessesListState {
    pub search_query: RwSignal<String>,
    pub selected: RwSignal<Selection<Business>>,
    pub form: RwSignal<FormState<AddBusinessDraft>>,
}

pub fn create_state() -> BusinessesListState {
    BusinessesListState {
        search_query: RwSignal::new(String::new()),
        selected: RwSignal::new(Selection::new()),
        form: RwSignal::new(FormState::new()),
    }
}
