use contracts::domain::a003_perk::form::AddPerkDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PerksListState {
    pub search_query: RwSignal<String>,
    pub form: RwSignal<FormState<AddPerkDraft>>,
}

pub fn create_state() -> PerksListState {
    PerksListState {
        search_query: RwSignal::new(String::new()),
        form: RwSignal::new(FormState::new()),
    }
}
