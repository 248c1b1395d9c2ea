use contracts::domain::a007_invite_code::form::GenerateInviteCodeDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InviteCodesListState {
    pub search_query: RwSignal<String>,
    /// Code most recently copied, cleared after the feedback window.
    pub copied: RwSignal<Option<String>>,
    pub form: RwSignal<FormState<GenerateInviteCodeDraft>>,
}

pub fn create_state() -> InviteCodesListState {
    InviteCodesListState {
        search_query: RwSignal::new(String::new()),
        copied: RwSignal::new(None),
        form: RwSignal::new(FormState::new()),
    }
}
