use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    #[default]
    Registered,
    Awaiting,
}

/// Each tab keeps its own query, switching tabs does not clear it.
#[derive(Clone, Copy)]
pub struct UsersListState {
    pub tab: RwSignal<UserTab>,
    pub registered_query: RwSignal<String>,
    pub awaiting_query: RwSignal<String>,
}

pub fn create_state() -> UsersListState {
    UsersListState {
        tab: RwSignal::new(UserTab::default()),
        registered_query: RwSignal::new(String::new()),
        awaiting_query: RwSignal::new(String::new()),
    }
}
