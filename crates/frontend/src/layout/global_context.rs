use std::collections::HashMap;

use contracts::system::navigation::Section;
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// UI state shared by the whole shell: the section in view and whether the
/// sidebar is shown.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

/// Section named by the `active` query parameter, if any.
fn section_from_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").map(|id| Section::from_id(id))
}

fn query_for(section: Section) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "active".to_string(),
        section.id().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

/// New query for `section`, or `None` when `current_search` already names it.
fn query_update(current_search: &str, section: Section) -> Option<String> {
    let new_url = query_for(section);
    (current_search != new_url).then_some(new_url)
}

/// Rewrites the address bar in place, without a history entry.
fn write_query(section: Section) {
    let Some(w) = window() else {
        return;
    };
    let current_search = w.location().search().unwrap_or_default();
    if let Some(new_url) = query_update(&current_search, section) {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Reads `?active=` once, then keeps the URL in step with the active
    /// section.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search) {
            self.navigate(section);
        }

        let this = *self;
        Effect::new(move |_| write_query(this.active.get()));
    }

    pub fn navigate(&self, section: Section) {
        log::debug!("navigate: {}", section.id());
        self.active.set(section);
    }

    /// Back to the dashboard, used on sign-out. The URL is rewritten here as
    /// well: the shell's sync effect is being disposed at that point.
    pub fn reset(&self) {
        self.active.set(Section::default());
        write_query(Section::default());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_round_trip() {
        assert_eq!(query_for(Section::InviteCodes), "?active=invite-codes");
        assert_eq!(section_from_query("?active=invite-codes"), Some(Section::InviteCodes));
        assert_eq!(section_from_query("active=perks"), Some(Section::Perks));
    }

    #[test]
    fn unknown_or_missing_query() {
        assert_eq!(section_from_query("?active=reports"), Some(Section::Dashboard));
        assert_eq!(section_from_query(""), None);
        assert_eq!(section_from_query("?tab=users"), None);
    }

    #[test]
    fn reset_target_replaces_a_stale_section() {
        assert_eq!(
            query_update("?active=perks", Section::default()),
            Some("?active=dashboard".to_string())
        );
        assert_eq!(query_update("?active=dashboard", Section::Dashboard), None);
        assert_eq!(
            section_from_query(&query_for(Section::default())),
            Some(Section::Dashboard)
        );
    }
}
