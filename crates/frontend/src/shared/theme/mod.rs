//! Light/dark theme.
//!
//! The choice is kept in localStorage. Without a stored value the browser's
//! `prefers-color-scheme` decides. The active theme is exposed to CSS through
//! the `dark` class on the document element.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the button that switches away from this theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Stored value first, then the system preference.
fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

fn load_theme_from_storage(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

fn save_theme_to_storage(key: &str, theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(key, theme.as_str()) {
            log::warn!("theme not saved: {:?}", e);
        }
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark);
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.storage_key
            .with_value(|key| save_theme_to_storage(key, theme));
        apply_theme_class(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

#[component]
pub fn ThemeProvider(storage_key: String, children: Children) -> impl IntoView {
    let stored = load_theme_from_storage(&storage_key);
    let initial = initial_theme(stored.as_deref(), system_prefers_dark());
    apply_theme_class(initial);
    log::debug!("theme on start: {}", initial.as_str());

    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button class="app-sidebar__item theme-toggle" on:click=move |_| ctx.toggle()>
            <div class="app-sidebar__item-content">
                {move || match ctx.theme.get() {
                    Theme::Light => icon("moon"),
                    Theme::Dark => icon("sun"),
                }}
                <span>{move || ctx.theme.get().toggle_label()}</span>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins() {
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
    }

    #[test]
    fn system_preference_is_the_fallback() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
        assert_eq!(initial_theme(Some("forest"), true), Theme::Dark);
    }

    #[test]
    fn toggling_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }
}
