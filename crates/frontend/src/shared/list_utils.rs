//! Building blocks shared by the list pages: search box and result footer.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Free-text search box. The list re-filters on every keystroke.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button class="button button--secondary" title="Filter">
                {icon("filter")}
                " Filter"
            </button>
        </div>
    }
}

/// Footer line under a list, e.g. `Showing 2 of 6 businesses`.
pub fn showing_label(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {} of {} {}", shown, total, noun)
}

#[component]
pub fn ListFooter(
    #[prop(into)] shown: Signal<usize>,
    total: usize,
    noun: &'static str,
) -> impl IntoView {
    view! {
        <div class="list-footer">{move || showing_label(shown.get(), total, noun)}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_uses_filtered_count() {
        assert_eq!(showing_label(1, 6, "businesses"), "Showing 1 of 6 businesses");
        assert_eq!(showing_label(0, 5, "announcements"), "Showing 0 of 5 announcements");
    }
}
