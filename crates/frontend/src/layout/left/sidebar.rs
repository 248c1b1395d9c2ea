//! Sidebar: brand, one entry per section, theme switch and copyright.

use contracts::system::navigation::Section;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__logo">"CRCL"</span>
                <span class="app-sidebar__tagline">"Admin Panel"</span>
            </div>

            <nav class="app-sidebar__content">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active.get() == section
                                on:click=move |_| ctx.navigate(section)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(section.icon())}
                                    <span>{section.label()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <ThemeToggle />
                <div class="app-sidebar__copyright">"© 2025 Private CRCL"</div>
            </div>
        </div>
    }
}
