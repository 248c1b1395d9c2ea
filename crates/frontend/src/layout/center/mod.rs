pub mod registry;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content">
            {children()}
        </div>
    }
}

/// Page of the section currently selected in the sidebar.
#[component]
pub fn SectionContent() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || registry::render_section_content(ctx.active.get())
}
