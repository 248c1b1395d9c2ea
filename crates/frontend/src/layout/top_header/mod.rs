//! Top bar: sidebar toggle, page title, notifications and the signed-in
//! admin with a sign-out button.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

/// Unread notifications shown on the bell. There is no notification feed.
const UNREAD_NOTIFICATIONS: u32 = 3;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| do_logout(set_auth_state, ctx);

    let profile_name = move || {
        auth_state
            .get()
            .profile
            .map(|p| p.name)
            .unwrap_or_default()
    };
    let profile_email = move || {
        auth_state
            .get()
            .profile
            .map(|p| p.email)
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn top-header__bell" title="Notifications">
                    {icon("bell")}
                    <span class="top-header__badge">{UNREAD_NOTIFICATIONS}</span>
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <div class="top-header__user-text">
                        <span class="top-header__user-name">{profile_name}</span>
                        <span class="top-header__user-email">{profile_email}</span>
                    </div>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
