use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{do_login, use_auth, AuthState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_config = use_config().auth;
    let demo_email = auth_config.email.clone();
    let demo_password = auth_config.password.clone();
    let auth_config = StoredValue::new(auth_config);

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (remember_me, set_remember_me) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let auth = auth_config.get_value();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(request, &auth).await {
                Ok(profile) => {
                    // switches AppRoutes over to MainLayout
                    set_auth_state.set(AuthState {
                        profile: Some(profile),
                    });
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <div class="login-box__brand">
                        <span class="login-box__logo">"CRCL"</span>
                        <h1>"Admin Panel"</h1>
                        <p class="login-box__subtitle">"Sign in to access the admin dashboard"</p>
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email Address"</label>
                            <div class="input-with-icon">
                                {icon("mail")}
                                <input
                                    type="email"
                                    id="email"
                                    placeholder="admin@crcl.sa"
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    required
                                    disabled=move || is_loading.get()
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <div class="input-with-icon">
                                {icon("lock")}
                                <input
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    id="password"
                                    placeholder="Enter your password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    required
                                    disabled=move || is_loading.get()
                                />
                                <button
                                    type="button"
                                    class="input-with-icon__toggle"
                                    title=move || if show_password.get() { "Hide password" } else { "Show password" }
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                                </button>
                            </div>
                        </div>

                        <div class="login-box__options">
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || remember_me.get()
                                    on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                                />
                                " Remember me"
                            </label>
                            <a href="#" class="login-box__link" on:click=|ev| ev.prevent_default()>
                                "Forgot password?"
                            </a>
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <div class="login-info">
                        <p>"Demo credentials:"</p>
                        <p>"Email: " <strong>{demo_email}</strong></p>
                        <p>"Password: " <strong>{demo_password}</strong></p>
                    </div>
                </div>

                <p class="login-footer">"© 2025 Private CRCL. All rights reserved."</p>
            </div>
        </PageFrame>
    }
}
