use contracts::shared::config::AuthConfig;
use contracts::system::auth::{verify_login, AdminProfile, AuthError, LoginRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Session of the signed-in admin. Lives in memory only, a reload signs out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub profile: Option<AdminProfile>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Wait out the configured delay, then check the credentials.
pub async fn do_login(request: LoginRequest, auth: &AuthConfig) -> Result<AdminProfile, AuthError> {
    TimeoutFuture::new(auth.login_delay_ms).await;
    let result = verify_login(&request, auth);
    match &result {
        Ok(profile) => log::info!("signed in as {}", profile.email),
        Err(e) => log::warn!("sign-in refused for {:?}: {}", request.email, e),
    }
    result
}

/// Drop the session and start over on the dashboard next time.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>, ctx: AppGlobalContext) {
    log::info!("signed out");
    set_auth_state.set(AuthState::default());
    ctx.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_signed_out() {
        assert!(!AuthState::default().is_authenticated());
        let state = AuthState {
            profile: Some(AdminProfile {
                name: "Admin User".into(),
                email: "admin@crcl.sa".into(),
            }),
        };
        assert!(state.is_authenticated());
    }
}
