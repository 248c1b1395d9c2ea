use contracts::shared::config::AppConfig;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let notification_ms = config.ui.notification_ms;
    let theme_key = config.ui.theme_storage_key.clone();

    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_context(NotificationService::new(notification_ms));

    view! {
        <ThemeProvider storage_key=theme_key>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
            <NotificationHost />
        </ThemeProvider>
    }
}
