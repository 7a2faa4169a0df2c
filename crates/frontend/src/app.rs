use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::notifications::{NotificationService, Notifications};
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // The HTTP client is injected, pages never build their own
    provide_context(ApiClient::from_config(&config));
    provide_context(NotificationService::new(config.notice_timeout_ms));
    provide_context(config);

    view! {
        <AppRoutes />
        <Notifications />
    }
}
