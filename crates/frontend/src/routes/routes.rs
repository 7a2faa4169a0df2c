use crate::dashboards::d100_analytics::ui::dashboard::AnalyticsDashboard;
use crate::domain::a001_job::ui::list::JobList;
use crate::domain::a002_plan::ui::list::PlanList;
use crate::domain::a003_subscription::ui::list::SubscriptionList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;

/// Screens of the console, addressed by the `?page=` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    Plans,
    Subscriptions,
    Jobs,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Users,
        Page::Plans,
        Page::Subscriptions,
        Page::Jobs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Plans => "plans",
            Page::Subscriptions => "subscriptions",
            Page::Jobs => "jobs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Plans => "Plans",
            Page::Subscriptions => "Subscriptions",
            Page::Jobs => "Jobs",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Plans => "plans",
            Page::Subscriptions => "subscriptions",
            Page::Jobs => "jobs",
        }
    }

    /// Unknown keys land on the dashboard
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key.trim().to_lowercase())
            .unwrap_or_default()
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <AnalyticsDashboard /> }.into_any(),
        Page::Users => view! { <UserList /> }.into_any(),
        Page::Plans => view! { <PlanList /> }.into_any(),
        Page::Subscriptions => view! { <SubscriptionList /> }.into_any(),
        Page::Jobs => view! { <JobList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || render_page(ctx.active.get())
        />
    }
}
