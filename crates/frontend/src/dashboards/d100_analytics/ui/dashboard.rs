use contracts::dashboards::d100_analytics::AnalyticsSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_analytics::api;
use crate::shared::api_utils::use_api;
use crate::shared::charts::{counts, week_labels, LineChart, LineChartModel, Series};
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

const USERS_RGB: (u8, u8, u8) = (50, 150, 250);
const RESUMES_RGB: (u8, u8, u8) = (75, 192, 192);
const COVER_LETTERS_RGB: (u8, u8, u8) = (255, 159, 64);

pub fn registrations_chart(summary: &AnalyticsSummary) -> LineChartModel {
    LineChartModel::new(
        week_labels(&summary.users_data_weekly),
        vec![Series::new(
            "User Registrations",
            counts(&summary.users_data_weekly),
            USERS_RGB,
        )],
    )
}

/// Both series share the resume weeks as x axis
pub fn documents_chart(summary: &AnalyticsSummary) -> LineChartModel {
    LineChartModel::new(
        week_labels(&summary.resumes_data_weekly),
        vec![
            Series::new(
                "Resumes Generated",
                counts(&summary.resumes_data_weekly),
                RESUMES_RGB,
            ),
            Series::new(
                "Cover Letters Generated",
                counts(&summary.cover_letters_data_weekly),
                COVER_LETTERS_RGB,
            ),
        ],
    )
}

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let api = use_api();
    let (data, set_data) = signal(None::<AnalyticsSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = Callback::new(move |_: ()| {
        let api = api.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_analytics(&api).await {
                Ok(summary) => {
                    log::info!(
                        "Analytics loaded: {} users, {} resumes",
                        summary.total_users,
                        summary.total_resumes
                    );
                    set_data.try_set(Some(summary));
                }
                Err(e) => {
                    log::error!("Failed to load analytics: {}", e);
                    set_error.try_set(Some(format!("Failed to load analytics: {}", e)));
                }
            }
            set_loading.try_set(false);
        });
    });

    Effect::new(move |_| load.run(()));

    let total = move |pick: fn(&AnalyticsSummary) -> u64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(pick)))
    };
    let growth = move |pick: fn(&AnalyticsSummary) -> f64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(pick)))
    };

    let registrations = Signal::derive(move || {
        data.with(|d| d.as_ref().map(registrations_chart).unwrap_or_default())
    });
    let documents = Signal::derive(move || {
        data.with(|d| d.as_ref().map(documents_chart).unwrap_or_default())
    });

    view! {
        <PageFrame
            page_id="d100_analytics--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Dashboard"
            error=error
            loading=loading
            on_refresh=load
        >
            <div class="dashboard__cards">
                <StatCard
                    label="Total Users"
                    icon_name="users"
                    accent="stat-card--users"
                    value=total(|s| s.total_users)
                    growth=growth(|s| s.weekly_user_growth)
                />
                <StatCard
                    label="Total Resumes Generated"
                    icon_name="file"
                    accent="stat-card--resumes"
                    value=total(|s| s.total_resumes)
                    growth=growth(|s| s.weekly_resume_growth)
                />
                <StatCard
                    label="Total Cover Letters Generated"
                    icon_name="file"
                    accent="stat-card--letters"
                    value=total(|s| s.total_cover_letters)
                />
            </div>
            <div class="dashboard__charts">
                <LineChart title="User Registrations" model=registrations />
                <LineChart title="Resumes & Cover Letters Generated" model=documents />
            </div>
        </PageFrame>
    }
}
