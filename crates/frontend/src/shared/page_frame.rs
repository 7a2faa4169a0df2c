//! PageFrame: standard root wrapper of every console page.
//!
//! Sets `id` and `data-page-category` on the root element, renders the
//! page header (title, optional count badge, actions) and an error box.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_job--list" category=PAGE_CAT_LIST title="Jobs">
//!         <DataTable spec=job_table_spec() records=records on_changed=reload />
//!     </PageFrame>
//! }
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_job--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    title: &'static str,
    /// Error of the last load, shown above the content
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)] loading: Signal<bool>,
    /// Shows a "Refresh" button when set
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let refresh = on_refresh.map(|reload| {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| reload.run(())
                disabled=loading
            >
                {icon("refresh")}
                {move || if loading.get() { " Loading..." } else { " Refresh" }}
            </Button>
        }
    });

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">{refresh}</div>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {children()}
            </div>
        </div>
    }
}
