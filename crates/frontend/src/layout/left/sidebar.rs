//! Sidebar navigation between the console pages

use crate::layout::global_context::AppGlobalContext;
use crate::routes::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let items = Page::ALL
        .into_iter()
        .map(|page| {
            let is_active = move || ctx.active.get() == page;
            view! {
                <button
                    class=move || {
                        if is_active() { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                    }
                    on:click=move |_| ctx.open(page)
                >
                    <span class="sidebar__icon">{icon(page.icon())}</span>
                    <span class="sidebar__label">{page.title()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            {items}
        </nav>
    }
}
