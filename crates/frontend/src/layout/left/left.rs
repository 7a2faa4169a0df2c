use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible left column holding the sidebar
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
