use crate::shared::data_table::Tone;
use leptos::prelude::*;

/// Status tag colored by its tone
#[component]
pub fn Badge(
    tone: Tone,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=tone.badge_class()>
            {children()}
        </span>
    }
}
