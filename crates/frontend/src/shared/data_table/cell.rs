use leptos::prelude::*;

use super::column::{CellValue, NOT_AVAILABLE};
use crate::shared::components::ui::Badge;
use crate::shared::list_utils::highlight_matches;

/// View of one cell. Text is highlighted against the active search.
pub fn render_cell(value: CellValue, search: &str) -> AnyView {
    match value {
        CellValue::Missing => view! { <span class="cell--missing">{NOT_AVAILABLE}</span> }.into_any(),
        CellValue::Text(ref text) => highlight_matches(text, search),
        CellValue::Flag(flag, labels) => view! {
            <Badge tone=labels.tone(flag)>{labels.label(flag)}</Badge>
        }
        .into_any(),
        CellValue::List(items) => view! {
            <ul class="cell__list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        CellValue::Captioned { text, caption } => view! {
            <div class="cell__captioned">
                <span class="cell__primary">{highlight_matches(&text, search)}</span>
                <span class="cell__caption">{caption}</span>
            </div>
        }
        .into_any(),
        other => view! { <span>{other.display()}</span> }.into_any(),
    }
}
