//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Title"
//!     sort_field="title"
//!     current_sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field| state.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use crate::shared::data_table::SortDescriptor;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Column key sent to `on_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)] current_sort: Signal<SortDescriptor>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class="table__sortable-header" on:click=handle_click>
                {label}
                <span class=move || current_sort.with(|s| get_sort_class(s, &sort_field_for_class))>
                    {move || current_sort.with(|s| get_sort_indicator(s, &sort_field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
