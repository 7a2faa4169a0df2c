use crate::shared::data_table::ROWS_PER_PAGE_OPTIONS;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to 5, 10, 15)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| ROWS_PER_PAGE_OPTIONS.to_vec());
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-total">
                {move || format!("Total {}", total_count.get())}
            </span>
            <label class="pagination-size">
                "Rows per page:"
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(val) = event_target_value(&ev).parse::<usize>() {
                            on_page_size_change.run(val);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
