//! Shared list helpers: sort indicators, search highlighting, the search box

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::data_table::{SortDescriptor, SortDirection};
use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: &SortDescriptor, field: &str) -> &'static str {
    if sort.field != field {
        return " ⇅";
    }
    match sort.direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}

pub fn get_sort_class(sort: &SortDescriptor, field: &str) -> &'static str {
    if sort.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Split `text` into `(segment, is_match)` pairs, case-insensitive.
///
/// Matching runs over lowercased characters mapped back to the byte range
/// of the character they came from, so every slice lands on a boundary even
/// when lowercasing changes lengths.
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = filter.to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let folded: Vec<(char, usize, usize)> = text
        .char_indices()
        .flat_map(|(start, ch)| {
            let end = start + ch.len_utf8();
            ch.to_lowercase().map(move |lower| (lower, start, end))
        })
        .collect();

    let mut parts = Vec::new();
    let mut last_pos = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let window = &folded[i..i + needle.len()];
        let start = window[0].1;
        let is_match = start >= last_pos && window.iter().map(|f| f.0).eq(needle.iter().copied());
        if !is_match {
            i += 1;
            continue;
        }
        let end = window[needle.len() - 1].2;
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
        i += needle.len();
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Highlight matches of the search text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view();
    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text after the user stops typing
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input text, ahead of the debounced value
    let input_value = RwSignal::new(value.get_untracked());
    let generation = RwSignal::new(0u64);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let current = generation.get_untracked() + 1;
        generation.set(current);

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Superseded by a newer keystroke
            if generation.try_get_untracked() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        generation.update(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "form__input search-input__field search-input__field--active"
                    } else {
                        "form__input search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
