use crate::routes::Page;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from `?page=` and mirror later changes back
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(page_from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn page_from_query(search: &str) -> Page {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(PAGE_PARAM)
        .map(|key| Page::from_key(key))
        .unwrap_or_default()
}

fn query_for_page(page: Page) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([(PAGE_PARAM.to_string(), page.key().to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=jobs"), Page::Jobs);
        assert_eq!(page_from_query("page=plans&x=1"), Page::Plans);
        assert_eq!(page_from_query("?page=unknown"), Page::Dashboard);
        assert_eq!(page_from_query(""), Page::Dashboard);
    }

    #[test]
    fn test_query_for_page() {
        assert_eq!(query_for_page(Page::Subscriptions), "?page=subscriptions");
    }
}
