//! One network read per page load
//!
//! A page calls [`use_loader`] once; the fetch runs on mount and again on
//! every `reload`. A failed load keeps the table usable with an empty vector
//! and exposes the error text for the page to show.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{use_api, ApiClient, ApiError};

pub struct Loader<T: 'static> {
    pub records: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub reload: Callback<()>,
}

impl<T: 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Loader<T> {}

pub fn use_loader<T, F, Fut>(what: &'static str, fetch: F) -> Loader<T>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let api = use_api();
    let records = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reload = Callback::new(move |_: ()| {
        loading.set(true);
        error.set(None);
        let request = fetch(api.clone());
        spawn_local(async move {
            match request.await {
                Ok(data) => {
                    log::info!("Loaded {} {}", data.len(), what);
                    records.try_set(data);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", what, e);
                    error.try_set(Some(format!("Failed to load {}: {}", what, e)));
                    records.try_set(Vec::new());
                }
            }
            loading.try_set(false);
        });
    });

    Effect::new(move |_| reload.run(()));

    Loader {
        records,
        loading,
        error,
        reload,
    }
}
