//! Glue between async API calls and list-page signals.

use std::future::Future;

use leptos::prelude::*;
use records::listing::Listed;
use serde::de::DeserializeOwned;

use super::api;
use crate::state::resource::ListState;

/// Run `fut` on the browser event loop. Server renders never issue
/// requests, so SSR drops it.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Fetch `path` into `state`, replacing its rows on success and recording
/// the error text on failure.
pub fn load_into<T>(state: RwSignal<ListState<T>>, path: String)
where
    T: Listed + Clone + DeserializeOwned + Send + Sync + 'static,
{
    state.update(ListState::begin_load);
    spawn(async move {
        let result = api::fetch_list::<T>(&path).await.map_err(|e| e.to_string());
        if let Err(err) = &result {
            leptos::logging::warn!("loading {path} failed: {err}");
        }
        state.update(|s| s.finish(result));
    });
}
