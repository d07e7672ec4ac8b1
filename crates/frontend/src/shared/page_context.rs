use std::future::Future;

use contracts::domain::a001_person::aggregate::{PersonId, PERSON_ID_QUERY_KEY};
use contracts::shared::config::CatalogConfig;
use contracts::shared::error::CatalogError;
use contracts::shared::view_state::KeyedFetch;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use wasm_bindgen_futures::spawn_local;

use crate::shared::remote_catalog_client::RemoteCatalogClient;

/// Configuration provided by `App`; defaults when rendered outside of it
pub fn use_catalog_config() -> CatalogConfig {
    use_context::<CatalogConfig>().unwrap_or_default()
}

/// Raw `id` query parameter of the current URL, unvalidated
pub fn use_person_query() -> Memo<Option<String>> {
    let query = use_query_map();
    Memo::new(move |_| query.with(|q| q.get(PERSON_ID_QUERY_KEY)))
}

/// Drive `state` from the `id` in the URL.
///
/// The current parameter is applied right away; every later change re-activates
/// the state. When it asks for a fetch, `fetch` runs against the client and the
/// outcome is applied only if no newer activation happened in the meantime.
pub fn bind_to_person_query<S, F, Fut>(state: RwSignal<S>, label: &'static str, fetch: F)
where
    S: KeyedFetch + Send + Sync + 'static,
    S::Output: 'static,
    F: Fn(RemoteCatalogClient, PersonId) -> Fut + 'static,
    Fut: Future<Output = Result<S::Output, CatalogError>> + 'static,
{
    let client = RemoteCatalogClient::new(&use_catalog_config());
    let raw_id = use_person_query();

    let run = move |raw: Option<String>| {
        let Some(ticket) = state.try_update(|s| s.activate(raw.as_deref())).flatten() else {
            return;
        };

        log::info!("{}: fetching for person {}", label, ticket.person_id);
        let request = fetch(client.clone(), ticket.person_id);

        spawn_local(async move {
            let outcome = request.await;
            if let Err(e) = &outcome {
                log::warn!("{}: {}", label, e);
            }
            let applied = state
                .try_update(|s| s.resolve(&ticket, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!(
                    "{}: discarded stale response for person {}",
                    label,
                    ticket.person_id
                );
            }
        });
    };

    // applied before the first render: an invalid id goes straight to Invalid
    run(raw_id.get_untracked());

    Effect::new(move |_| run(raw_id.get()));
}
