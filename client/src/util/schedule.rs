//! Deferred dashboard work driven by browser timers.
//!
//! TRADE-OFFS
//! ==========
//! Timers exist only in the hydrated build. Server rendering never handles
//! clicks, so the SSR paths compile to no-ops.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::store::DataStore;

/// After `delay`, move a resolved request from the pending table into history.
/// No cancellation; if the row is gone or the data was reloaded by then,
/// nothing happens.
pub fn schedule_migration(store: RwSignal<DataStore>, request_id: String, delay: Duration) {
    let generation = store.with_untracked(|s| s.generation);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        let moved = store.try_update(|s| s.complete_migration(&request_id, generation));
        if moved != Some(true) {
            log::debug!("migration of {request_id} skipped; row already gone");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request_id, delay, generation);
    }
}
