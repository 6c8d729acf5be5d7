//! Dashboard header: title, demo-data toggle, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthGate, AuthState};
use crate::state::store::DataStore;
use crate::state::ui::UiState;
use crate::util::clock::SharedClock;
use crate::util::synthetic;

#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<RwSignal<DataStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let gate = expect_context::<AuthGate>();
    let clock = expect_context::<SharedClock>();
    let navigate = use_navigate();

    let on_toggle_data = move |_| {
        let now = clock.now_ms();
        let mut rng = synthetic::from_clock(now);
        let enabled = store.try_update(|s| s.toggle_synthetic(&mut rng, now)).unwrap_or(false);
        ui.update(|u| {
            if u.on_data_loaded(enabled) {
                log::debug!("growth chart initialized by demo data");
            }
        });
    };

    let on_logout = move |_| {
        gate.logout();
        ui.set(UiState::default());
        auth.set(AuthState::signed_out(None));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="dashboard-page__header toolbar">
            <span class="toolbar__title">"Admin Dashboard"</span>
            <span class="toolbar__spacer"></span>
            <button
                class=move || {
                    if store.get().synthetic { "btn toolbar__test-data btn--active" } else { "btn toolbar__test-data" }
                }
                on:click=on_toggle_data
                title="Toggle synthetic test data"
            >
                {move || if store.get().synthetic { "Test Data: On" } else { "Test Data: Off" }}
            </button>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
