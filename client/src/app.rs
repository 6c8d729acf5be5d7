//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{AuthConfig, DashboardConfig};
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::{AuthGate, AuthState};
use crate::state::store::DataStore;
use crate::state::ui::UiState;
use crate::util::clock::{SharedClock, SystemClock};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let clock = SharedClock(Arc::new(SystemClock));
    let gate = AuthGate::new(Arc::new(BrowserStorage), clock.0.clone(), AuthConfig::default());

    let auth = RwSignal::new(AuthState::pending());
    let store = RwSignal::new(DataStore::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(gate.clone());
    provide_context(clock);
    provide_context(DashboardConfig::default());
    provide_context(auth);
    provide_context(store);
    provide_context(ui);

    // Effects only run after hydration, so SSR always renders the pending state.
    Effect::new(move || auth.set(gate.restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/reward-console.css"/>
        <Title text="Admin Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
