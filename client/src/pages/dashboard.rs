//! Dashboard page: stats, tabbed tables, growth chart, and archive.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It bounces signed-out visitors to
//! `/login`, re-checks session expiry on a timer while mounted, and lays out
//! the panels. Each panel reads `DataStore` and `UiState` from context.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::archive_panel::ArchivePanel;
use crate::components::growth_chart::GrowthChartPanel;
use crate::components::history_table::HistoryTable;
use crate::components::rejection_modal::RejectionModal;
use crate::components::requests_table::RequestsTable;
use crate::components::stats_strip::StatsStrip;
use crate::components::tab_bar::TabBar;
use crate::components::toolbar::Toolbar;
use crate::components::users_table::UsersTable;
use crate::state::auth::{AuthState, SESSION_EXPIRED_MESSAGE, SessionStatus};
use crate::state::ui::{Tab, UiState};
use crate::util::auth::install_unauth_redirect;

/// Auth state to install after a periodic session check, if it changed.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn session_watch_transition(current: &AuthState, status: SessionStatus) -> Option<AuthState> {
    if !current.signed_in {
        return None;
    }
    match status {
        SessionStatus::Valid => None,
        SessionStatus::Expired => Some(AuthState::signed_out(Some(SESSION_EXPIRED_MESSAGE.to_owned()))),
        SessionStatus::SignedOut => Some(AuthState::signed_out(None)),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        let gate = expect_context::<crate::state::auth::AuthGate>();
        let interval = expect_context::<crate::config::DashboardConfig>().session_watch_interval;
        let watch_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let watch_alive_task = watch_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !watch_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let status = gate.check_session();
                if let Some(next) = session_watch_transition(&auth.get_untracked(), status) {
                    log::info!("session watch signing out: {status:?}");
                    auth.set(next);
                }
            }
        });
        on_cleanup(move || watch_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let dismiss_notice = move |_| ui.update(|u| u.notice = None);
    // Narrow reads so typing in a panel does not rebuild it.
    let active_tab = Memo::new(move |_| ui.get().active_tab);
    let rejecting = Memo::new(move |_| ui.get().rejecting.clone());

    view! {
        <Show
            when=move || auth.get().signed_in
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Toolbar />
                <StatsStrip />
                <TabBar />
                <Show when=move || ui.get().notice.is_some()>
                    <div class="notice" role="status">
                        <span>{move || ui.get().notice.unwrap_or_default()}</span>
                        <button class="notice__close" on:click=dismiss_notice title="Dismiss">
                            "✕"
                        </button>
                    </div>
                </Show>
                <main class="dashboard-page__content">
                    {move || match active_tab.get() {
                        Tab::Users => view! { <UsersTable /> }.into_any(),
                        Tab::Rewards => view! { <RequestsTable /> }.into_any(),
                        Tab::History => view! { <HistoryTable /> }.into_any(),
                        Tab::Growth => view! { <GrowthChartPanel /> }.into_any(),
                        Tab::Archive => view! { <ArchivePanel /> }.into_any(),
                    }}
                </main>
                {move || rejecting.get().map(|request_id| view! { <RejectionModal request_id=request_id /> })}
            </div>
        </Show>
    }
}
