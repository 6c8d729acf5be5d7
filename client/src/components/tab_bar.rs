//! Top-level tab strip.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

/// One button per `Tab`; exactly one carries the active class.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let on_click = move |_| {
                        ui.update(|u| {
                            if u.switch_tab(tab) {
                                log::debug!("growth chart initialized");
                            }
                        });
                    };
                    view! {
                        <button
                            class=move || {
                                if ui.get().is_active(tab) { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                            }
                            data-tab=tab.id()
                            on:click=on_click
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
