//! Dialog collecting the reason for rejecting a reward request.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::state::store::DataStore;
use crate::state::ui::UiState;
use crate::util::clock::SharedClock;
use crate::util::schedule::schedule_migration;

/// Shown while `UiState::rejecting` names a request.
#[component]
pub fn RejectionModal(request_id: String) -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let clock = expect_context::<SharedClock>();
    let config = expect_context::<DashboardConfig>();

    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let close = Callback::new(move |()| ui.update(UiState::close_rejection));
    let on_backdrop = move |_| close.run(());
    let on_cancel = move |_| close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close.run(());
        }
    });

    let title_id = request_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = request_id.clone();
        let now = clock.now_ms();
        match store.try_update(|s| s.reject(&id, &reason.get_untracked(), now)) {
            Some(Ok(())) => {
                close.run(());
                schedule_migration(store, id, config.migration_delay);
            }
            Some(Err(e)) => {
                log::warn!("reject {id} refused: {e}");
                error.set(Some(e.to_string()));
            }
            None => close.run(()),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--reject"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>{format!("Reject {title_id}")}</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label" for="rejectionReason">"Reason"</label>
                    <textarea
                        id="rejectionReason"
                        class="dialog__textarea"
                        rows="3"
                        placeholder="Why is this request rejected?"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_cancel>"Cancel"</button>
                        <button type="submit" class="btn btn--reject">"Reject"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
