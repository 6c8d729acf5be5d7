//! Pending reward requests with approve/reject actions.
//!
//! Resolved rows stay in place showing their action time until the
//! migration timer moves them to history.

use leptos::prelude::*;

use crate::components::users_table::run_export;
use crate::config::DashboardConfig;
use crate::state::records::RewardRequest;
use crate::state::store::{DataStore, ExportTarget};
use crate::state::ui::UiState;
use crate::util::clock::SharedClock;
use crate::util::schedule::schedule_migration;

#[component]
pub fn RequestsTable() -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let clock = expect_context::<SharedClock>();
    let config = expect_context::<DashboardConfig>();

    let on_approve = Callback::new(move |id: String| {
        let now = clock.now_ms();
        match store.try_update(|s| s.approve(&id, now)) {
            Some(Ok(())) => schedule_migration(store, id, config.migration_delay),
            Some(Err(e)) => {
                log::warn!("approve {id} refused: {e}");
                ui.update(|u| u.notice = Some(e.to_string()));
            }
            None => {}
        }
    });
    let on_reject = Callback::new(move |id: String| ui.update(|u| u.open_rejection(&id)));
    let on_export = move |_| run_export(store, ui, ExportTarget::Rewards);

    view! {
        <section class="panel requests-table">
            <div class="panel__header">
                <h2>"Reward Requests"</h2>
                <button class="btn btn--primary" on:click=on_export>"Export Rewards"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Request ID"</th>
                        <th>"User ID"</th>
                        <th>"Name"</th>
                        <th>"Reward"</th>
                        <th>"Payment Method"</th>
                        <th>"Payment Details"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.get().requests
                        key=|r: &RewardRequest| (r.id.clone(), r.status)
                        let:request
                    >
                        <RequestRow request=request on_approve=on_approve on_reject=on_reject />
                    </For>
                </tbody>
            </table>
            <Show when=move || store.get().requests.is_empty()>
                <p class="panel__empty">"No pending requests."</p>
            </Show>
        </section>
    }
}

#[component]
fn RequestRow(request: RewardRequest, on_approve: Callback<String>, on_reject: Callback<String>) -> impl IntoView {
    let status = request.status;
    let action = if request.is_pending() {
        let approve_id = request.id.clone();
        let reject_id = request.id.clone();
        view! {
            <button class="btn btn--approve" on:click=move |_| on_approve.run(approve_id.clone())>
                "Approve"
            </button>
            <button class="btn btn--reject" on:click=move |_| on_reject.run(reject_id.clone())>
                "Reject"
            </button>
        }
        .into_any()
    } else {
        view! { <span class="data-table__action-time">{request.action_label()}</span> }.into_any()
    };

    view! {
        <tr>
            <td>{request.id.clone()}</td>
            <td>{request.user_id.clone()}</td>
            <td>{request.name.clone()}</td>
            <td>{request.reward.clone()}</td>
            <td>{request.payment_method.label()}</td>
            <td class="data-table__details">
                {request
                    .payment_details
                    .split('\n')
                    .map(|line| view! { <div>{line.to_owned()}</div> })
                    .collect_view()}
            </td>
            <td>
                <span class=format!("status-badge status-badge--{}", status.as_str())>{status.as_str()}</span>
            </td>
            <td class="data-table__actions">{action}</td>
        </tr>
    }
}
