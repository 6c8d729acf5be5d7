//! Resolved reward requests, newest first.

#[cfg(test)]
#[path = "history_table_test.rs"]
mod history_table_test;

use leptos::prelude::*;

use crate::state::records::RewardHistoryEntry;
use crate::state::store::DataStore;
use crate::util::format::format_timestamp;

/// Reason cell text; approvals have none.
pub fn reason_text(entry: &RewardHistoryEntry) -> String {
    entry.resolution.reason().unwrap_or("N/A").to_owned()
}

#[component]
pub fn HistoryTable() -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();

    view! {
        <section class="panel history-table">
            <div class="panel__header">
                <h2>"Reward History"</h2>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Request ID"</th>
                        <th>"User ID"</th>
                        <th>"Name"</th>
                        <th>"Reward"</th>
                        <th>"Status"</th>
                        <th>"Reason"</th>
                        <th>"Action Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || store.get().history key=|e: &RewardHistoryEntry| (e.id.clone(), e.action_at) let:entry>
                        {
                            let status = entry.resolution.status();
                            view! {
                                <tr>
                                    <td>{entry.id.clone()}</td>
                                    <td>{entry.user_id.clone()}</td>
                                    <td>{entry.name.clone()}</td>
                                    <td>{entry.reward.clone()}</td>
                                    <td>
                                        <span class=format!("status-badge status-badge--{}", status.as_str())>
                                            {status.as_str()}
                                        </span>
                                    </td>
                                    <td>{reason_text(&entry)}</td>
                                    <td>{format_timestamp(entry.action_at)}</td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || store.get().history.is_empty()>
                <p class="panel__empty">"No reward history yet."</p>
            </Show>
        </section>
    }
}
