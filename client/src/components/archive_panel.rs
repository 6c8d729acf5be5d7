//! Archive tab: archived users and archived rewards, each row exportable
//! and deletable once exported.

use leptos::prelude::*;

use crate::components::history_table::reason_text;
use crate::state::records::{ArchiveRecord, RewardHistoryEntry, UserRecord};
use crate::state::store::DataStore;
use crate::state::ui::{ArchiveTab, UiState};
use crate::util::clock::SharedClock;
use crate::util::format::{format_date, format_timestamp};

/// Row action shared by both archive tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowAction {
    Export,
    Delete,
}

#[component]
pub fn ArchivePanel() -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let clock = expect_context::<SharedClock>();

    let on_action = Callback::new(move |(action, id): (RowAction, String)| {
        let archive = ui.get_untracked().active_archive;
        let now = clock.now_ms();
        let result = store.try_update(|s| match action {
            RowAction::Export => s.export_single(archive, &id, now),
            RowAction::Delete => s.delete_single(archive, &id),
        });
        if let Some(Err(e)) = result {
            log::warn!("archive {action:?} of {id} refused: {e}");
            ui.update(|u| u.notice = Some(e.to_string()));
        }
    });

    view! {
        <section class="panel archive-panel">
            <div class="archive-panel__tabs">
                {ArchiveTab::ALL
                    .into_iter()
                    .map(|archive| {
                        view! {
                            <button
                                class=move || {
                                    if ui.get().is_archive_active(archive) {
                                        "archive-panel__tab archive-panel__tab--active"
                                    } else {
                                        "archive-panel__tab"
                                    }
                                }
                                data-archive=archive.id()
                                on:click=move |_| ui.update(|u| u.switch_archive_tab(archive))
                            >
                                {archive.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || ui.get().is_archive_active(ArchiveTab::Users)
                fallback=move || view! { <ArchivedRewards on_action=on_action /> }
            >
                <ArchivedUsers on_action=on_action />
            </Show>
        </section>
    }
}

#[component]
fn ArchivedUsers(on_action: Callback<(RowAction, String)>) -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"User ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Registered On"</th>
                    <th>"Exported On"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.get().archived_users
                    key=|u: &UserRecord| (u.id.clone(), u.exported_on)
                    let:user
                >
                    <tr>
                        <td>{user.id.clone()}</td>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>{format_date(user.registered_on)}</td>
                        <td>{user.exported_label()}</td>
                        <td class="data-table__actions">
                            <RowActions
                                id=user.id.clone()
                                deletable=user.ensure_deletable().is_ok()
                                on_action=on_action
                            />
                        </td>
                    </tr>
                </For>
            </tbody>
        </table>
    }
}

#[component]
fn ArchivedRewards(on_action: Callback<(RowAction, String)>) -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Request ID"</th>
                    <th>"Name"</th>
                    <th>"Reward"</th>
                    <th>"Status"</th>
                    <th>"Reason"</th>
                    <th>"Action Date"</th>
                    <th>"Exported On"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.get().archived_rewards
                    key=|e: &RewardHistoryEntry| (e.id.clone(), e.exported_on)
                    let:entry
                >
                    <tr>
                        <td>{entry.id.clone()}</td>
                        <td>{entry.name.clone()}</td>
                        <td>{entry.reward.clone()}</td>
                        <td>{entry.resolution.status().as_str()}</td>
                        <td>{reason_text(&entry)}</td>
                        <td>{format_timestamp(entry.action_at)}</td>
                        <td>{entry.exported_label()}</td>
                        <td class="data-table__actions">
                            <RowActions
                                id=entry.id.clone()
                                deletable=entry.ensure_deletable().is_ok()
                                on_action=on_action
                            />
                        </td>
                    </tr>
                </For>
            </tbody>
        </table>
    }
}

/// Export and delete buttons; delete stays disabled until the row is exported.
#[component]
fn RowActions(id: String, deletable: bool, on_action: Callback<(RowAction, String)>) -> impl IntoView {
    let export_id = id.clone();

    view! {
        <button class="btn btn--small" on:click=move |_| on_action.run((RowAction::Export, export_id.clone()))>
            "Export"
        </button>
        <button
            class="btn btn--small btn--danger"
            disabled=!deletable
            title=if deletable { "Delete record" } else { "Export before deleting" }
            on:click=move |_| on_action.run((RowAction::Delete, id.clone()))
        >
            "Delete"
        </button>
    }
}
