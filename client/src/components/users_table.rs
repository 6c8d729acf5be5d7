//! New-users table with search and bulk export.

use leptos::prelude::*;

use crate::state::records::UserRecord;
use crate::state::store::{DataStore, ExportTarget};
use crate::state::ui::UiState;
use crate::util::search::row_matches;

/// Run a bulk export and post the outcome as a notice.
pub fn run_export(store: RwSignal<DataStore>, ui: RwSignal<UiState>, target: ExportTarget) {
    let notice = match store.with_untracked(|s| s.export(target)) {
        Ok(_) => target.notice().to_owned(),
        Err(e) => {
            log::warn!("export failed: {e}");
            e.to_string()
        }
    };
    ui.update(|u| u.notice = Some(notice));
}

#[component]
pub fn UsersTable() -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_search = move |ev| {
        let term = event_target_value(&ev);
        ui.update(|u| u.search = term);
    };
    let on_export = move |_| run_export(store, ui, ExportTarget::Users);

    view! {
        <section class="panel users-table">
            <div class="panel__header">
                <h2>"New Users"</h2>
                <input
                    class="panel__search"
                    type="search"
                    placeholder="Search users..."
                    prop:value=move || ui.get().search
                    on:input=on_search
                />
                <button class="btn btn--primary" on:click=on_export>"Export Users"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Mobile"</th>
                        <th>"Gender"</th>
                        <th>"Registered On"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || store.get().users key=|u: &UserRecord| u.id.clone() let:user>
                        {
                            let cells = user.cells();
                            let hidden = {
                                let cells = cells.clone();
                                move || !row_matches(&cells, &ui.get().search)
                            };
                            view! {
                                <tr hidden=hidden>
                                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || store.get().users.is_empty()>
                <p class="panel__empty">"No users to show."</p>
            </Show>
        </section>
    }
}
