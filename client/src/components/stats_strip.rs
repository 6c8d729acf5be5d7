//! Headline counters above the tab bar.

use leptos::prelude::*;

use crate::state::store::DataStore;
use crate::util::format::format_count;

#[component]
pub fn StatsStrip() -> impl IntoView {
    let store = expect_context::<RwSignal<DataStore>>();

    let total_users = move || format_count(store.get().stats.total_users);
    let total_views = move || format_count(store.get().stats.total_views);
    let total_redeemed = move || format_count(store.get().stats.total_redeemed);

    view! {
        <section class="stats-strip">
            <div class="stats-strip__card">
                <span class="stats-strip__label">"Total Users"</span>
                <span class="stats-strip__value" id="totalUsers">{total_users}</span>
            </div>
            <div class="stats-strip__card">
                <span class="stats-strip__label">"Total Views"</span>
                <span class="stats-strip__value" id="totalViews">{total_views}</span>
            </div>
            <div class="stats-strip__card">
                <span class="stats-strip__label">"Rewards Redeemed"</span>
                <span class="stats-strip__value" id="totalRedeemed">{total_redeemed}</span>
            </div>
        </section>
    }
}
