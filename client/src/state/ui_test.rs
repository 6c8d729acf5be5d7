use super::*;
use crate::util::synthetic::seeded;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_users_tab() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::Users);
    assert_eq!(state.active_archive, ArchiveTab::Users);
    assert!(!state.chart.is_initialized());
    assert!(state.search.is_empty());
    assert!(state.rejecting.is_none());
    assert!(state.notice.is_none());
}

// =============================================================
// switch_tab
// =============================================================

#[test]
fn switch_tab_activates_exactly_one_tab() {
    let mut state = UiState::default();
    state.switch_tab(Tab::History);
    let active: Vec<_> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
    assert_eq!(active, [Tab::History]);
}

#[test]
fn growth_tab_initializes_chart_once() {
    let mut state = UiState::default();
    assert!(!state.switch_tab(Tab::Users));
    assert!(!state.chart.is_initialized());

    assert!(state.switch_tab(Tab::Growth));
    assert!(state.chart.is_initialized());

    state.switch_tab(Tab::Rewards);
    assert!(!state.switch_tab(Tab::Growth));
}

#[test]
fn switch_tab_id_ignores_unknown_ids() {
    let mut state = UiState::default();
    state.switch_tab_id("archive");
    assert_eq!(state.active_tab, Tab::Archive);

    assert!(!state.switch_tab_id("settings"));
    assert_eq!(state.active_tab, Tab::Archive);
}

#[test]
fn switch_tab_id_growth_builds_chart() {
    let mut state = UiState::default();
    assert!(state.switch_tab_id("growth"));
    assert!(state.chart.is_initialized());
}

// =============================================================
// on_data_loaded
// =============================================================

#[test]
fn first_demo_load_builds_chart_once() {
    let mut state = UiState::default();
    assert!(state.on_data_loaded(true));
    assert!(state.chart.is_initialized());

    state.select_period(ChartPeriod::Month, &mut seeded(2));
    let chart = state.chart.clone();
    assert!(!state.on_data_loaded(true));
    assert_eq!(state.chart, chart);
}

#[test]
fn clearing_demo_data_leaves_chart_unbuilt() {
    let mut state = UiState::default();
    assert!(!state.on_data_loaded(false));
    assert!(!state.chart.is_initialized());
}

#[test]
fn data_reload_drops_dialog_and_notice() {
    let mut state = UiState::default();
    state.open_rejection("RID2001");
    state.notice = Some("User data exported successfully!".to_owned());
    state.on_data_loaded(false);
    assert!(state.rejecting.is_none());
    assert!(state.notice.is_none());
}

// =============================================================
// switch_archive_tab
// =============================================================

#[test]
fn archive_tab_switches_independently_of_main_tab() {
    let mut state = UiState::default();
    state.switch_tab(Tab::History);
    state.switch_archive_tab(ArchiveTab::Rewards);
    assert!(state.is_archive_active(ArchiveTab::Rewards));
    assert!(!state.is_archive_active(ArchiveTab::Users));
    assert_eq!(state.active_tab, Tab::History);

    state.switch_archive_tab_id("nope");
    assert_eq!(state.active_archive, ArchiveTab::Rewards);
    state.switch_archive_tab_id("users");
    assert_eq!(state.active_archive, ArchiveTab::Users);
}

// =============================================================
// chart period / rejection dialog
// =============================================================

#[test]
fn select_period_requires_chart() {
    let mut state = UiState::default();
    assert!(!state.select_period(ChartPeriod::Year, &mut seeded(1)));
    state.switch_tab(Tab::Growth);
    assert!(state.select_period(ChartPeriod::Year, &mut seeded(1)));
    assert_eq!(state.chart.period(), ChartPeriod::Year);
}

#[test]
fn rejection_dialog_open_and_close() {
    let mut state = UiState::default();
    state.open_rejection("RID2003");
    assert_eq!(state.rejecting.as_deref(), Some("RID2003"));
    state.close_rejection();
    assert!(state.rejecting.is_none());
}

// =============================================================
// Tab ids
// =============================================================

#[test]
fn tab_ids_round_trip() {
    for tab in Tab::ALL {
        assert_eq!(Tab::from_id(tab.id()), Some(tab));
    }
    for archive in ArchiveTab::ALL {
        assert_eq!(ArchiveTab::from_id(archive.id()), Some(archive));
    }
}
