//! Dashboard chrome state: active tab, archive sub-pane, chart, dialogs.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `DataStore` so record transitions stay
//! independent of what is on screen. Tab switching owns the lazy chart
//! initialization because the chart is built the first time its pane shows.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use rand::Rng;

use crate::state::chart::{ChartPanel, ChartPeriod};

/// Top-level dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Users,
    Rewards,
    History,
    Growth,
    Archive,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Users, Tab::Rewards, Tab::History, Tab::Growth, Tab::Archive];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Users => "users",
            Tab::Rewards => "rewards",
            Tab::History => "history",
            Tab::Growth => "growth",
            Tab::Archive => "archive",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Users => "New Users",
            Tab::Rewards => "Reward Requests",
            Tab::History => "Reward History",
            Tab::Growth => "User Growth",
            Tab::Archive => "Archive",
        }
    }
}

/// Sub-panes of the archive tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArchiveTab {
    #[default]
    Users,
    Rewards,
}

impl ArchiveTab {
    pub const ALL: [ArchiveTab; 2] = [ArchiveTab::Users, ArchiveTab::Rewards];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ArchiveTab::Users => "users",
            ArchiveTab::Rewards => "rewards",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ArchiveTab::Users => "Archived Users",
            ArchiveTab::Rewards => "Archived Rewards",
        }
    }
}

/// UI state for the dashboard page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub active_archive: ArchiveTab,
    pub chart: ChartPanel,
    /// Users-table search term as typed.
    pub search: String,
    /// Request id whose rejection dialog is open.
    pub rejecting: Option<String>,
    /// Transient confirmation or refusal shown above the panes.
    pub notice: Option<String>,
}

impl UiState {
    /// Activate `tab`, building the chart the first time the growth tab shows.
    /// Returns `true` if this call built the chart.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        self.active_tab = tab;
        tab == Tab::Growth && self.chart.init()
    }

    /// `switch_tab` by element id. Unknown ids are ignored.
    pub fn switch_tab_id(&mut self, id: &str) -> bool {
        match Tab::from_id(id) {
            Some(tab) => self.switch_tab(tab),
            None => {
                log::warn!("ignoring unknown tab {id:?}");
                false
            }
        }
    }

    /// React to demo data being switched on or off. Loading data builds the
    /// chart if it does not exist yet; either way open dialogs and notices
    /// refer to rows that are gone. Returns `true` if this call built the chart.
    pub fn on_data_loaded(&mut self, enabled: bool) -> bool {
        self.rejecting = None;
        self.notice = None;
        enabled && self.chart.init()
    }

    pub fn switch_archive_tab(&mut self, archive: ArchiveTab) {
        self.active_archive = archive;
    }

    /// `switch_archive_tab` by element id. Unknown ids are ignored.
    pub fn switch_archive_tab_id(&mut self, id: &str) {
        match ArchiveTab::from_id(id) {
            Some(archive) => self.switch_archive_tab(archive),
            None => log::warn!("ignoring unknown archive pane {id:?}"),
        }
    }

    #[must_use]
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    #[must_use]
    pub fn is_archive_active(&self, archive: ArchiveTab) -> bool {
        self.active_archive == archive
    }

    pub fn select_period<R: Rng + ?Sized>(&mut self, period: ChartPeriod, rng: &mut R) -> bool {
        self.chart.update_period(period, rng)
    }

    pub fn open_rejection(&mut self, request_id: &str) {
        self.rejecting = Some(request_id.to_owned());
    }

    pub fn close_rejection(&mut self) {
        self.rejecting = None;
    }
}
