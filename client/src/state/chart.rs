//! User-growth chart model.
//!
//! DESIGN
//! ======
//! `ChartPanel` owns the chart data and knows whether it has been built.
//! The chart is created lazily the first time the growth tab (or demo data)
//! needs it and never rebuilt afterwards; period changes only relabel the
//! axis and regenerate the placeholder series.
//!
//! The series are random placeholders, not derived from `DataStore`.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use rand::Rng;

use crate::util::synthetic;

pub const USERS_SERIES_LABEL: &str = "Registered Users";
pub const VIEWS_SERIES_LABEL: &str = "Views Count";

const INITIAL_USERS: [u32; 4] = [120, 240, 380, 520];
const INITIAL_VIEWS: [u32; 4] = [800, 1500, 2200, 3000];

const USERS_MAX: u32 = 1000;
const VIEWS_MAX: u32 = 5000;

/// X-axis bucket size selectable from the time filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartPeriod {
    #[default]
    Week,
    Month,
    Year,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Week, ChartPeriod::Month, ChartPeriod::Year];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ChartPeriod::Week => "week",
            ChartPeriod::Month => "month",
            ChartPeriod::Year => "year",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ChartPeriod::Week => "Weekly",
            ChartPeriod::Month => "Monthly",
            ChartPeriod::Year => "Yearly",
        }
    }

    #[must_use]
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ChartPeriod::Week => &["Week 1", "Week 2", "Week 3", "Week 4"],
            ChartPeriod::Month => &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            ChartPeriod::Year => &["2019", "2020", "2021", "2022", "2023"],
        }
    }
}

/// Two-series line chart data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthChart {
    pub labels: Vec<String>,
    pub users: Vec<u32>,
    pub views: Vec<u32>,
}

impl GrowthChart {
    fn initial() -> Self {
        Self {
            labels: ChartPeriod::Week.labels().iter().map(|l| (*l).to_owned()).collect(),
            users: INITIAL_USERS.to_vec(),
            views: INITIAL_VIEWS.to_vec(),
        }
    }
}

/// Lazily built chart plus the selected period.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartPanel {
    chart: Option<GrowthChart>,
    period: ChartPeriod,
}

impl ChartPanel {
    /// Build the chart if it does not exist yet. Returns `true` only on the
    /// call that built it.
    pub fn init(&mut self) -> bool {
        if self.chart.is_some() {
            return false;
        }
        self.chart = Some(GrowthChart::initial());
        log::debug!("growth chart initialized");
        true
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.chart.is_some()
    }

    #[must_use]
    pub fn chart(&self) -> Option<&GrowthChart> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn period(&self) -> ChartPeriod {
        self.period
    }

    /// Select `period`, relabel the axis, and regenerate both series.
    /// The selection sticks even before `init`; the data update does not.
    pub fn update_period<R: Rng + ?Sized>(&mut self, period: ChartPeriod, rng: &mut R) -> bool {
        self.period = period;
        let Some(chart) = self.chart.as_mut() else {
            return false;
        };
        let labels = period.labels();
        chart.labels = labels.iter().map(|l| (*l).to_owned()).collect();
        chart.users = synthetic::series(rng, labels.len(), USERS_MAX);
        chart.views = synthetic::series(rng, labels.len(), VIEWS_MAX);
        true
    }
}
