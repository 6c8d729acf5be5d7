//! User-growth line chart drawn as inline SVG.

#[cfg(test)]
#[path = "growth_chart_test.rs"]
mod growth_chart_test;

use leptos::prelude::*;

use crate::state::chart::{ChartPeriod, GrowthChart, USERS_SERIES_LABEL, VIEWS_SERIES_LABEL};
use crate::state::ui::UiState;
use crate::util::chart_math::{PlotArea, axis_max, gridlines, polyline_points};
use crate::util::clock::SharedClock;
use crate::util::synthetic;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 300.0;
const GRID_STEPS: u32 = 5;

const AREA: PlotArea = PlotArea { left: 56.0, top: 16.0, width: 560.0, height: 240.0 };

fn coord(v: f64) -> String {
    format!("{v:.1}")
}

/// Shared axis ceiling across both series.
fn chart_axis_max(chart: &GrowthChart) -> u32 {
    let peak = chart.users.iter().chain(&chart.views).copied().max().unwrap_or(0);
    axis_max(peak)
}

#[component]
pub fn GrowthChartPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let clock = expect_context::<SharedClock>();

    let chart = Memo::new(move |_| ui.get().chart.chart().cloned());

    let on_period = Callback::new(move |period: ChartPeriod| {
        let mut rng = synthetic::from_clock(clock.now_ms());
        ui.update(|u| {
            if !u.select_period(period, &mut rng) {
                log::debug!("period {} selected before chart init", period.id());
            }
        });
    });

    view! {
        <section class="panel growth-chart">
            <div class="panel__header">
                <h2>{move || format!("{} User Growth", ui.get().chart.period().title())}</h2>
                <div class="growth-chart__filters">
                    {ChartPeriod::ALL
                        .into_iter()
                        .map(|period| {
                            view! {
                                <button
                                    class=move || {
                                        if ui.get().chart.period() == period {
                                            "btn btn--small btn--active"
                                        } else {
                                            "btn btn--small"
                                        }
                                    }
                                    data-period=period.id()
                                    on:click=move |_| on_period.run(period)
                                >
                                    {period.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                chart
                    .get()
                    .map_or_else(
                        || view! { <p class="panel__empty">"Chart not loaded."</p> }.into_any(),
                        |chart| view! { <ChartSvg chart=chart /> }.into_any(),
                    )
            }}
        </section>
    }
}

#[component]
fn ChartSvg(chart: GrowthChart) -> impl IntoView {
    let top = chart_axis_max(&chart);
    let users = polyline_points(&chart.users, top, AREA);
    let views = polyline_points(&chart.views, top, AREA);
    let count = chart.labels.len();

    view! {
        <svg
            class="growth-chart__svg"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            role="img"
            aria-label="User growth chart"
        >
            {gridlines(top, GRID_STEPS)
                .into_iter()
                .map(|value| {
                    let y = AREA.y_at(value, top);
                    view! {
                        <line
                            class="growth-chart__grid"
                            x1=coord(AREA.left)
                            x2=coord(AREA.left + AREA.width)
                            y1=coord(y)
                            y2=coord(y)
                        />
                        <text class="growth-chart__tick" x=coord(AREA.left - 8.0) y=coord(y + 4.0) text-anchor="end">
                            {value.to_string()}
                        </text>
                    }
                })
                .collect_view()}
            {chart
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <text
                            class="growth-chart__label"
                            x=coord(AREA.x_at(i, count))
                            y=coord(AREA.bottom() + 20.0)
                            text-anchor="middle"
                        >
                            {label.clone()}
                        </text>
                    }
                })
                .collect_view()}
            <polyline class="growth-chart__series growth-chart__series--users" points=users fill="none" />
            <polyline class="growth-chart__series growth-chart__series--views" points=views fill="none" />
        </svg>
        <ul class="growth-chart__legend">
            <li class="growth-chart__legend-item growth-chart__legend-item--users">{USERS_SERIES_LABEL}</li>
            <li class="growth-chart__legend-item growth-chart__legend-item--views">{VIEWS_SERIES_LABEL}</li>
        </ul>
    }
}
