//! Geometry for the SVG growth chart.
//!
//! DESIGN
//! ======
//! The y-axis always starts at zero and tops out at a rounded-up maximum so
//! gridlines land on readable values. Points are spread evenly across the
//! plot width, one per label.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

/// Drawable area inside the SVG viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X coordinate of point `index` out of `count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    /// Y coordinate of `value` on an axis running from zero to `axis_max`.
    #[must_use]
    pub fn y_at(&self, value: u32, axis_max: u32) -> f64 {
        if axis_max == 0 {
            return self.bottom();
        }
        self.bottom() - self.height * f64::from(value.min(axis_max)) / f64::from(axis_max)
    }
}

/// Smallest "nice" ceiling (1, 2, or 5 times a power of ten) at or above `max`.
#[must_use]
pub fn axis_max(max: u32) -> u32 {
    if max == 0 {
        return 1;
    }
    let mut magnitude: u32 = 1;
    while magnitude <= max / 10 {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .filter_map(|step: u32| step.checked_mul(magnitude))
        .find(|ceiling| *ceiling >= max)
        .unwrap_or(max)
}

/// `points` attribute for an SVG `<polyline>`.
#[must_use]
pub fn polyline_points(values: &[u32], axis_max: u32, area: PlotArea) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", area.x_at(i, values.len()), area.y_at(*v, axis_max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gridline values from zero to `axis_max` inclusive, `steps` intervals.
#[must_use]
pub fn gridlines(axis_max: u32, steps: u32) -> Vec<u32> {
    let steps = steps.max(1);
    (0..=steps).map(|i| axis_max * i / steps).collect()
}
