//! Data bounds of a chart definition, used to set up plot axes.

use crate::models::{ChartDefinition, Mode, XValue};

/// Default bar width in x units when a bar series sets none.
pub const DEFAULT_BAR_WIDTH: f64 = 0.8;

/// How x-values map onto the horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub enum XDomain {
    /// Every x-value is a number.
    Numeric { min: f64, max: f64 },
    /// At least one label: each distinct value gets a slot `0, 1, 2, ...`
    /// in first-seen order.
    Categories(Vec<String>),
}

/// Axis ranges for a whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Extent {
    pub x: XDomain,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Extent {
    /// Compute axis ranges. Bars pull the y range to include zero and widen
    /// the x range by half a bar; a flat range is padded by ±1 like an
    /// autoranged axis would.
    pub fn of(chart: &ChartDefinition) -> Self {
        let all_numeric = chart
            .series()
            .iter()
            .flat_map(|s| s.x())
            .all(|x| x.as_number().is_some());

        let x = if all_numeric {
            let nums = chart
                .series()
                .iter()
                .flat_map(|s| s.x())
                .filter_map(XValue::as_number);
            let (min, max) = min_max(nums);
            XDomain::Numeric { min, max }
        } else {
            let mut cats: Vec<String> = Vec::new();
            for v in chart.series().iter().flat_map(|s| s.x()) {
                let label = v.to_string();
                if !cats.contains(&label) {
                    cats.push(label);
                }
            }
            XDomain::Categories(cats)
        };

        let has_bars = chart.series().iter().any(|s| s.mode() == Mode::Bar);
        let half_bar = chart
            .series()
            .iter()
            .filter(|s| s.mode() == Mode::Bar)
            .flat_map(|s| (0..s.len()).map(move |i| s.width_at(i).unwrap_or(DEFAULT_BAR_WIDTH)))
            .fold(0.0f64, f64::max)
            / 2.0;

        let x_range = match &x {
            XDomain::Numeric { min, max } => pad_flat(*min - half_bar, *max + half_bar),
            XDomain::Categories(cats) => (-0.5, cats.len() as f64 - 0.5),
        };

        let (mut y_min, mut y_max) =
            min_max(chart.series().iter().flat_map(|s| s.y().iter().copied()));
        if has_bars {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        // headroom so bubbles and bar tops stay inside the plot; dropped when
        // it would overflow near f64::MAX
        let pad = (y_max - y_min).abs() * 0.05;
        let pad = if (y_min - pad).is_finite() && (y_max + pad).is_finite() {
            pad
        } else {
            0.0
        };
        let y_range = pad_flat(
            if has_bars && y_min == 0.0 { 0.0 } else { y_min - pad },
            y_max + pad,
        );

        Self { x, x_range, y_range }
    }

    /// Horizontal position of an x-value on the axis.
    pub fn x_position(&self, v: &XValue) -> Option<f64> {
        match &self.x {
            XDomain::Numeric { .. } => v.as_number(),
            XDomain::Categories(cats) => {
                let label = v.to_string();
                cats.iter().position(|c| *c == label).map(|i| i as f64)
            }
        }
    }

    /// Label to print at tick `v`, if any.
    pub fn x_tick_label(&self, v: f64) -> String {
        match &self.x {
            XDomain::Numeric { .. } => format_tick(v),
            XDomain::Categories(cats) => {
                let idx = v.round();
                if (v - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                cats.get(idx as usize).cloned().unwrap_or_default()
            }
        }
    }

    /// Whether both axes span a finite, non-zero width. Values near the ends
    /// of the f64 range can be valid data yet too far apart to draw.
    pub fn is_drawable(&self) -> bool {
        [self.x_range, self.y_range]
            .iter()
            .all(|&(lo, hi)| (hi - lo).is_finite() && hi > lo)
    }

    pub fn category_count(&self) -> Option<usize> {
        match &self.x {
            XDomain::Categories(c) => Some(c.len()),
            XDomain::Numeric { .. } => None,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn pad_flat(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < f64::EPSILON {
        let d = (lo.abs() * 0.05).max(1.0);
        (lo - d, hi + d)
    } else {
        (lo, hi)
    }
}

/// Compact tick label: fewer decimals for larger magnitudes.
pub fn format_tick(v: f64) -> String {
    let a = v.abs();
    let prec = if a >= 100.0 || (v - v.round()).abs() < 1e-9 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}
