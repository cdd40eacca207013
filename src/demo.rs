//! The two reference charts: a bubble chart and a highlighted bar chart.

use crate::builder::ChartConfigBuilder;
use crate::error::ChartResult;
use crate::models::{ChartDefinition, Margins, SeriesOptions};

const GRAY: &str = "rgba(204,204,204,1)";
const RED: &str = "rgba(222,45,38,0.8)";

fn embedded_layout(b: &mut ChartConfigBuilder, title: Option<&str>) -> ChartResult<()> {
    b.set_layout(title, Some(false), Some(Margins::new().top(50.0).left(30.0)))?
        .set_display_options(Some(true), Some(false));
    Ok(())
}

/// Scatter with per-point marker sizes.
pub fn bubble_chart() -> ChartResult<ChartDefinition> {
    let mut b = ChartConfigBuilder::new();
    b.add_series(
        0..7,
        [1, 9, 4, 7, 5, 2, 4],
        "markers",
        SeriesOptions::new().sizes([20.0, 40.0, 25.0, 10.0, 60.0, 90.0, 30.0]),
    )?;
    embedded_layout(&mut b, None)?;
    b.build()
}

/// Monthly bars, one highlighted in red.
pub fn bar_chart() -> ChartResult<ChartDefinition> {
    let mut b = ChartConfigBuilder::new();
    b.add_series(
        ["January", "February", "April", "March", "May"],
        [20, 14, 23, 25, 22],
        "bar",
        SeriesOptions::new()
            .colors([GRAY, RED, GRAY, GRAY, GRAY])
            .widths([0.6; 5]),
    )?;
    embedded_layout(&mut b, Some("Sample chart"))?;
    b.build()
}
