//! Validating builder for [`ChartDefinition`] values.
//!
//! ```
//! use chartdef::{ChartConfigBuilder, SeriesOptions};
//!
//! let mut b = ChartConfigBuilder::new();
//! b.add_series([0, 1, 2], [1, 9, 4], "markers", SeriesOptions::new().sizes([20.0, 40.0, 25.0]))?;
//! let chart = b.build()?;
//! assert_eq!(chart.series().len(), 1);
//! # Ok::<(), chartdef::ChartError>(())
//! ```

use crate::error::{ChartError, ChartResult};
use crate::models::{
    AxisOptions, ChartDefinition, DisplayOptions, Layout, Margins, Mode, Series, SeriesOptions,
    XValue,
};
use log::debug;

/// Accumulates series, layout, and display options, then produces an
/// immutable [`ChartDefinition`]. Owned by a single caller.
#[derive(Debug, Clone, Default)]
pub struct ChartConfigBuilder {
    series: Vec<Series>,
    layout: Layout,
    display: DisplayOptions,
}

impl ChartConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one series.
    ///
    /// ### Errors
    /// - `InvalidMode` when `mode` is not markers/bar/line
    /// - `EmptyInput` when `x` or `y` is empty
    /// - `LengthMismatch` when y, sizes, colors, text, or widths differ in length from `x`
    /// - `InvalidValue` for non-positive sizes/widths or non-finite numbers
    ///
    /// On error the builder is left unchanged.
    pub fn add_series<X, Y>(
        &mut self,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = Y>,
        mode: impl AsRef<str>,
        options: SeriesOptions,
    ) -> ChartResult<&mut Self>
    where
        X: Into<XValue>,
        Y: Into<f64>,
    {
        let mode: Mode = mode.as_ref().parse()?;
        let x: Vec<XValue> = x.into_iter().map(Into::into).collect();
        let y: Vec<f64> = y.into_iter().map(Into::into).collect();
        let series = Series::new(x, y, mode, options)?;
        Ok(self.push(series))
    }

    /// Append an already assembled series, re-running validation.
    pub fn add(&mut self, series: Series) -> ChartResult<&mut Self> {
        series.validate()?;
        Ok(self.push(series))
    }

    fn push(&mut self, series: Series) -> &mut Self {
        debug!(
            "accepted series #{} ({} points, mode {})",
            self.series.len(),
            series.len(),
            series.mode()
        );
        self.series.push(series);
        self
    }

    /// Replace title, legend flag, and margins. Omitted values fall back to
    /// the defaults; axis options set via [`Self::set_axes`] are kept.
    pub fn set_layout(
        &mut self,
        title: Option<&str>,
        show_legend: Option<bool>,
        margins: Option<Margins>,
    ) -> ChartResult<&mut Self> {
        let margins = margins.unwrap_or_default();
        margins.validate()?;
        let defaults = Layout::default();
        self.layout = Layout {
            title: title.map(str::to_string),
            show_legend: show_legend.unwrap_or(defaults.show_legend),
            margins,
            x_axis: self.layout.x_axis.take(),
            y_axis: self.layout.y_axis.take(),
        };
        Ok(self)
    }

    /// Replace both axis option sets.
    pub fn set_axes(
        &mut self,
        x_axis: Option<AxisOptions>,
        y_axis: Option<AxisOptions>,
    ) -> &mut Self {
        self.layout.x_axis = x_axis;
        self.layout.y_axis = y_axis;
        self
    }

    /// Replace the display options. Omitted values fall back to the defaults.
    pub fn set_display_options(
        &mut self,
        responsive: Option<bool>,
        show_mode_bar: Option<bool>,
    ) -> &mut Self {
        let defaults = DisplayOptions::default();
        self.display = DisplayOptions {
            responsive: responsive.unwrap_or(defaults.responsive),
            show_mode_bar: show_mode_bar.unwrap_or(defaults.show_mode_bar),
        };
        self
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Produce the immutable definition. Fails with `NoSeries` when nothing
    /// was added; the builder stays usable either way.
    pub fn build(&self) -> ChartResult<ChartDefinition> {
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        Ok(ChartDefinition::new(
            self.series.clone(),
            self.layout.clone(),
            self.display,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_series_is_kept_unmodified() {
        let mut b = ChartConfigBuilder::new();
        b.add_series(
            [0, 1, 2],
            [1, 9, 4],
            "markers",
            SeriesOptions::new().sizes([20.0, 40.0, 25.0]),
        )
        .unwrap();
        let chart = b.build().unwrap();

        assert_eq!(chart.series().len(), 1);
        let s = &chart.series()[0];
        assert_eq!(
            s.x(),
            &[XValue::Number(0.0), XValue::Number(1.0), XValue::Number(2.0)]
        );
        assert_eq!(s.y(), &[1.0, 9.0, 4.0]);
        assert_eq!(s.mode(), Mode::Markers);
        assert_eq!(s.sizes(), Some(&[20.0, 40.0, 25.0][..]));
        assert_eq!(chart.layout(), &Layout::default());
        assert_eq!(chart.display(), &DisplayOptions::default());
    }

    #[test]
    fn short_color_list_is_length_mismatch() {
        let mut b = ChartConfigBuilder::new();
        let err = b
            .add_series(["Jan", "Feb"], [20, 14], "bar", SeriesOptions::new().colors(["red"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ChartError::LengthMismatch {
                field: "colors",
                expected: 2,
                found: 1
            }
        ));
        assert_eq!(b.series_count(), 0);
    }

    #[test]
    fn sizes_length_mismatch() {
        let mut b = ChartConfigBuilder::new();
        let err = b
            .add_series([0, 1, 2], [1, 2, 3], "markers", SeriesOptions::new().sizes([1.0, 2.0]))
            .unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { field: "sizes", .. }));
    }

    #[test]
    fn empty_input_rejected() {
        let mut b = ChartConfigBuilder::new();
        let err = b
            .add_series(Vec::<i32>::new(), Vec::<f64>::new(), "markers", SeriesOptions::new())
            .unwrap_err();
        assert!(matches!(err, ChartError::EmptyInput("x")));

        let err = b
            .add_series([1], Vec::<f64>::new(), "line", SeriesOptions::new())
            .unwrap_err();
        assert!(matches!(err, ChartError::EmptyInput("y")));
    }

    #[test]
    fn unknown_mode_rejected_before_other_checks() {
        let mut b = ChartConfigBuilder::new();
        let err = b
            .add_series(Vec::<i32>::new(), Vec::<f64>::new(), "pie", SeriesOptions::new())
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidMode(ref m) if m == "pie"));
    }

    #[test]
    fn build_without_series_fails() {
        let b = ChartConfigBuilder::new();
        assert!(matches!(b.build(), Err(ChartError::NoSeries)));
    }

    #[test]
    fn set_layout_last_write_wins() {
        let mut b = ChartConfigBuilder::new();
        b.add_series([1, 2], [3, 4], "line", SeriesOptions::new()).unwrap();
        b.set_layout(Some("First"), Some(true), Some(Margins::new().top(10.0)))
            .unwrap();
        b.set_layout(Some("Second"), Some(false), Some(Margins::new().left(30.0)))
            .unwrap();
        let chart = b.build().unwrap();
        assert_eq!(chart.layout().title.as_deref(), Some("Second"));
        assert!(!chart.layout().show_legend);
        assert_eq!(chart.layout().margins, Margins::new().left(30.0));
    }

    #[test]
    fn negative_margin_rejected() {
        let mut b = ChartConfigBuilder::new();
        let err = b
            .set_layout(None, None, Some(Margins::new().bottom(-1.0)))
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue(_)));
    }

    #[test]
    fn set_axes_survives_set_layout() {
        let mut b = ChartConfigBuilder::new();
        b.add_series([1], [1], "bar", SeriesOptions::new()).unwrap();
        b.set_axes(Some(AxisOptions::titled("Month")), None);
        b.set_layout(Some("T"), None, None).unwrap();
        let chart = b.build().unwrap();
        assert_eq!(
            chart.layout().x_axis.as_ref().and_then(|a| a.title.as_deref()),
            Some("Month")
        );
    }

    #[test]
    fn display_options_overwrite() {
        let mut b = ChartConfigBuilder::new();
        b.add_series([1], [1], "bar", SeriesOptions::new()).unwrap();
        b.set_display_options(Some(true), Some(false));
        b.set_display_options(None, None);
        assert_eq!(b.build().unwrap().display(), &DisplayOptions::default());
    }

    #[test]
    fn sizes_only_with_markers() {
        let mut b = ChartConfigBuilder::new();
        let err = b
            .add_series([1, 2], [1, 2], "bar", SeriesOptions::new().sizes([1.0, 2.0]))
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue(_)));
    }

    #[test]
    fn non_positive_size_and_width_rejected() {
        let mut b = ChartConfigBuilder::new();
        assert!(
            b.add_series([1, 2], [1, 2], "markers", SeriesOptions::new().sizes([1.0, 0.0]))
                .is_err()
        );
        assert!(
            b.add_series([1, 2], [1, 2], "bar", SeriesOptions::new().width(-0.5))
                .is_err()
        );
        assert!(
            b.add_series([1], [f64::NAN], "line", SeriesOptions::new())
                .is_err()
        );
        assert_eq!(b.series_count(), 0);
    }

    #[test]
    fn chained_calls() {
        let mut b = ChartConfigBuilder::new();
        b.add_series(["a"], [1.0], "bars", SeriesOptions::new())
            .unwrap()
            .add_series(["a"], [2.0], "LINES", SeriesOptions::new())
            .unwrap()
            .set_display_options(Some(true), None);
        let chart = b.build().unwrap();
        assert_eq!(chart.series()[0].mode(), Mode::Bar);
        assert_eq!(chart.series()[1].mode(), Mode::Line);
        assert!(chart.display().responsive);
    }
}
