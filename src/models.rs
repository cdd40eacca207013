use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One x-coordinate: either a category label or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Label(String),
}

impl XValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            XValue::Number(v) => Some(*v),
            XValue::Label(_) => None,
        }
    }

    /// Parse a raw text cell: numbers become `Number`, anything else a `Label`.
    pub fn parse_cell(s: &str) -> Self {
        let t = s.trim();
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => XValue::Number(v),
            _ => XValue::Label(t.to_string()),
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Number(v) => write!(f, "{}", v),
            XValue::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for XValue {
    fn from(v: f64) -> Self {
        XValue::Number(v)
    }
}

impl From<i32> for XValue {
    fn from(v: i32) -> Self {
        XValue::Number(v as f64)
    }
}

impl From<u32> for XValue {
    fn from(v: u32) -> Self {
        XValue::Number(v as f64)
    }
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self {
        XValue::Label(s.to_string())
    }
}

impl From<String> for XValue {
    fn from(s: String) -> Self {
        XValue::Label(s)
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scatter points; per-point sizes turn it into a bubble chart.
    Markers,
    /// Vertical bars.
    Bar,
    /// Connected line.
    Line,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Markers => "markers",
            Mode::Bar => "bar",
            Mode::Line => "line",
        }
    }
}

impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markers" | "marker" | "scatter" => Ok(Mode::Markers),
            "bar" | "bars" => Ok(Mode::Bar),
            "line" | "lines" => Ok(Mode::Line),
            _ => Err(ChartError::InvalidMode(s.to_string())),
        }
    }
}

/// Serde helper: accept every spelling `Mode::from_str` accepts.
impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct ModeVisitor;

        impl Visitor<'_> for ModeVisitor {
            type Value = Mode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "one of \"markers\", \"bar\", \"line\"")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                s.parse::<Mode>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ModeVisitor)
    }
}

/// Optional per-series extras passed to `add_series`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Uniform bar width in x-axis units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Per-bar widths; take precedence over `width`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<Option<String>>>,
}

impl SeriesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn sizes<I: IntoIterator<Item = f64>>(mut self, sizes: I) -> Self {
        self.sizes = Some(sizes.into_iter().collect());
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn widths<I: IntoIterator<Item = f64>>(mut self, widths: I) -> Self {
        self.widths = Some(widths.into_iter().collect());
        self
    }

    pub fn text<I: IntoIterator<Item = Option<String>>>(mut self, text: I) -> Self {
        self.text = Some(text.into_iter().collect());
        self
    }
}

/// A validated, named dataset. Only obtainable through [`Series::new`] or
/// deserialization, which runs the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    x: Vec<XValue>,
    y: Vec<f64>,
    mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sizes: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    widths: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<Vec<Option<String>>>,
}

impl Series {
    /// Assemble and validate a series.
    pub fn new(
        x: Vec<XValue>,
        y: Vec<f64>,
        mode: Mode,
        options: SeriesOptions,
    ) -> ChartResult<Self> {
        let series = Self {
            name: options.name,
            x,
            y,
            mode,
            sizes: options.sizes,
            colors: options.colors,
            width: options.width,
            widths: options.widths,
            text: options.text,
        };
        series.validate()?;
        Ok(series)
    }

    /// Check emptiness, parallel lengths, and value ranges, in that order.
    pub fn validate(&self) -> ChartResult<()> {
        if self.x.is_empty() {
            return Err(ChartError::EmptyInput("x"));
        }
        if self.y.is_empty() {
            return Err(ChartError::EmptyInput("y"));
        }

        let n = self.x.len();
        check_len("y", n, self.y.len())?;
        if let Some(s) = &self.sizes {
            check_len("sizes", n, s.len())?;
        }
        if let Some(c) = &self.colors {
            check_len("colors", n, c.len())?;
        }
        if let Some(t) = &self.text {
            check_len("text", n, t.len())?;
        }
        if let Some(w) = &self.widths {
            check_len("widths", n, w.len())?;
        }

        if let Some(i) = self.y.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::InvalidValue(format!(
                "y[{i}] is not a finite number"
            )));
        }
        if let Some(i) = self
            .x
            .iter()
            .position(|x| matches!(x, XValue::Number(v) if !v.is_finite()))
        {
            return Err(ChartError::InvalidValue(format!(
                "x[{i}] is not a finite number"
            )));
        }
        if let Some(sizes) = &self.sizes {
            if self.mode != Mode::Markers {
                return Err(ChartError::InvalidValue(format!(
                    "marker sizes are only allowed with mode markers, not {}",
                    self.mode
                )));
            }
            check_positive("sizes", sizes)?;
        }
        if let Some(w) = self.width {
            check_positive("width", &[w])?;
        }
        if let Some(widths) = &self.widths {
            check_positive("widths", widths)?;
        }
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn x(&self) -> &[XValue] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sizes(&self) -> Option<&[f64]> {
        self.sizes.as_deref()
    }

    pub fn colors(&self) -> Option<&[String]> {
        self.colors.as_deref()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn widths(&self) -> Option<&[f64]> {
        self.widths.as_deref()
    }

    pub fn text(&self) -> Option<&[Option<String>]> {
        self.text.as_deref()
    }

    /// Bar width for point `i`: per-point first, then uniform, else `None`.
    pub fn width_at(&self, i: usize) -> Option<f64> {
        self.widths
            .as_ref()
            .and_then(|w| w.get(i).copied())
            .or(self.width)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Keep only the first and last text label (see [`endpoint_labels`]).
    ///
    /// [`endpoint_labels`]: crate::labels::endpoint_labels
    pub fn with_endpoint_labels(mut self) -> Self {
        if let Some(text) = self.text.take() {
            self.text = Some(crate::labels::endpoint_labels(&text));
        }
        self
    }

    /// Iterate `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&XValue, f64)> + '_ {
        self.x.iter().zip(self.y.iter().copied())
    }
}

/// Wire form of a [`Series`]; `mode` stays a string so an unknown mode
/// surfaces as [`ChartError::InvalidMode`].
#[derive(Debug, Deserialize)]
struct RawSeries {
    #[serde(default)]
    name: Option<String>,
    x: Vec<XValue>,
    y: Vec<f64>,
    mode: String,
    #[serde(default)]
    sizes: Option<Vec<f64>>,
    #[serde(default)]
    colors: Option<Vec<String>>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    widths: Option<Vec<f64>>,
    #[serde(default)]
    text: Option<Vec<Option<String>>>,
}

impl TryFrom<RawSeries> for Series {
    type Error = ChartError;

    fn try_from(raw: RawSeries) -> ChartResult<Self> {
        let mode = raw.mode.parse::<Mode>()?;
        let options = SeriesOptions {
            name: raw.name,
            sizes: raw.sizes,
            colors: raw.colors,
            width: raw.width,
            widths: raw.widths,
            text: raw.text,
        };
        Series::new(raw.x, raw.y, mode, options)
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> ChartResult<()> {
    if expected != found {
        return Err(ChartError::LengthMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_positive(field: &str, values: &[f64]) -> ChartResult<()> {
    match values.iter().position(|v| !v.is_finite() || *v <= 0.0) {
        Some(i) => Err(ChartError::InvalidValue(format!(
            "{field}[{i}] must be a positive number, got {}",
            values[i]
        ))),
        None => Ok(()),
    }
}

/// Plot margins in pixels. `None` leaves the backend default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

impl Margins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, v: f64) -> Self {
        self.top = Some(v);
        self
    }

    pub fn left(mut self, v: f64) -> Self {
        self.left = Some(v);
        self
    }

    pub fn right(mut self, v: f64) -> Self {
        self.right = Some(v);
        self
    }

    pub fn bottom(mut self, v: f64) -> Self {
        self.bottom = Some(v);
        self
    }

    /// All margins must be finite and non-negative.
    pub fn validate(&self) -> ChartResult<()> {
        let sides = [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ];
        for (side, v) in sides {
            if let Some(v) = v
                && (!v.is_finite() || v < 0.0)
            {
                return Err(ChartError::InvalidValue(format!(
                    "margin {side} must be a non-negative number, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Per-axis options (title, tick label visibility).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_true")]
    pub show_tick_labels: bool,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            title: None,
            show_tick_labels: true,
        }
    }
}

impl AxisOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

fn default_true() -> bool {
    true
}

/// Chart-wide arrangement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOptions>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: None,
            show_legend: true,
            margins: Margins::default(),
            x_axis: None,
            y_axis: None,
        }
    }
}

/// Viewer/interaction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub responsive: bool,
    #[serde(default = "default_true")]
    pub show_mode_bar: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            responsive: false,
            show_mode_bar: true,
        }
    }
}

/// Immutable, validated bundle of series, layout, and display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartDefinition")]
pub struct ChartDefinition {
    series: Vec<Series>,
    #[serde(default)]
    layout: Layout,
    #[serde(default)]
    display: DisplayOptions,
}

#[derive(Debug, Deserialize)]
struct RawChartDefinition {
    series: Vec<RawSeries>,
    #[serde(default)]
    layout: Layout,
    #[serde(default)]
    display: DisplayOptions,
}

impl TryFrom<RawChartDefinition> for ChartDefinition {
    type Error = ChartError;

    fn try_from(raw: RawChartDefinition) -> ChartResult<Self> {
        let series = raw
            .series
            .into_iter()
            .map(Series::try_from)
            .collect::<ChartResult<Vec<_>>>()?;
        let def = ChartDefinition::new(series, raw.layout, raw.display);
        def.validate()?;
        Ok(def)
    }
}

impl ChartDefinition {
    /// Only the builder and deserialization create definitions.
    pub(crate) fn new(series: Vec<Series>, layout: Layout, display: DisplayOptions) -> Self {
        Self {
            series,
            layout,
            display,
        }
    }

    /// Check every invariant of the whole definition.
    pub fn validate(&self) -> ChartResult<()> {
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        for s in &self.series {
            s.validate()?;
        }
        self.layout.margins.validate()
    }

    /// Parse a definition from JSON and validate it. Validation failures keep
    /// their own variant instead of being wrapped in [`ChartError::Json`].
    pub fn from_json(s: &str) -> ChartResult<Self> {
        let raw: RawChartDefinition = serde_json::from_str(s)?;
        ChartDefinition::try_from(raw)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}
