//! Reading and writing chart definitions and series data.

use crate::error::{ChartError, ChartResult};
use crate::models::{ChartDefinition, Mode, Series, SeriesOptions, XValue};
use crate::render::plotly::to_plotly;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Save a definition as pretty JSON.
pub fn save_json<P: AsRef<Path>>(chart: &ChartDefinition, path: P) -> ChartResult<()> {
    let mut f = File::create(path)?;
    let s = chart.to_json_pretty()?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Load and validate a definition saved by [`save_json`] (or written by hand).
pub fn load_json<P: AsRef<Path>>(path: P) -> ChartResult<ChartDefinition> {
    let s = fs::read_to_string(path)?;
    ChartDefinition::from_json(&s)
}

/// Save the Plotly `{data, layout, config}` triple as pretty JSON.
pub fn save_plotly_json<P: AsRef<Path>>(chart: &ChartDefinition, path: P) -> ChartResult<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&to_plotly(chart))?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// One CSV row. Only `x` and `y` are required columns.
#[derive(Debug, Deserialize)]
struct CsvRow {
    x: String,
    y: f64,
    #[serde(default)]
    size: Option<f64>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Read one series from CSV with header `x,y[,size][,color][,text]`.
///
/// Numeric `x` cells become numbers, anything else a category label. When
/// the `size` or `color` column exists every row must fill it; empty `text`
/// cells are allowed and mean "no label".
pub fn read_series_csv<R: Read>(
    reader: R,
    mode: Mode,
    name: Option<&str>,
) -> ChartResult<Series> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let has = |col: &str| headers.iter().any(|h| h == col);
    let (has_size, has_color, has_text) = (has("size"), has("color"), has("text"));

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut text = Vec::new();
    for (row_no, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        x.push(XValue::parse_cell(&row.x));
        y.push(row.y);
        if has_size {
            sizes.push(row.size.ok_or_else(|| missing("size", row_no))?);
        }
        if has_color {
            colors.push(
                row.color
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| missing("color", row_no))?,
            );
        }
        if has_text {
            text.push(row.text.filter(|t| !t.is_empty()));
        }
    }

    let mut options = SeriesOptions::new();
    if let Some(name) = name {
        options = options.name(name);
    }
    if has_size {
        options = options.sizes(sizes);
    }
    if has_color {
        options = options.colors(colors);
    }
    if has_text {
        options = options.text(text);
    }
    Series::new(x, y, mode, options)
}

/// [`read_series_csv`] from a file path.
pub fn load_series_csv<P: AsRef<Path>>(
    path: P,
    mode: Mode,
    name: Option<&str>,
) -> ChartResult<Series> {
    read_series_csv(File::open(path)?, mode, name)
}

fn missing(col: &str, row_no: usize) -> ChartError {
    // row_no counts data rows; +2 accounts for the header and 1-based lines
    ChartError::InvalidValue(format!("line {}: missing {col}", row_no + 2))
}
