//! Map a [`ChartDefinition`] onto the JSON shape `Plotly.newPlot(target, data, layout, config)` expects.
//!
//! ```
//! use chartdef::render::{PlotlyExporter, Renderer};
//!
//! let chart = chartdef::demo::bar_chart()?;
//! let plot = PlotlyExporter.render(chart)?;
//! assert_eq!(plot["data"][0]["type"], "bar");
//! assert_eq!(plot["config"]["displayModeBar"], false);
//! # Ok::<(), chartdef::ChartError>(())
//! ```

use serde_json::{Map, Value, json};

use super::Renderer;
use crate::error::ChartResult;
use crate::models::{AxisOptions, ChartDefinition, Layout, Mode, Series, XValue};

/// Stateless exporter producing `{"data": [...], "layout": {...}, "config": {...}}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyExporter;

impl Renderer for PlotlyExporter {
    type Output = Value;

    fn render(&mut self, chart: ChartDefinition) -> ChartResult<Value> {
        Ok(to_plotly(&chart))
    }
}

/// Borrowing variant of [`PlotlyExporter::render`].
pub fn to_plotly(chart: &ChartDefinition) -> Value {
    let data: Vec<Value> = chart.series().iter().map(trace).collect();
    json!({
        "data": data,
        "layout": layout(chart.layout()),
        "config": {
            "responsive": chart.display().responsive,
            "displayModeBar": chart.display().show_mode_bar,
        },
    })
}

/// Integral values print as integers (`20`, not `20.0`).
fn num(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < 9.0e15 {
        json!(v as i64)
    } else {
        json!(v)
    }
}

fn nums(vs: &[f64]) -> Value {
    Value::Array(vs.iter().copied().map(num).collect())
}

fn x_value(v: &XValue) -> Value {
    match v {
        XValue::Number(n) => num(*n),
        XValue::Label(s) => json!(s),
    }
}

fn trace(s: &Series) -> Value {
    let mut t = Map::new();
    if let Some(name) = s.name() {
        t.insert("name".into(), json!(name));
    }
    t.insert(
        "x".into(),
        Value::Array(s.x().iter().map(x_value).collect()),
    );
    t.insert("y".into(), nums(s.y()));
    match s.mode() {
        Mode::Markers => {
            t.insert("mode".into(), json!("markers"));
        }
        Mode::Line => {
            t.insert("mode".into(), json!("lines"));
        }
        Mode::Bar => {
            t.insert("type".into(), json!("bar"));
        }
    }

    let mut marker = Map::new();
    if let Some(sizes) = s.sizes() {
        marker.insert("size".into(), nums(sizes));
    }
    if let Some(colors) = s.colors() {
        marker.insert("color".into(), json!(colors));
    }
    if !marker.is_empty() {
        t.insert("marker".into(), Value::Object(marker));
    }

    if let Some(widths) = s.widths() {
        t.insert("width".into(), nums(widths));
    } else if let Some(w) = s.width() {
        t.insert("width".into(), num(w));
    }
    if let Some(text) = s.text() {
        t.insert("text".into(), json!(text));
    }
    Value::Object(t)
}

fn layout(l: &Layout) -> Value {
    let mut out = Map::new();
    if let Some(title) = &l.title {
        out.insert("title".into(), json!(title));
    }
    out.insert("showlegend".into(), json!(l.show_legend));

    let mut margin = Map::new();
    let sides = [
        ("t", l.margins.top),
        ("l", l.margins.left),
        ("r", l.margins.right),
        ("b", l.margins.bottom),
    ];
    for (key, v) in sides {
        if let Some(v) = v {
            margin.insert(key.into(), num(v));
        }
    }
    if !margin.is_empty() {
        out.insert("margin".into(), Value::Object(margin));
    }

    if let Some(x) = &l.x_axis {
        out.insert("xaxis".into(), axis(x));
    }
    if let Some(y) = &l.y_axis {
        out.insert("yaxis".into(), axis(y));
    }
    Value::Object(out)
}

fn axis(a: &AxisOptions) -> Value {
    let mut out = Map::new();
    if let Some(title) = &a.title {
        out.insert("title".into(), json!(title));
    }
    out.insert("showticklabels".into(), json!(a.show_tick_labels));
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ChartConfigBuilder;
    use crate::models::{Margins, SeriesOptions};

    #[test]
    fn line_series_with_text_and_axes() {
        let mut b = ChartConfigBuilder::new();
        b.add_series(
            [2019, 2020, 2021],
            [0.5, 0.25, 3.0],
            "line",
            SeriesOptions::new()
                .name("Share")
                .text([Some("50%".to_string()), None, Some("300%".to_string())]),
        )
        .unwrap();
        b.set_layout(None, None, Some(Margins::new().right(12.5)))
            .unwrap();
        b.set_axes(None, Some(AxisOptions::titled("Percent")));
        let v = to_plotly(&b.build().unwrap());

        assert_eq!(
            v["data"][0],
            json!({
                "name": "Share",
                "x": [2019, 2020, 2021],
                "y": [0.5, 0.25, 3],
                "mode": "lines",
                "text": ["50%", null, "300%"],
            })
        );
        assert_eq!(
            v["layout"],
            json!({
                "showlegend": true,
                "margin": {"r": 12.5},
                "yaxis": {"title": "Percent", "showticklabels": true},
            })
        );
        assert_eq!(v["config"], json!({"responsive": false, "displayModeBar": true}));
    }

    #[test]
    fn uniform_width_is_scalar() {
        let mut b = ChartConfigBuilder::new();
        b.add_series(["a", "b"], [1, 2], "bar", SeriesOptions::new().width(0.5))
            .unwrap();
        let v = to_plotly(&b.build().unwrap());
        assert_eq!(v["data"][0]["width"], json!(0.5));
        assert!(v["layout"].get("margin").is_none());
    }
}
