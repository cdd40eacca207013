//! Draw a [`ChartDefinition`] to **SVG** or **PNG** with plotters.
//!
//! - Numeric x-values share a continuous axis; any label switches the whole
//!   chart to category slots
//! - Markers honor per-point sizes (diameter in px) and colors
//! - Bars honor per-point colors and widths; several bar series are grouped
//! - Series colors default to the Microsoft Office palette

use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};

use super::Renderer;
use super::fonts::ensure_fonts_registered;
use super::types::{
    DEFAULT_HEIGHT, DEFAULT_MARGIN_PX, DEFAULT_MARKER_SIZE, DEFAULT_WIDTH, OutputFormat,
};
use crate::color::{Rgba, parse_color, series_color};
use crate::error::{ChartError, ChartResult};
use crate::extent::{DEFAULT_BAR_WIDTH, Extent, format_tick};
use crate::labels::truncate_to_width;
use crate::models::{ChartDefinition, Mode};

/// Writes one image file per rendered definition.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl PlottersRenderer {
    /// Target file; the format follows the extension (`.svg` or bitmap).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.path)
    }
}

impl Renderer for PlottersRenderer {
    type Output = PathBuf;

    fn render(&mut self, chart: ChartDefinition) -> ChartResult<PathBuf> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidValue(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let extent = Extent::of(&chart);
        if !extent.is_drawable() {
            return Err(ChartError::InvalidValue(format!(
                "data range too wide to draw: x {:?}, y {:?}",
                extent.x_range, extent.y_range
            )));
        }
        let text = ensure_fonts_registered();
        let path_string = self.path.to_string_lossy().into_owned();

        match self.format() {
            OutputFormat::Svg => {
                let root = SVGBackend::new(path_string.as_str(), (self.width, self.height))
                    .into_drawing_area();
                draw_chart(root, &chart, &extent, text)?;
            }
            OutputFormat::Png => {
                let root = BitMapBackend::new(path_string.as_str(), (self.width, self.height))
                    .into_drawing_area();
                draw_chart(root, &chart, &extent, text)?;
            }
        }
        info!("wrote chart to {}", self.path.display());
        Ok(self.path.clone())
    }
}

fn backend_err<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Render(format!("{e:?}"))
}

fn to_plotters(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

fn resolve_color(s: &str, fallback: RGBAColor) -> RGBAColor {
    match parse_color(s) {
        Some(c) => to_plotters(c),
        None => {
            warn!("unrecognized color {s:?}, using series color");
            fallback
        }
    }
}

fn margin_px(v: Option<f64>) -> u32 {
    v.map(|m| m.round() as u32).unwrap_or(DEFAULT_MARGIN_PX)
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    chart: &ChartDefinition,
    extent: &Extent,
    text: bool,
) -> ChartResult<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(backend_err)?;
    let layout = chart.layout();
    let (root_w, _) = root.dim_in_pixel();

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin_top(margin_px(layout.margins.top))
        .margin_left(margin_px(layout.margins.left))
        .margin_right(margin_px(layout.margins.right))
        .margin_bottom(margin_px(layout.margins.bottom));
    if text {
        if let Some(title) = layout.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            builder.caption(
                truncate_to_width(title, 24, root_w.saturating_sub(32)),
                (FontFamily::SansSerif, 24),
            );
        }
        builder
            .set_label_area_size(LabelAreaPosition::Left, 56)
            .set_label_area_size(LabelAreaPosition::Bottom, 48);
    }

    let (x0, x1) = extent.x_range;
    let (y0, y1) = extent.y_range;
    let mut ctx = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(backend_err)?;

    if text {
        let x_axis = layout.x_axis.clone().unwrap_or_default();
        let y_axis = layout.y_axis.clone().unwrap_or_default();
        let x_fmt = |v: &f64| {
            if x_axis.show_tick_labels {
                extent.x_tick_label(*v)
            } else {
                String::new()
            }
        };
        let y_fmt = |v: &f64| {
            if y_axis.show_tick_labels {
                format_tick(*v)
            } else {
                String::new()
            }
        };

        let mut mesh = ctx.configure_mesh();
        mesh.x_labels(extent.category_count().unwrap_or(10).max(1))
            .y_labels(10)
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .label_style((FontFamily::SansSerif, 12))
            .axis_desc_style((FontFamily::SansSerif, 14));
        if let Some(t) = &x_axis.title {
            mesh.x_desc(t.as_str());
        }
        if let Some(t) = &y_axis.title {
            mesh.y_desc(t.as_str());
        }
        if extent.category_count().is_some() {
            mesh.disable_x_mesh();
        }
        mesh.draw().map_err(backend_err)?;
    }

    let bar_series = chart
        .series()
        .iter()
        .filter(|s| s.mode() == Mode::Bar)
        .count();
    let mut bar_slot = 0usize;
    let legend = text && layout.show_legend;

    for (idx, series) in chart.series().iter().enumerate() {
        let base = to_plotters(series_color(idx));
        let point_color = |i: usize| -> RGBAColor {
            series
                .colors()
                .and_then(|c| c.get(i))
                .map(|c| resolve_color(c, base))
                .unwrap_or(base)
        };
        // (x position, y, point index); points outside the domain are skipped
        let pts: Vec<(f64, f64, usize)> = series
            .points()
            .enumerate()
            .filter_map(|(i, (x, y))| extent.x_position(x).map(|px| (px, y, i)))
            .collect();

        let anno = match series.mode() {
            Mode::Line => ctx.draw_series(LineSeries::new(
                pts.iter().map(|&(x, y, _)| (x, y)),
                base.stroke_width(2),
            )),
            Mode::Markers => ctx.draw_series(pts.iter().map(|&(x, y, i)| {
                let size = series.sizes().map_or(DEFAULT_MARKER_SIZE, |s| s[i]);
                let radius = ((size / 2.0).round() as i32).max(1);
                Circle::new((x, y), radius, point_color(i).filled())
            })),
            Mode::Bar => {
                let slot = bar_slot;
                bar_slot += 1;
                ctx.draw_series(pts.iter().map(|&(x, y, i)| {
                    let w = series.width_at(i).unwrap_or(DEFAULT_BAR_WIDTH);
                    let sub = w / bar_series.max(1) as f64;
                    let left = x - w / 2.0 + slot as f64 * sub;
                    Rectangle::new(
                        [(left, 0.0f64.min(y)), (left + sub, 0.0f64.max(y))],
                        point_color(i).filled(),
                    )
                }))
            }
        }
        .map_err(backend_err)?;

        if legend {
            let label = series
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("trace {idx}"));
            anno.label(label).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], base.filled())
            });
        }

        if text && let Some(labels) = series.text() {
            ctx.draw_series(pts.iter().filter_map(|&(x, y, i)| {
                labels[i]
                    .as_ref()
                    .map(|t| Text::new(t.clone(), (x, y), (FontFamily::SansSerif, 12)))
            }))
            .map_err(backend_err)?;
        }
    }

    if legend {
        ctx.configure_series_labels()
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(backend_err)?;
    }

    root.present().map_err(backend_err)?;
    Ok(())
}
