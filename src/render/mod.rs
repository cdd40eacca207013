//! Rendering backends: anything that consumes a [`ChartDefinition`].
//!
//! - [`PlotlyExporter`]: the `data` / `layout` / `config` JSON triple for `Plotly.newPlot`
//! - [`PlottersRenderer`]: SVG or PNG files via `plotters`
//!
//! Backends are plain values handed to the caller's code; nothing here keeps
//! global render state apart from font registration.

pub mod draw;
pub mod fonts;
pub mod plotly;
pub mod types;

pub use draw::PlottersRenderer;
pub use plotly::PlotlyExporter;
pub use types::OutputFormat;

use crate::error::ChartResult;
use crate::models::ChartDefinition;

/// A rendering backend. Takes the definition by value: each definition is
/// consumed by exactly one render call.
pub trait Renderer {
    type Output;

    fn render(&mut self, chart: ChartDefinition) -> ChartResult<Self::Output>;
}
