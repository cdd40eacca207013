//! chartdef
//!
//! A lightweight Rust library for validating, storing, exporting, and rendering
//! declarative chart definitions. Pairs with the `chartdef` CLI.
//!
//! ### Features
//! - Validating builder: equal-length series, known modes, positive sizes
//! - Immutable `ChartDefinition` values with JSON save/load
//! - Plotly JSON export (`data` / `layout` / `config`)
//! - SVG/PNG rendering through `plotters`
//!
//! ### Example
//! ```no_run
//! use chartdef::render::{PlottersRenderer, Renderer};
//! use chartdef::{ChartConfigBuilder, SeriesOptions};
//!
//! let mut builder = ChartConfigBuilder::new();
//! builder.add_series(
//!     [0, 1, 2],
//!     [1, 9, 4],
//!     "markers",
//!     SeriesOptions::new().sizes([20.0, 40.0, 25.0]),
//! )?;
//! let chart = builder.build()?;
//! chartdef::storage::save_json(&chart, "bubbles.json")?;
//! PlottersRenderer::new("bubbles.svg").size(800, 480).render(chart)?;
//! # Ok::<(), chartdef::ChartError>(())
//! ```

pub mod builder;
pub mod color;
pub mod demo;
pub mod error;
pub mod extent;
pub mod labels;
pub mod models;
pub mod render;
pub mod storage;

pub use builder::ChartConfigBuilder;
pub use error::{ChartError, ChartResult};
pub use models::{
    AxisOptions, ChartDefinition, DisplayOptions, Layout, Margins, Mode, Series, SeriesOptions,
    XValue,
};
