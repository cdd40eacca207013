//! Public types and constants for the rendering module.

use std::path::Path;

/// Image formats written by the plotters backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// `.svg` (any case) is SVG; everything else is a bitmap.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

/// Default canvas size, matching the CLI defaults.
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Margin used for any side the layout leaves unset.
pub const DEFAULT_MARGIN_PX: u32 = 16;

/// Marker diameter used when a markers series has no per-point sizes.
pub const DEFAULT_MARKER_SIZE: f64 = 6.0;
