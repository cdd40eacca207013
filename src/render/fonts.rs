//! One-time registration of a "sans-serif" font for the `ab_glyph` text path.
//!
//! `ab_glyph` doesn't discover OS fonts. DejaVu Sans ships in `assets/` and is
//! compiled in; `CHARTDEF_FONT` can point at another TTF to use instead.

use log::{debug, warn};
use plotters::style::FontStyle;
use std::sync::OnceLock;

/// Environment variable pointing at a TTF file to use for chart text.
pub const FONT_ENV: &str = "CHARTDEF_FONT";

static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static FONT_READY: OnceLock<bool> = OnceLock::new();

fn register(bytes: &'static [u8]) -> bool {
    plotters::style::register_font("sans-serif", FontStyle::Normal, bytes).is_ok()
}

/// The user-supplied font from `CHARTDEF_FONT`, leaked for the process lifetime.
fn env_font() -> Option<&'static [u8]> {
    let path = std::env::var_os(FONT_ENV)?;
    match std::fs::read(&path) {
        Ok(bytes) => Some(Box::leak(bytes.into_boxed_slice())),
        Err(e) => {
            warn!("cannot read {FONT_ENV}={}: {e}", path.to_string_lossy());
            None
        }
    }
}

/// Register the chart font. Returns whether text can be drawn.
/// Safe to call many times; only the first call does any work.
pub fn ensure_fonts_registered() -> bool {
    *FONT_READY.get_or_init(|| {
        if let Some(bytes) = env_font() {
            if register(bytes) {
                debug!("registered chart font from {FONT_ENV}");
                return true;
            }
            warn!("{FONT_ENV} is not a usable TTF, using the bundled font");
        }
        let ok = register(BUNDLED_FONT);
        if !ok {
            warn!("bundled font failed to load; charts are drawn without text");
        }
        ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_font_registers() {
        assert!(!BUNDLED_FONT.is_empty());
        assert!(ensure_fonts_registered());
        assert!(ensure_fonts_registered());
    }
}
