//! Color strings and palettes.
//!
//! Series colors are kept as the caller's strings in the model; this module
//! turns them into RGBA for backends that need numeric colors.
//!
//! Accepted forms: `#rgb`, `#rrggbb`, `rgb(r,g,b)`, `rgba(r,g,b,a)`, and the
//! names from [`named_color`].

use regex::Regex;
use std::sync::OnceLock;

/// RGBA color; `a` is opacity in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [(u8, u8, u8); 10] = [
    (68, 114, 196),  // blue      (#4472C4)
    (237, 125, 49),  // orange    (#ED7D31)
    (165, 165, 165), // gray      (#A5A5A5)
    (255, 192, 0),   // gold      (#FFC000)
    (91, 155, 213),  // light blue(#5B9BD5)
    (112, 173, 71),  // green     (#70AD47)
    (38, 68, 120),   // dark blue (#264478)
    (158, 72, 14),   // dark org. (#9E480E)
    (99, 99, 99),    // dark gray (#636363)
    (153, 115, 0),   // brownish  (#997300)
];

/// Default color for the `idx`-th series.
#[inline]
pub fn series_color(idx: usize) -> Rgba {
    let (r, g, b) = OFFICE10[idx % OFFICE10.len()];
    Rgba::rgb(r, g, b)
}

/// Dashboard palette (`blue1`..`teal1`) plus a handful of CSS names.
const NAMED: &[(&str, &str)] = &[
    ("blue1", "#295783"),
    ("blue2", "#6798C1"),
    ("blue3", "#92C0DF"),
    ("blue4", "#89B8DA"),
    ("blue5", "#B9DDF1"),
    ("gray1", "#57606C"),
    ("gray2", "#C7C7C7"),
    ("gray3", "#ABABAB"),
    ("gray4", "#57606C"),
    ("orange1", "#D75521"),
    ("orange2", "#FFAE34"),
    ("yellow1", "#F7A84A"),
    ("yellow2", "#D3C95F"),
    ("green1", "#146C36"),
    ("green2", "#67A956"),
    ("green3", "#A3BD5A"),
    ("red1", "#EF6F6A"),
    ("teal1", "#8CC2CA"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("red", "#FF0000"),
    ("green", "#008000"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("lightgray", "#D3D3D3"),
    ("lightgrey", "#D3D3D3"),
    ("darkgray", "#A9A9A9"),
    ("darkgrey", "#A9A9A9"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("steelblue", "#4682B4"),
];

/// Look up a named color (case-insensitive).
pub fn named_color(name: &str) -> Option<Rgba> {
    let key = name.trim().to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(n, _)| *n == key)
        .and_then(|(_, hex)| parse_hex(hex))
}

fn rgb_func_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        )
        .expect("static regex is valid")
    })
}

fn parse_hex(s: &str) -> Option<Rgba> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Rgba::rgb(it.next()??, it.next()??, it.next()??))
        }
        6 => Some(Rgba::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Parse a color string. Returns `None` for anything unrecognized.
pub fn parse_color(s: &str) -> Option<Rgba> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s);
    }
    if let Some(caps) = rgb_func_re().captures(s) {
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        let a = match caps.get(4) {
            Some(m) => m.as_str().parse::<f64>().ok()?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        return Some(Rgba::new(channel(1)?, channel(2)?, channel(3)?, a));
    }
    named_color(s)
}
