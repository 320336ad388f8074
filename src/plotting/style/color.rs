//! Colors and matplotlib-style color shorthands.

use std::fmt;

/// A color for markers, lines, fills and text.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color, resolved when rendered ("red", "k", "C3", ...)
    Named(String),
}

/// Named colors understood by [`Color::Named`], including the single-letter
/// shorthands `b g r c m y k w`.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("k", "#000000"),
    ("white", "#FFFFFF"),
    ("w", "#FFFFFF"),
    ("red", "#FF0000"),
    ("r", "#FF0000"),
    ("green", "#008000"),
    ("g", "#008000"),
    ("blue", "#0000FF"),
    ("b", "#0000FF"),
    ("cyan", "#00BFBF"),
    ("c", "#00BFBF"),
    ("magenta", "#BF00BF"),
    ("m", "#BF00BF"),
    ("yellow", "#BFBF00"),
    ("y", "#BFBF00"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("lightgray", "#D3D3D3"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("c0", "#1f77b4"),
    ("c1", "#ff7f0e"),
    ("c2", "#2ca02c"),
    ("c3", "#d62728"),
    ("c4", "#9467bd"),
    ("c5", "#8c564b"),
    ("c6", "#e377c2"),
    ("c7", "#7f7f7f"),
    ("c8", "#bcbd22"),
    ("c9", "#17becf"),
];

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Convert the color to an SVG paint value.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => {
                let lower = name.to_lowercase();
                NAMED_COLORS
                    .iter()
                    .find(|(key, _)| *key == lower)
                    .map(|(_, hex)| hex.to_string())
                    // Unknown names are passed through as CSS color keywords
                    .unwrap_or_else(|| name.clone())
            }
        }
    }

    /// Whether this color paints nothing.
    pub fn is_transparent(&self) -> bool {
        match self {
            Color::Rgba(_, _, _, a) => *a == 0.0,
            Color::Named(name) => name.eq_ignore_ascii_case("none"),
            Color::Rgb(..) => false,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}
