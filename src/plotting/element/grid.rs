//! Grid line configuration.

use crate::plotting::style::{Color, LineStyle};

/// Configuration for grid lines drawn at the major ticks.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub style: LineStyle,
    /// Vertical lines at the x ticks
    pub show_x: bool,
    /// Horizontal lines at the y ticks
    pub show_y: bool,
    pub opacity: f64,
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.style.color = color.into();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Render `(x1, y1, x2, y2)` pixel segments as grid lines.
    pub fn render_lines(&self, segments: &[(f64, f64, f64, f64)]) -> String {
        let mut svg = String::new();
        for (x1, y1, x2, y2) in segments {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"/>\n",
                x1,
                y1,
                x2,
                y2,
                self.style.color.to_svg_string(),
                self.style.width,
                self.opacity
            ));
        }
        svg
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: true,
            style: LineStyle::new().color(Color::LIGHT_GRAY).width(0.5),
            show_x: true,
            show_y: true,
            opacity: 0.8,
        }
    }
}
