//! Line styling for axes, error bars and reference lines.

use super::color::Color;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl DashPattern {
    /// Convert to an SVG `stroke-dasharray` value. Solid lines have none.
    pub fn to_svg_dasharray(&self) -> Option<&'static str> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("6,4"),
            DashPattern::Dotted => Some("2,2"),
            DashPattern::DashDot => Some("6,3,2,3"),
        }
    }
}

/// Style configuration for lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    pub dash: DashPattern,
    /// Opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Generate SVG stroke attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = format!(
            "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
            self.color.to_svg_string(),
            self.width
        );
        if self.opacity < 1.0 {
            attrs.push_str(&format!(" stroke-opacity=\"{}\"", self.opacity));
        }
        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push_str(&format!(" stroke-dasharray=\"{}\"", dasharray));
        }
        attrs
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}
