//! Fill styling for bars and legend frames.

use super::color::Color;

/// Style configuration for filled shapes.
#[derive(Debug, Clone)]
pub struct FillStyle {
    pub color: Color,
    /// Fill opacity (0.0 - 1.0)
    pub opacity: f64,
    /// Stroke/border color (None for no stroke)
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl FillStyle {
    pub fn new(color: impl Into<Color>) -> Self {
        FillStyle {
            color: color.into(),
            ..Default::default()
        }
    }

    /// A shape that paints nothing: no fill, no outline.
    pub fn none() -> Self {
        FillStyle {
            color: Color::TRANSPARENT,
            opacity: 0.0,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.stroke = Some(color.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// True when neither fill nor outline would be visible.
    pub fn is_invisible(&self) -> bool {
        (self.opacity == 0.0 || self.color.is_transparent()) && self.stroke.is_none()
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = if self.opacity == 0.0 || self.color.is_transparent() {
            "fill=\"none\"".to_string()
        } else {
            format!("fill=\"{}\"", self.color.to_svg_string())
        };
        if self.opacity > 0.0 && self.opacity < 1.0 {
            attrs.push_str(&format!(" fill-opacity=\"{}\"", self.opacity));
        }
        match self.stroke {
            Some(ref stroke) => attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.to_svg_string(),
                self.stroke_width
            )),
            None => attrs.push_str(" stroke=\"none\""),
        }
        attrs
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle {
            color: Color::default(),
            opacity: 1.0,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_fill_is_invisible() {
        let style = FillStyle::none();
        assert!(style.is_invisible());
        assert_eq!(style.to_svg_style(), "fill=\"none\" stroke=\"none\"");
    }

    #[test]
    fn test_stroked_fill() {
        let style = FillStyle::new(Color::WHITE).opacity(0.9).stroke(Color::GRAY);
        assert!(!style.is_invisible());
        let svg = style.to_svg_style();
        assert!(svg.contains("fill-opacity=\"0.9\""));
        assert!(svg.contains("stroke=\"rgb(128,128,128)\""));
    }
}
