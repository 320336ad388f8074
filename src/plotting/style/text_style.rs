//! Text styling for titles, tick labels and legend entries.

use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Horizontal anchor of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Style configuration for text elements.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub anchor: TextAnchor,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// SVG font and fill attributes. Position and anchor are written by the
    /// caller since they depend on where the text is placed.
    pub fn to_svg_attrs(&self) -> String {
        format!(
            "font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\"",
            self.font_family,
            self.font_size,
            self.weight.to_svg_string(),
            self.color.to_svg_string()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            rotation: 0.0,
        }
    }
}
