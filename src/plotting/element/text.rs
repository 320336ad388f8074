//! Positioned text for titles and axis labels.

use crate::plotting::style::{TextAnchor, TextStyle};

/// A text element placed at a pixel position.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Copy of this text moved to `(x, y)` and centered there.
    pub fn centered_at(&self, x: f64, y: f64) -> Text {
        let mut t = self.clone();
        t.x = x;
        t.y = y;
        t.style.anchor = TextAnchor::Middle;
        t
    }

    pub fn to_svg(&self) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(
                " transform=\"rotate({},{:.2},{:.2})\"",
                self.style.rotation, self.x, self.y
            )
        } else {
            String::new()
        };

        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" {}{}>{}</text>\n",
            self.x,
            self.y,
            self.style.anchor.to_svg_string(),
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
