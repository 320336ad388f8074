//! SVG document assembly.

use crate::plotting::style::FillStyle;

/// Collects SVG fragments and wraps them into a standalone document.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    content: Vec<String>,
    include_declaration: bool,
}

impl SvgBackend {
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            include_declaration: true,
        }
    }

    /// Set whether to include the XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            x,
            y,
            width,
            height,
            style.to_svg_style()
        ));
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        let declaration = if self.include_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };

        format!(
            "{}<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}\n</svg>\n",
            declaration,
            self.width,
            self.height,
            self.width,
            self.height,
            self.content.join("\n")
        )
    }
}
