//! Legend configuration.

use serde::Deserialize;

use crate::plotting::style::{Color, FillStyle, MarkerStyle, TextStyle};

/// Corner of the plot area the legend box is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LegendPosition {
    fn is_left(&self) -> bool {
        matches!(self, LegendPosition::TopLeft | LegendPosition::BottomLeft)
    }

    fn is_top(&self) -> bool {
        matches!(self, LegendPosition::TopLeft | LegendPosition::TopRight)
    }
}

/// A single entry in the legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub marker_style: Option<MarkerStyle>,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            marker_style: None,
        }
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }
}

/// Legend configuration.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Entries in the order their plots were added
    pub entries: Vec<LegendEntry>,
    pub position: LegendPosition,
    pub visible: bool,
    /// List entries last-added first
    pub reversed: bool,
    pub background: FillStyle,
    pub text_style: TextStyle,
    /// Padding inside the legend box
    pub padding: f64,
    /// Width of the marker sample slot
    pub sample_width: f64,
    /// Gap between sample and label
    pub label_gap: f64,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Entries in display order.
    pub fn display_entries(&self) -> Vec<&LegendEntry> {
        if self.reversed {
            self.entries.iter().rev().collect()
        } else {
            self.entries.iter().collect()
        }
    }

    /// Render the legend box inside the `area` pixel rectangle.
    pub fn render_svg(&self, area: &super::Bounds) -> String {
        let entries = self.display_entries();
        let line_height = self.text_style.font_size * 1.6;
        let longest = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
        // rough glyph width; there is no font metrics backend
        let text_width = longest as f64 * self.text_style.font_size * 0.6;
        let width = self.padding * 2.0 + self.sample_width + self.label_gap + text_width;
        let height = self.padding * 2.0 + entries.len() as f64 * line_height;

        let lx = if self.position.is_left() {
            area.x_min + 5.0
        } else {
            area.x_max - width - 5.0
        };
        let ly = if self.position.is_top() {
            area.y_min + 5.0
        } else {
            area.y_max - height - 5.0
        };

        let mut svg = format!(
            "<g class=\"legend\">\n<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
            lx,
            ly,
            width,
            height,
            self.background.to_svg_style()
        );

        for (i, entry) in entries.iter().enumerate() {
            let ey = ly + self.padding + (i as f64 + 0.5) * line_height;
            let x1 = lx + self.padding;
            let x2 = x1 + self.sample_width;

            if let Some(ref marker) = entry.marker_style {
                svg.push_str(&marker.render_at((x1 + x2) / 2.0, ey));
            }

            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\" {}>{}</text>\n",
                x2 + self.label_gap,
                ey,
                self.text_style.to_svg_attrs(),
                super::escape_xml(&entry.label)
            ));
        }
        svg.push_str("</g>\n");
        svg
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            position: LegendPosition::TopRight,
            visible: true,
            reversed: false,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.9)
                .stroke(Color::GRAY)
                .stroke_width(0.5),
            text_style: TextStyle::new().font_size(10.0),
            padding: 8.0,
            sample_width: 20.0,
            label_gap: 8.0,
        }
    }
}
