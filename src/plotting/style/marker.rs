//! Marker shapes for scatter points and legend samples.

use super::color::Color;

/// Marker shapes for data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    /// Upward-pointing triangle
    Triangle,
    /// Downward-pointing triangle
    TriangleDown,
    Diamond,
    Plus,
    /// X-shaped cross
    Cross,
    Star,
}

impl Marker {
    /// Parse a matplotlib-style marker character (`o s ^ v D + x *`).
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'v' => Some(Marker::TriangleDown),
            'D' | 'd' => Some(Marker::Diamond),
            '+' => Some(Marker::Plus),
            'x' | 'X' => Some(Marker::Cross),
            '*' => Some(Marker::Star),
            _ => None,
        }
    }

    /// SVG path data for the marker centered at the origin.
    /// `r` is half the marker size. Circles return `None` and are drawn
    /// with a `<circle>` element instead.
    pub fn to_svg_path(&self, r: f64) -> Option<String> {
        match self {
            Marker::Circle => None,
            Marker::Square => Some(format!(
                "M{:.2},{:.2} H{:.2} V{:.2} H{:.2} Z",
                -r, -r, r, r, -r
            )),
            Marker::Triangle => {
                // equilateral, centroid at origin
                let h = r * 1.1547;
                Some(format!(
                    "M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z",
                    -h, r, h * 0.5, -r, h * 0.5
                ))
            }
            Marker::TriangleDown => {
                let h = r * 1.1547;
                Some(format!(
                    "M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z",
                    h, r, -h * 0.5, -r, -h * 0.5
                ))
            }
            Marker::Diamond => {
                let s = r * 1.2;
                Some(format!("M0,{:.2} L{:.2},0 L0,{:.2} L{:.2},0 Z", -s, s, s, -s))
            }
            Marker::Plus => Some(format!(
                "M{:.2},0 H{:.2} M0,{:.2} V{:.2}",
                -r, r, -r, r
            )),
            Marker::Cross => {
                let s = r * std::f64::consts::FRAC_1_SQRT_2;
                Some(format!(
                    "M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2}",
                    -s, -s, s, s, -s, s, s, -s
                ))
            }
            Marker::Star => {
                let mut path = String::new();
                for i in 0..10 {
                    let radius = if i % 2 == 0 { r } else { r * 0.4 };
                    let angle = std::f64::consts::PI * i as f64 / 5.0
                        - std::f64::consts::FRAC_PI_2;
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    path.push_str(&format!(
                        "{}{:.2},{:.2} ",
                        cmd,
                        radius * angle.cos(),
                        radius * angle.sin()
                    ));
                }
                path.push('Z');
                Some(path)
            }
        }
    }

    /// Line-only markers have no interior and must be stroked to be seen.
    pub fn is_stroke_only(&self) -> bool {
        matches!(self, Marker::Plus | Marker::Cross)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker::Circle
    }
}

/// Style configuration for markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub marker: Marker,
    /// Marker size (diameter in pixels)
    pub size: f64,
    pub fill: Color,
    pub edge_color: Color,
    pub edge_width: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Set fill and edge to the same color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.fill = c.clone();
        self.edge_color = c;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        let (fill, stroke_width) = if self.marker.is_stroke_only() {
            ("none".to_string(), self.edge_width.max(1.5))
        } else {
            (self.fill.to_svg_string(), self.edge_width)
        };
        let mut attrs = format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            fill,
            self.edge_color.to_svg_string(),
            stroke_width
        );
        if self.fill_opacity < 1.0 {
            attrs.push_str(&format!(" fill-opacity=\"{}\"", self.fill_opacity));
        }
        attrs
    }

    /// Render the marker at a pixel position.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let style = self.to_svg_style();
        let radius = self.size / 2.0;
        match self.marker.to_svg_path(radius) {
            None => format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n",
                x, y, radius, style
            ),
            Some(path) => format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                path, x, y, style
            ),
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
            fill_opacity: 1.0,
        }
    }
}
