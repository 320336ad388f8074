//! Visual elements for plots.

mod axis;
mod grid;
mod legend;
pub mod text;

pub use axis::AxisConfig;
pub use grid::GridConfig;
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use text::{Text, escape_xml};

/// Axis-aligned rectangle, used both for data ranges and pixel areas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds that contain nothing; the first included point defines them.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// False for [`Bounds::empty`] and anything built from non-finite values.
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.include_x(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand only the horizontal range.
    pub fn include_x(&mut self, x: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Add padding as a fraction of the range.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let x_pad = self.width() * fraction;
        let y_pad = self.height() * fraction;
        Bounds {
            x_min: self.x_min - x_pad,
            x_max: self.x_max + x_pad,
            y_min: self.y_min - y_pad,
            y_max: self.y_max + y_pad,
        }
    }

    /// Map a data-space point into `pixel` space. SVG y grows downward, so
    /// the vertical axis is flipped.
    pub fn to_pixel(&self, pixel: &Bounds, x: f64, y: f64) -> (f64, f64) {
        let x_norm = (x - self.x_min) / self.width();
        let y_norm = (y - self.y_min) / self.height();
        (
            pixel.x_min + x_norm * pixel.width(),
            pixel.y_max - y_norm * pixel.height(),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }
}
