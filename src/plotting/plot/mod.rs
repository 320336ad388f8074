//! Plot types drawn inside an axes.

mod bar;
mod scatter;

pub use bar::BarhPlot;
pub use scatter::ScatterPlot;

use crate::plotting::element::{Bounds, LegendEntry};
use crate::plotting::style::MarkerStyle;

/// Trait for plot types that can be rendered.
pub trait Plot: std::fmt::Debug {
    /// Data-space extent of this plot, `None` when it has no finite points.
    fn bounds(&self) -> Option<Bounds>;

    /// Legend label, if the plot should appear in the legend.
    fn label(&self) -> Option<&str>;

    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Create a legend entry for this plot.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            entry
        })
    }

    /// Render this plot to SVG elements.
    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String;
}
