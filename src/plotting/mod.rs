//! Minimal plotting surface.
//! Provides a matplotlib-like figure/axes API with scatter, horizontal bar
//! and reference-line marks, rendered to SVG.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::Axes;
pub use data::IntoPlotData;
pub use element::{Bounds, LegendPosition};
pub use error::{PlotError, PlotResult};
pub use figure::{DEFAULT_DPI, Figure};
pub use plot::{BarhPlot, Plot, ScatterPlot};
pub use scale::{LinearScale, Scale};
pub use style::{
    Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, TextStyle, Theme, ThemeConfig,
};

