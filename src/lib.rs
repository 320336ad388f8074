//! Coefficient (dot-and-whisker) plots rendered to SVG.
//!
//! ```
//! use coefplot::{CoefPlot, Dataset, GroupedPlotRequest};
//!
//! let data = Dataset::new()
//!     .with_column("b", vec![0.2, 0.4, 0.1, 0.3]).unwrap()
//!     .with_column("var", vec!["age", "income", "age", "income"]).unwrap()
//!     .with_column("model", vec!["m1", "m1", "m2", "m2"]).unwrap();
//!
//! let request = GroupedPlotRequest::new("b", "var", "model").zero_line(true);
//! let layout = CoefPlot::new(&data).grouped_layout(&request).unwrap();
//! assert_eq!(layout.series.len(), 2);
//! ```

pub mod config;
pub mod dotplot;
pub mod plotting;

pub use dotplot::{CoefPlot, Dataset, GroupedPlotRequest, SimplePlotRequest, SymbolCycle};
pub use plotting::{Figure, PlotError, PlotResult};
