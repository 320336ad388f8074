//! Coefficient (dot-and-whisker) plots.
//!
//! A [`Dataset`] holds the estimates, a request names the columns to plot
//! and [`CoefPlot`] turns the two into a [`DotplotLayout`] and then a
//! [`Figure`](crate::plotting::Figure). Simple plots put one dot per row on
//! the categorical axis; grouped plots put groups on that axis and fan out
//! one marker/color per variable around each group.

mod builder;
mod dataset;
mod layout;
mod offsets;
mod order;
mod request;
mod symbols;

pub use builder::CoefPlot;
pub use dataset::{Column, Dataset};
pub use layout::{DotplotLayout, MarkSeries};
pub use offsets::{OFFSET_STEP, offset_grid};
pub use order::{
    ascending_by_value, descending_by_text, descending_by_value, distinct_in_order, identity_order,
};
pub use request::{DEFAULT_SIZE, GroupedPlotRequest, SimplePlotRequest, SortMode};
pub use symbols::{DEFAULT_COLORS, DEFAULT_MARKERS, Symbol, SymbolCycle, SymbolSpec};
