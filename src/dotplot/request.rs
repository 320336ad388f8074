//! Plot requests: which columns to plot and how.

use log::warn;
use serde::Deserialize;

/// Canvas size in inches used when a request does not set one.
pub const DEFAULT_SIZE: (f64, f64) = (10.0, 6.0);

fn default_size() -> (f64, f64) {
    DEFAULT_SIZE
}

/// Row order for a simple dot plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Input order
    None,
    /// Variable name, descending
    VariableDescending,
    /// Coefficient value, ascending
    CoefficientAscending,
}

/// One dot per row, one row per variable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimplePlotRequest {
    /// Coefficient column
    pub coef: String,
    /// Variable-name column
    pub varname: String,
    /// Error-magnitude column
    #[serde(default)]
    pub err: Option<String>,
    /// Canvas (width, height) in inches
    #[serde(default = "default_size")]
    pub size: (f64, f64),
    #[serde(default)]
    pub sort_by_var: bool,
    #[serde(default)]
    pub sort_by_coef: bool,
    #[serde(default)]
    pub zero_line: bool,
}

impl SimplePlotRequest {
    pub fn new(coef: impl Into<String>, varname: impl Into<String>) -> Self {
        SimplePlotRequest {
            coef: coef.into(),
            varname: varname.into(),
            err: None,
            size: DEFAULT_SIZE,
            sort_by_var: false,
            sort_by_coef: false,
            zero_line: false,
        }
    }

    pub fn err(mut self, column: impl Into<String>) -> Self {
        self.err = Some(column.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = (width, height);
        self
    }

    pub fn sort_by_var(mut self, sort: bool) -> Self {
        self.sort_by_var = sort;
        self
    }

    pub fn sort_by_coef(mut self, sort: bool) -> Self {
        self.sort_by_coef = sort;
        self
    }

    pub fn zero_line(mut self, draw: bool) -> Self {
        self.zero_line = draw;
        self
    }

    /// Resolve the two sort flags. Setting both is a usage error that is
    /// reported and then treated as no sort.
    pub fn sort_mode(&self) -> SortMode {
        match (self.sort_by_var, self.sort_by_coef) {
            (true, true) => {
                warn!("Sort by EITHER variable name OR coefficient value; keeping input order");
                SortMode::None
            }
            (true, false) => SortMode::VariableDescending,
            (false, true) => SortMode::CoefficientAscending,
            (false, false) => SortMode::None,
        }
    }
}

/// One dot per (variable, group) row; groups on the categorical axis,
/// variables fanned out around each group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupedPlotRequest {
    pub coef: String,
    pub varname: String,
    /// Group-name column
    pub group: String,
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default = "default_size")]
    pub size: (f64, f64),
    /// Sort rows by group name, descending
    #[serde(default)]
    pub sort_by_group: bool,
    #[serde(default)]
    pub zero_line: bool,
}

impl GroupedPlotRequest {
    pub fn new(
        coef: impl Into<String>,
        varname: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        GroupedPlotRequest {
            coef: coef.into(),
            varname: varname.into(),
            group: group.into(),
            err: None,
            size: DEFAULT_SIZE,
            sort_by_group: false,
            zero_line: false,
        }
    }

    pub fn err(mut self, column: impl Into<String>) -> Self {
        self.err = Some(column.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = (width, height);
        self
    }

    pub fn sort_by_group(mut self, sort: bool) -> Self {
        self.sort_by_group = sort;
        self
    }

    pub fn zero_line(mut self, draw: bool) -> Self {
        self.zero_line = draw;
        self
    }
}
