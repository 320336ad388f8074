//! Error types for coefficient plotting.

use std::fmt;
use std::io;

/// The main error type for coefplot operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// A referenced column does not exist in the dataset
    MissingColumn(String),
    /// A column exists but holds the wrong kind of values
    ColumnType {
        column: String,
        expected: &'static str,
    },
    /// More distinct series than the marker/color cycle can style
    SymbolsExhausted { needed: usize, available: usize },
    /// Empty data provided where non-empty data is required
    EmptyData,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::MissingColumn(name) => write!(f, "No column named '{}'", name),
            PlotError::ColumnType { column, expected } => {
                write!(f, "Column '{}' must hold {} values", column, expected)
            }
            PlotError::SymbolsExhausted { needed, available } => write!(
                f,
                "{} distinct variables but only {} marker/color pairs available",
                needed, available
            ),
            PlotError::EmptyData => write!(f, "Empty data provided"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for coefplot operations.
pub type PlotResult<T> = Result<T, PlotError>;
