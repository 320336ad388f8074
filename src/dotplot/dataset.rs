//! In-memory table of named columns.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::plotting::{PlotError, PlotResult};

/// A single column of values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Numeric(v)
    }
}

impl From<Vec<String>> for Column {
    fn from(v: Vec<String>) -> Self {
        Column::Text(v)
    }
}

impl From<Vec<&str>> for Column {
    fn from(v: Vec<&str>) -> Self {
        Column::Text(v.into_iter().map(String::from).collect())
    }
}

/// An ordered table: columns keep insertion order, rows keep input order.
/// All columns have the same number of rows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "IndexMap<String, Column>")]
pub struct Dataset {
    columns: IndexMap<String, Column>,
    rows: usize,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Dataset::insert`].
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> PlotResult<Self> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Add or replace a column. Its length must match the existing rows.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> PlotResult<()> {
        let name = name.into();
        let column = column.into();
        let replacing_only = self.columns.len() == 1 && self.columns.contains_key(&name);
        if !self.columns.is_empty() && !replacing_only && column.len() != self.rows {
            return Err(PlotError::InvalidData(format!(
                "column '{}' has {} rows, expected {}",
                name,
                column.len(),
                self.rows
            )));
        }
        self.rows = column.len();
        self.columns.insert(name, column);
        Ok(())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> PlotResult<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| PlotError::MissingColumn(name.to_string()))
    }

    /// Values of a numeric column.
    pub fn numeric(&self, name: &str) -> PlotResult<&[f64]> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v),
            Column::Text(v) if v.is_empty() => Ok(&[]),
            Column::Text(_) => Err(PlotError::ColumnType {
                column: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Values of a text column.
    pub fn text(&self, name: &str) -> PlotResult<&[String]> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            Column::Numeric(v) if v.is_empty() => Ok(&[]),
            Column::Numeric(_) => Err(PlotError::ColumnType {
                column: name.to_string(),
                expected: "text",
            }),
        }
    }

    /// Values of any column as category labels. Numeric cells are
    /// formatted, so years or lags can name variables and groups.
    pub fn labels(&self, name: &str) -> PlotResult<Cow<'_, [String]>> {
        match self.column(name)? {
            Column::Text(v) => Ok(Cow::Borrowed(v.as_slice())),
            Column::Numeric(v) => Ok(Cow::Owned(v.iter().map(|x| format_label(*x)).collect())),
        }
    }
}

/// Integral values print without a fraction (`2019`, not `2019.0`).
fn format_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

impl TryFrom<IndexMap<String, Column>> for Dataset {
    type Error = PlotError;

    fn try_from(columns: IndexMap<String, Column>) -> Result<Self, Self::Error> {
        let mut dataset = Dataset::new();
        for (name, column) in columns {
            dataset.insert(name, column)?;
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new()
            .with_column("b", vec![0.5, -0.3, 0.1])
            .unwrap()
            .with_column("var", vec!["x", "y", "z"])
            .unwrap()
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let data = sample();
        assert_eq!(data.len(), 3);
        assert_eq!(data.column_names().collect::<Vec<_>>(), vec!["b", "var"]);
    }

    #[test]
    fn test_missing_and_mistyped_columns() {
        let data = sample();
        assert!(matches!(
            data.numeric("nope"),
            Err(PlotError::MissingColumn(ref n)) if n == "nope"
        ));
        assert!(matches!(
            data.numeric("var"),
            Err(PlotError::ColumnType { expected: "numeric", .. })
        ));
        assert!(matches!(
            data.text("b"),
            Err(PlotError::ColumnType { expected: "text", .. })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut data = sample();
        let err = data.insert("se", vec![0.1]).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
        // replacing the only column may change the row count
        let mut single = Dataset::new().with_column("b", vec![1.0]).unwrap();
        single.insert("b", vec![1.0, 2.0]).unwrap();
        assert_eq!(single.len(), 2);
    }

    #[test]
    fn test_labels_from_any_column() {
        let data = sample()
            .with_column("year", vec![2019.0, 2020.0, -3.5])
            .unwrap();
        assert!(matches!(data.labels("var").unwrap(), Cow::Borrowed(_)));
        assert_eq!(data.labels("var").unwrap()[2], "z");
        assert_eq!(&data.labels("year").unwrap()[..], &["2019", "2020", "-3.5"]);
        assert!(matches!(data.labels("nope"), Err(PlotError::MissingColumn(_))));
    }

    #[test]
    fn test_deserialize_from_json() {
        let data: Dataset =
            serde_json::from_str(r#"{"b": [1, 2.5], "var": ["age", "income"]}"#).unwrap();
        assert_eq!(data.numeric("b").unwrap(), &[1.0, 2.5]);
        assert_eq!(data.text("var").unwrap()[1], "income");

        let bad = serde_json::from_str::<Dataset>(r#"{"b": [1], "var": ["a", "b"]}"#);
        assert!(bad.is_err());
    }
}
