//! Turns a dataset and a plot request into a layout and a figure.

use log::debug;

use crate::plotting::{DEFAULT_DPI, Figure, PlotError, PlotResult, Theme};

use super::dataset::{Column, Dataset};
use super::layout::{DotplotLayout, MarkSeries};
use super::offsets::offset_grid;
use super::order::{
    ascending_by_value, descending_by_text, descending_by_value, distinct_in_order, identity_order,
};
use super::request::{GroupedPlotRequest, SimplePlotRequest, SortMode};
use super::symbols::SymbolCycle;

/// Spacing between neighbouring groups on the categorical axis.
const GROUP_SPACING: f64 = 2.0;

/// Coefficient plots over a borrowed dataset.
///
/// ```
/// use coefplot::dotplot::{CoefPlot, Dataset, SimplePlotRequest};
///
/// let data = Dataset::new()
///     .with_column("b", vec![0.5, -0.3, 0.1]).unwrap()
///     .with_column("se", vec![0.1, 0.2, 0.05]).unwrap()
///     .with_column("var", vec!["x", "y", "z"]).unwrap();
///
/// let request = SimplePlotRequest::new("b", "var").err("se").zero_line(true);
/// let mut fig = CoefPlot::new(&data).simple_dotplot(&request).unwrap();
/// assert!(fig.render().contains("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct CoefPlot<'a> {
    data: &'a Dataset,
    symbols: SymbolCycle,
    theme: Theme,
    dpi: f64,
}

impl<'a> CoefPlot<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        CoefPlot {
            data,
            symbols: SymbolCycle::default(),
            theme: Theme::Default,
            dpi: DEFAULT_DPI,
        }
    }

    /// Marker/color pairs for grouped plots.
    pub fn with_symbols(mut self, symbols: SymbolCycle) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Pixels per inch of the canvas.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Lay out a simple dot plot: one dot per row, variables on the
    /// categorical axis.
    pub fn simple_layout(&self, request: &SimplePlotRequest) -> PlotResult<DotplotLayout> {
        let coef = self.data.numeric(&request.coef)?;
        let names = self.data.labels(&request.varname)?;
        let err = self.error_column(request.err.as_deref())?;
        if self.data.is_empty() {
            return Err(PlotError::EmptyData);
        }

        let order = match request.sort_mode() {
            SortMode::None => identity_order(coef.len()),
            SortMode::VariableDescending => self.descending_rows(&request.varname)?,
            SortMode::CoefficientAscending => ascending_by_value(coef),
        };

        // categories sit at 0, 1, 2, ... in order of first appearance
        let categories = distinct_in_order(&names, &order);
        let position = |row: usize| {
            categories
                .get_index_of(names[row].as_str())
                .unwrap_or(0) as f64
        };

        let series = MarkSeries {
            label: None,
            symbol: None,
            x: order.iter().map(|&i| coef[i]).collect(),
            y: order.iter().map(|&i| position(i)).collect(),
            err: err.map(|e| order.iter().map(|&i| e[i]).collect()),
            rows: order,
        };
        let y_ticks = categories
            .iter()
            .enumerate()
            .map(|(i, name)| (i as f64, name.to_string()))
            .collect();

        debug!(
            "Simple dot plot: {} rows, {} categories",
            series.len(),
            categories.len()
        );

        Ok(DotplotLayout {
            size: request.size,
            series: vec![series],
            y_ticks,
            zero_line: request.zero_line,
            legend: false,
        })
    }

    /// Lay out a grouped dot plot: groups on the categorical axis, one
    /// series per variable, fanned out around each group position.
    pub fn grouped_layout(&self, request: &GroupedPlotRequest) -> PlotResult<DotplotLayout> {
        let coef = self.data.numeric(&request.coef)?;
        let names = self.data.labels(&request.varname)?;
        let groups = self.data.labels(&request.group)?;
        let err = self.error_column(request.err.as_deref())?;
        if self.data.is_empty() {
            return Err(PlotError::EmptyData);
        }

        let order = if request.sort_by_group {
            self.descending_rows(&request.group)?
        } else {
            identity_order(coef.len())
        };

        let variables = distinct_in_order(&names, &order);
        let group_names = distinct_in_order(&groups, &order);
        self.symbols.ensure_capacity(variables.len())?;
        let offsets = offset_grid(variables.len());

        let mut series = Vec::with_capacity(variables.len());
        for (ivar, var) in variables.iter().enumerate() {
            let rows: Vec<usize> = order.iter().copied().filter(|&i| names[i] == *var).collect();
            let y = rows
                .iter()
                .map(|&i| {
                    let group_index = group_names.get_index_of(groups[i].as_str()).unwrap_or(0);
                    GROUP_SPACING * group_index as f64 + offsets[ivar]
                })
                .collect();

            series.push(MarkSeries {
                label: Some(var.to_string()),
                symbol: self.symbols.get(ivar).cloned(),
                x: rows.iter().map(|&i| coef[i]).collect(),
                y,
                err: err.map(|e| rows.iter().map(|&i| e[i]).collect()),
                rows,
            });
        }

        let y_ticks = group_names
            .iter()
            .enumerate()
            .map(|(i, name)| (GROUP_SPACING * i as f64, name.to_string()))
            .collect();

        debug!(
            "Grouped dot plot: {} variables across {} groups, offsets {:?}",
            variables.len(),
            group_names.len(),
            offsets
        );

        Ok(DotplotLayout {
            size: request.size,
            series,
            y_ticks,
            zero_line: request.zero_line,
            legend: true,
        })
    }

    /// Draw a simple dot plot on a new figure.
    pub fn simple_dotplot(&self, request: &SimplePlotRequest) -> PlotResult<Figure> {
        let layout = self.simple_layout(request)?;
        self.render(&layout)
    }

    /// Draw a grouped dot plot on a new figure.
    pub fn grouped_dotplot(&self, request: &GroupedPlotRequest) -> PlotResult<Figure> {
        let layout = self.grouped_layout(request)?;
        self.render(&layout)
    }

    /// Draw `layout` on a new figure of the layout's size.
    pub fn render(&self, layout: &DotplotLayout) -> PlotResult<Figure> {
        let (width, height) = layout.size;
        let mut fig = Figure::from_inches(width, height, self.dpi)?.theme(self.theme);
        layout.draw(fig.gca());
        Ok(fig)
    }

    /// Rows ordered by column `name` descending: numerically for numeric
    /// columns, lexically for text.
    fn descending_rows(&self, name: &str) -> PlotResult<Vec<usize>> {
        Ok(match self.data.column(name)? {
            Column::Numeric(values) => descending_by_value(values),
            Column::Text(keys) => descending_by_text(keys),
        })
    }

    /// Error magnitudes, validated to be finite and non-negative.
    fn error_column(&self, name: Option<&str>) -> PlotResult<Option<&'a [f64]>> {
        let Some(name) = name else {
            return Ok(None);
        };
        let values = self.data.numeric(name)?;
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(PlotError::InvalidData(format!(
                "error column '{}' contains invalid value {}",
                name, bad
            )));
        }
        Ok(Some(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::{Color, Marker};

    fn simple_data() -> Dataset {
        Dataset::new()
            .with_column("b", vec![0.5, -0.3, 0.1])
            .unwrap()
            .with_column("se", vec![0.1, 0.2, 0.05])
            .unwrap()
            .with_column("var", vec!["x", "y", "z"])
            .unwrap()
    }

    /// Two models, three variables each.
    fn grouped_data() -> Dataset {
        Dataset::new()
            .with_column("b", vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6])
            .unwrap()
            .with_column("se", vec![0.01, 0.02, 0.03, 0.04, 0.05, 0.06])
            .unwrap()
            .with_column("var", vec!["age", "edu", "inc", "age", "edu", "inc"])
            .unwrap()
            .with_column("model", vec!["m1", "m1", "m1", "m2", "m2", "m2"])
            .unwrap()
    }

    fn labels(layout: &DotplotLayout) -> Vec<&str> {
        layout.y_ticks.iter().map(|(_, l)| l.as_str()).collect()
    }

    #[test]
    fn test_simple_input_order() {
        let data = simple_data();
        let layout = CoefPlot::new(&data)
            .simple_layout(&SimplePlotRequest::new("b", "var"))
            .unwrap();
        assert_eq!(layout.series.len(), 1);
        assert_eq!(layout.series[0].rows, vec![0, 1, 2]);
        assert_eq!(layout.series[0].y, vec![0.0, 1.0, 2.0]);
        assert_eq!(labels(&layout), vec!["x", "y", "z"]);
        assert!(!layout.legend);
        assert!(layout.series[0].err.is_none());
    }

    #[test]
    fn test_simple_sort_by_coef() {
        let data = simple_data();
        let req = SimplePlotRequest::new("b", "var").sort_by_coef(true);
        let layout = CoefPlot::new(&data).simple_layout(&req).unwrap();
        assert_eq!(layout.series[0].x, vec![-0.3, 0.1, 0.5]);
        assert_eq!(labels(&layout), vec!["y", "z", "x"]);
    }

    #[test]
    fn test_simple_sort_by_var() {
        let data = simple_data();
        let req = SimplePlotRequest::new("b", "var").sort_by_var(true);
        let layout = CoefPlot::new(&data).simple_layout(&req).unwrap();
        assert_eq!(layout.series[0].rows, vec![2, 1, 0]);
        assert_eq!(labels(&layout), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_simple_conflicting_sorts_keep_input_order() {
        let data = simple_data();
        let req = SimplePlotRequest::new("b", "var")
            .sort_by_var(true)
            .sort_by_coef(true);
        let layout = CoefPlot::new(&data).simple_layout(&req).unwrap();
        assert_eq!(layout.series[0].rows, vec![0, 1, 2]);
        assert_eq!(labels(&layout), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_simple_errors_follow_sorted_rows() {
        let data = simple_data();
        let req = SimplePlotRequest::new("b", "var").err("se").sort_by_coef(true);
        let layout = CoefPlot::new(&data).simple_layout(&req).unwrap();
        assert_eq!(layout.series[0].err, Some(vec![0.2, 0.05, 0.1]));
    }

    #[test]
    fn test_simple_repeated_names_share_a_row() {
        let data = Dataset::new()
            .with_column("b", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_column("var", vec!["a", "b", "a"])
            .unwrap();
        let layout = CoefPlot::new(&data)
            .simple_layout(&SimplePlotRequest::new("b", "var"))
            .unwrap();
        assert_eq!(layout.series[0].y, vec![0.0, 1.0, 0.0]);
        assert_eq!(layout.mark_count(), 3);
        assert_eq!(labels(&layout), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let data = simple_data();
        let err = CoefPlot::new(&data)
            .simple_layout(&SimplePlotRequest::new("beta", "var"))
            .unwrap_err();
        assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "beta"));

        let err = CoefPlot::new(&data)
            .simple_layout(&SimplePlotRequest::new("b", "var").err("stderr"))
            .unwrap_err();
        assert!(matches!(err, PlotError::MissingColumn(ref c) if c == "stderr"));
    }

    #[test]
    fn test_negative_errors_rejected() {
        let data = Dataset::new()
            .with_column("b", vec![1.0])
            .unwrap()
            .with_column("se", vec![-0.1])
            .unwrap()
            .with_column("var", vec!["a"])
            .unwrap();
        let err = CoefPlot::new(&data)
            .simple_layout(&SimplePlotRequest::new("b", "var").err("se"))
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::new()
            .with_column("b", Vec::<f64>::new())
            .unwrap()
            .with_column("var", Vec::<String>::new())
            .unwrap()
            .with_column("g", Vec::<String>::new())
            .unwrap();
        let plot = CoefPlot::new(&data);
        assert!(matches!(
            plot.simple_layout(&SimplePlotRequest::new("b", "var")),
            Err(PlotError::EmptyData)
        ));
        assert!(matches!(
            plot.grouped_layout(&GroupedPlotRequest::new("b", "var", "g")),
            Err(PlotError::EmptyData)
        ));
    }

    #[test]
    fn test_grouped_positions_and_symbols() {
        let data = grouped_data();
        let req = GroupedPlotRequest::new("b", "var", "model");
        let layout = CoefPlot::new(&data).grouped_layout(&req).unwrap();

        assert_eq!(layout.series.len(), 3);
        assert_eq!(labels(&layout), vec!["m1", "m2"]);
        assert_eq!(layout.y_ticks[1].0, 2.0);
        assert!(layout.legend);

        let age = &layout.series[0];
        assert_eq!(age.label.as_deref(), Some("age"));
        assert_eq!(age.rows, vec![0, 3]);
        assert_eq!(age.y, vec![-0.25, 1.75]);
        assert_eq!(
            age.symbol.as_ref().map(|s| (s.marker, s.color.clone())),
            Some((Marker::Square, Color::from("b")))
        );

        let edu = &layout.series[1];
        assert_eq!(edu.y, vec![0.0, 2.0]);
        assert_eq!(edu.symbol.as_ref().unwrap().marker, Marker::Circle);

        let inc = &layout.series[2];
        assert_eq!(inc.y, vec![0.25, 2.25]);
        assert_eq!(inc.symbol.as_ref().unwrap().color, Color::from("r"));
    }

    #[test]
    fn test_grouped_sort_by_group_descending() {
        let data = grouped_data();
        let req = GroupedPlotRequest::new("b", "var", "model").sort_by_group(true);
        let layout = CoefPlot::new(&data).grouped_layout(&req).unwrap();
        assert_eq!(labels(&layout), vec!["m2", "m1"]);
        // m2 rows come first and sit at position 0
        assert_eq!(layout.series[0].rows, vec![3, 0]);
        assert_eq!(layout.series[0].x, vec![0.4, 0.1]);
        assert_eq!(layout.series[0].y, vec![-0.25, 1.75]);
    }

    #[test]
    fn test_grouped_missing_group_stays_aligned() {
        let data = Dataset::new()
            .with_column("b", vec![0.1, 0.2, 0.3])
            .unwrap()
            .with_column("var", vec!["a", "b", "b"])
            .unwrap()
            .with_column("g", vec!["g2", "g1", "g2"])
            .unwrap();
        let layout = CoefPlot::new(&data)
            .grouped_layout(&GroupedPlotRequest::new("b", "var", "g"))
            .unwrap();
        assert_eq!(labels(&layout), vec!["g2", "g1"]);
        // "a" only appears in g2, which is the first group
        assert_eq!(layout.series[0].y, vec![-0.25]);
        assert_eq!(layout.series[1].y, vec![2.25, 0.25]);
    }

    #[test]
    fn test_numeric_label_columns() {
        let data = Dataset::new()
            .with_column("b", vec![0.1, 0.2, 0.3, 0.4])
            .unwrap()
            .with_column("lag", vec![1.0, 2.0, 1.0, 2.0])
            .unwrap()
            .with_column("year", vec![2019.0, 2019.0, 2020.0, 2020.0])
            .unwrap();
        let plot = CoefPlot::new(&data);

        let layout = plot
            .grouped_layout(&GroupedPlotRequest::new("b", "lag", "year"))
            .unwrap();
        assert_eq!(labels(&layout), vec!["2019", "2020"]);
        assert_eq!(layout.series[0].label.as_deref(), Some("1"));
        assert_eq!(layout.series[0].y, vec![-0.25, 1.75]);

        let sorted = plot
            .grouped_layout(&GroupedPlotRequest::new("b", "lag", "year").sort_by_group(true))
            .unwrap();
        assert_eq!(labels(&sorted), vec!["2020", "2019"]);

        let simple = plot
            .simple_layout(&SimplePlotRequest::new("b", "lag").sort_by_var(true))
            .unwrap();
        assert_eq!(labels(&simple), vec!["2", "1"]);
        assert_eq!(simple.series[0].rows, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_numeric_variables_sort_by_value_not_text() {
        let data = Dataset::new()
            .with_column("b", vec![0.1, 0.2, 0.3])
            .unwrap()
            .with_column("lag", vec![9.0, 10.0, 2.0])
            .unwrap();
        let layout = CoefPlot::new(&data)
            .simple_layout(&SimplePlotRequest::new("b", "lag").sort_by_var(true))
            .unwrap();
        assert_eq!(labels(&layout), vec!["10", "9", "2"]);
    }

    #[test]
    fn test_grouped_error_extents() {
        let data = grouped_data();
        let req = GroupedPlotRequest::new("b", "var", "model").err("se");
        let layout = CoefPlot::new(&data).grouped_layout(&req).unwrap();
        for series in &layout.series {
            let err = series.err.as_ref().unwrap();
            for ((lo, hi), (x, e)) in series
                .error_extents()
                .unwrap()
                .into_iter()
                .zip(series.x.iter().zip(err))
            {
                assert!((x - lo - e).abs() < 1e-12);
                assert!((hi - x - e).abs() < 1e-12);
            }
        }
        assert_eq!(layout.series[2].err, Some(vec![0.03, 0.06]));
    }

    #[test]
    fn test_grouped_eight_variables_exhaust_default_symbols() {
        let names: Vec<String> = (0..8).map(|i| format!("v{}", i)).collect();
        let data = Dataset::new()
            .with_column("b", vec![0.0; 8])
            .unwrap()
            .with_column("var", names)
            .unwrap()
            .with_column("g", vec!["g"; 8])
            .unwrap();
        let req = GroupedPlotRequest::new("b", "var", "g");

        let err = CoefPlot::new(&data).grouped_layout(&req).unwrap_err();
        assert!(matches!(err, PlotError::SymbolsExhausted { needed: 8, available: 7 }));
        assert!(CoefPlot::new(&data).grouped_dotplot(&req).is_err());

        let cycle = SymbolCycle::from_format("sox^vD+*", "bgrcmykb").unwrap();
        let layout = CoefPlot::new(&data).with_symbols(cycle).grouped_layout(&req).unwrap();
        assert_eq!(layout.series.len(), 8);
        assert_eq!(layout.series[0].y, vec![-1.0]);
        assert_eq!(layout.series[7].y, vec![1.0]);
    }

    #[test]
    fn test_figure_size_follows_request() {
        let data = simple_data();
        let req = SimplePlotRequest::new("b", "var").size(4.0, 3.0);
        let fig = CoefPlot::new(&data).with_dpi(50.0).simple_dotplot(&req).unwrap();
        assert_eq!((fig.width, fig.height), (200.0, 150.0));
        assert_eq!(fig.axes().len(), 1);
    }
}
