//! Plot job files.
//!
//! A job bundles the data table, the plot request and the rendering
//! options into one JSON document:
//!
//! ```json
//! {
//!   "data": { "b": [0.5, -0.3], "se": [0.1, 0.2], "var": ["x", "y"] },
//!   "plot": { "kind": "simple", "coef": "b", "varname": "var", "err": "se" },
//!   "render": { "theme": "minimal", "dpi": 100, "title": "Model 1" }
//! }
//! ```

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use crate::dotplot::{
    CoefPlot, Dataset, GroupedPlotRequest, SimplePlotRequest, SymbolCycle, SymbolSpec,
};
use crate::plotting::{DEFAULT_DPI, Figure, LegendPosition, PlotResult, Theme};

// ============================================================================
// Plot Request
// ============================================================================

/// Which kind of dot plot to draw, with its request fields inline.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlotSpec {
    Simple(SimplePlotRequest),
    Grouped(GroupedPlotRequest),
}

// ============================================================================
// Rendering Options
// ============================================================================

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    /// Figure title
    #[serde(default)]
    pub title: Option<String>,
    /// Label under the coefficient axis
    #[serde(default)]
    pub xlabel: Option<String>,
    #[serde(default)]
    pub ylabel: Option<String>,
    /// Fixed coefficient-axis limits
    #[serde(default)]
    pub xlim: Option<(f64, f64)>,
    /// Legend corner for grouped plots
    #[serde(default)]
    pub legend: Option<LegendPosition>,
    /// Replacement marker/color sequence for grouped plots
    #[serde(default)]
    pub symbols: Option<Vec<SymbolSpec>>,
}

fn default_dpi() -> f64 {
    DEFAULT_DPI
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            theme: Theme::default(),
            dpi: DEFAULT_DPI,
            title: None,
            xlabel: None,
            ylabel: None,
            xlim: None,
            legend: None,
            symbols: None,
        }
    }
}

// ============================================================================
// Plot Job
// ============================================================================

#[derive(Deserialize, Debug, Clone)]
pub struct PlotJob {
    pub data: Dataset,
    pub plot: PlotSpec,
    #[serde(default)]
    pub render: RenderConfig,
}

impl PlotJob {
    /// Load a plot job from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let job: PlotJob = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(job)
    }

    /// Draw the job's plot on a new figure.
    pub fn run(&self) -> PlotResult<Figure> {
        let mut plot = CoefPlot::new(&self.data)
            .with_theme(self.render.theme)
            .with_dpi(self.render.dpi);
        if let Some(ref specs) = self.render.symbols {
            plot = plot.with_symbols(SymbolCycle::from_specs(specs)?);
        }

        let mut fig = match &self.plot {
            PlotSpec::Simple(request) => plot.simple_dotplot(request)?,
            PlotSpec::Grouped(request) => plot.grouped_dotplot(request)?,
        };

        let ax = fig.gca();
        if let Some(ref xlabel) = self.render.xlabel {
            ax.set_xlabel(xlabel.clone());
        }
        if let Some(ref ylabel) = self.render.ylabel {
            ax.set_ylabel(ylabel.clone());
        }
        if let Some((min, max)) = self.render.xlim {
            ax.set_xlim(min, max);
        }
        if let (PlotSpec::Grouped(_), Some(position)) = (&self.plot, self.render.legend) {
            ax.legend_at(position);
        }
        if let Some(ref title) = self.render.title {
            fig = fig.suptitle(title.clone());
        }
        Ok(fig)
    }
}
