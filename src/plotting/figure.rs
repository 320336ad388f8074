//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{Bounds, escape_xml};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{Color, FillStyle, Theme, ThemeConfig};

/// Pixels per inch used when a figure is sized in inches.
pub const DEFAULT_DPI: f64 = 100.0;

/// A figure containing one or more axes (subplots).
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    pub background: Color,
    axes: Vec<Axes>,
    pub theme: ThemeConfig,
    /// Figure-level title
    pub title: Option<String>,
}

impl Figure {
    /// Create a new figure with the given pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        let theme = Theme::Default.config();
        Figure {
            width,
            height,
            background: theme.background.clone(),
            axes: Vec::new(),
            theme,
            title: None,
        }
    }

    /// Create a figure sized in inches, matplotlib `figsize` style.
    pub fn from_inches(width: f64, height: f64, dpi: f64) -> PlotResult<Self> {
        if !(width > 0.0 && height > 0.0 && dpi > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "figure size must be positive, got {}x{} in at {} dpi",
                width, height, dpi
            )));
        }
        Ok(Figure::new(width * dpi, height * dpi))
    }

    /// Set the theme for the figure and every axes in it.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme.config();
        self.background = self.theme.background.clone();
        for ax in &mut self.axes {
            ax.theme = self.theme.clone();
        }
        self
    }

    pub fn suptitle(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the plot area, creating it on first use. The wide left margin
    /// leaves room for categorical tick labels.
    pub fn gca(&mut self) -> &mut Axes {
        if self.axes.is_empty() {
            let mut axes = Axes::with_theme(self.theme.clone());
            axes.position = Bounds::new(0.15, 0.94, 0.08, 0.9);
            self.axes.push(axes);
        }
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Render the figure to an SVG string.
    pub fn render(&mut self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);
        backend.draw_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            &FillStyle::new(self.background.clone()),
        );

        if let Some(ref title) = self.title {
            backend.add_content(format!(
                "<text x=\"{:.2}\" y=\"24\" text-anchor=\"middle\" {}>{}</text>",
                self.width / 2.0,
                self.theme.title_style.to_svg_attrs(),
                escape_xml(title)
            ));
        }

        for axes in &mut self.axes {
            backend.add_content(axes.render_svg(self.width, self.height));
        }

        backend.render()
    }

    /// Render and write the figure to `path` as SVG.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render();
        let mut file = File::create(path.as_ref())?;
        file.write_all(svg.as_bytes())?;
        info!("Saved plot: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new(800.0, 600.0)
    }
}
