//! Axes (subplot) implementation.

use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{AxisConfig, Bounds, GridConfig, Legend, LegendPosition, Text};
use crate::plotting::plot::{BarhPlot, Plot, ScatterPlot};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{Color, DashPattern, FillStyle, LineStyle, Marker, ThemeConfig};

/// A full-height vertical line at a fixed x.
#[derive(Debug, Clone)]
pub struct VLine {
    pub x: f64,
    pub style: LineStyle,
}

/// An axes object representing a single plot area.
pub struct Axes {
    /// Position within figure (normalized coordinates)
    pub position: Bounds,
    pub x_scale: Box<dyn Scale>,
    pub y_scale: Box<dyn Scale>,
    plots: Vec<Box<dyn Plot>>,
    vlines: Vec<VLine>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    pub legend: Option<Legend>,
    pub grid: GridConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    /// Union of the bounds of every plot added so far
    data_bounds: Option<Bounds>,
    x_lim: Option<(f64, f64)>,
    color_index: usize,
    pub theme: ThemeConfig,
}

impl Axes {
    pub fn new() -> Self {
        Axes::with_theme(ThemeConfig::default())
    }

    /// Create an axes styled by `theme`.
    pub fn with_theme(theme: ThemeConfig) -> Self {
        let mut x_axis = AxisConfig::default();
        x_axis.line_style.color = theme.axis_color.clone();
        x_axis.tick_label_style = theme.tick_style.clone();
        let y_axis = x_axis.clone();
        let grid = GridConfig::new()
            .color(theme.grid_color.clone())
            .opacity(theme.grid_opacity);

        Axes {
            position: Bounds::new(0.1, 0.9, 0.1, 0.9),
            x_scale: Box::new(LinearScale::auto()),
            y_scale: Box::new(LinearScale::auto()),
            plots: Vec::new(),
            vlines: Vec::new(),
            x_label: None,
            y_label: None,
            legend: None,
            grid: GridConfig {
                visible: theme.show_grid,
                ..grid
            },
            x_axis,
            y_axis,
            data_bounds: None,
            x_lim: None,
            color_index: 0,
            theme,
        }
    }

    /// Add a scatter plot.
    pub fn scatter(
        &mut self,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
    ) -> ScatterPlotBuilder<'_> {
        ScatterPlotBuilder {
            axes: self,
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            color: None,
            marker: None,
            label: None,
        }
    }

    /// Add horizontal bars of length `width` centered at `y`.
    pub fn barh(&mut self, y: impl IntoPlotData, width: impl IntoPlotData) -> BarhPlotBuilder<'_> {
        BarhPlotBuilder {
            axes: self,
            y: y.into_plot_data(),
            width: width.into_plot_data(),
            fill: None,
            xerr: None,
            height: None,
        }
    }

    /// Draw a vertical line across the whole plot area at `x`.
    pub fn axvline(&mut self, x: f64, style: LineStyle) -> &mut Self {
        self.vlines.push(VLine { x, style });
        self
    }

    /// Dashed black reference line at x = 0.
    pub fn zero_line(&mut self) -> &mut Self {
        let style = LineStyle::new()
            .color(Color::BLACK)
            .width(1.0)
            .dash(DashPattern::Dashed);
        self.axvline(0.0, style)
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_lim = Some((min, max));
        self
    }

    /// Pin the y ticks to `positions`, labelled with `labels`.
    pub fn set_yticks(&mut self, positions: Vec<f64>, labels: Vec<String>) -> &mut Self {
        self.y_axis.set_ticks(positions, labels);
        self
    }

    /// Show the legend.
    pub fn legend(&mut self) -> &mut Self {
        match self.legend {
            Some(ref mut legend) => legend.visible = true,
            None => self.legend = Some(Legend::new()),
        }
        self
    }

    /// Show the legend at a specific corner.
    pub fn legend_at(&mut self, position: LegendPosition) -> &mut Self {
        self.legend();
        if let Some(ref mut legend) = self.legend {
            legend.position = position;
        }
        self
    }

    /// List legend entries last-added first.
    pub fn reverse_legend(&mut self) -> &mut Self {
        if let Some(ref mut legend) = self.legend {
            legend.reversed = true;
        }
        self
    }

    pub fn plots(&self) -> &[Box<dyn Plot>] {
        &self.plots
    }

    pub fn vlines(&self) -> &[VLine] {
        &self.vlines
    }

    pub(crate) fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            match self.data_bounds {
                Some(ref mut bounds) => bounds.include_bounds(&plot_bounds),
                None => self.data_bounds = Some(plot_bounds),
            }
        }

        // labelled plots register a hidden legend entry until legend() is called
        if let Some(entry) = plot.legend_entry() {
            self.legend
                .get_or_insert_with(|| Legend::new().visible(false))
                .add_entry(entry);
        }

        self.plots.push(plot);
    }

    /// Next color from the theme's cycle.
    pub(crate) fn next_color(&mut self) -> Color {
        let cycle = &self.theme.color_cycle;
        let color = if cycle.is_empty() {
            Color::default()
        } else {
            cycle[self.color_index % cycle.len()].clone()
        };
        self.color_index += 1;
        color
    }

    /// Effective x range: manual limits, else the data extent widened to
    /// cover any vertical lines.
    pub fn x_range(&self) -> (f64, f64) {
        if let Some(lim) = self.x_lim {
            return lim;
        }
        let mut range = self.data_bounds.map(|b| (b.x_min, b.x_max));
        for vline in &self.vlines {
            range = Some(widen(range, vline.x));
        }
        range.unwrap_or((0.0, 1.0))
    }

    /// Effective y range: the data extent widened to cover any pinned ticks.
    pub fn y_range(&self) -> (f64, f64) {
        let mut range = self.data_bounds.map(|b| (b.y_min, b.y_max));
        if let Some(ref ticks) = self.y_axis.tick_positions {
            for &t in ticks {
                range = Some(widen(range, t));
            }
        }
        range.unwrap_or((0.0, 1.0))
    }

    /// Render the axes to SVG.
    pub fn render_svg(&mut self, figure_width: f64, figure_height: f64) -> String {
        let mut svg = String::new();

        let pixel_bounds = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );

        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        let mut data_bounds = Bounds::new(x_min, x_max, y_min, y_max);
        if data_bounds.width() == 0.0 {
            data_bounds.x_min -= 0.5;
            data_bounds.x_max += 0.5;
        }
        if data_bounds.height() == 0.0 {
            data_bounds.y_min -= 0.5;
            data_bounds.y_max += 0.5;
        }
        let data_bounds = data_bounds.pad(0.05);

        self.x_scale.set_range(data_bounds.x_min, data_bounds.x_max);
        self.y_scale.set_range(data_bounds.y_min, data_bounds.y_max);

        let x_ticks = self.x_axis.resolve_ticks(|n| self.x_scale.ticks(n));
        let y_ticks = self.y_axis.resolve_ticks(|n| self.y_scale.ticks(n));

        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
            self.theme.plot_background.to_svg_string()
        ));

        if self.grid.visible {
            let mut segments = Vec::new();
            if self.grid.show_x {
                for (tick, _) in &x_ticks {
                    let (px, _) = data_bounds.to_pixel(&pixel_bounds, *tick, data_bounds.y_min);
                    segments.push((px, pixel_bounds.y_min, px, pixel_bounds.y_max));
                }
            }
            if self.grid.show_y {
                for (tick, _) in &y_ticks {
                    let (_, py) = data_bounds.to_pixel(&pixel_bounds, data_bounds.x_min, *tick);
                    segments.push((pixel_bounds.x_min, py, pixel_bounds.x_max, py));
                }
            }
            svg.push_str(&self.grid.render_lines(&segments));
        }

        // plots are clipped to the plot area
        let clip_id = format!("plot-clip-{:.0}-{:.0}", pixel_bounds.x_min, pixel_bounds.y_min);
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id,
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height()
        ));
        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        for plot in &self.plots {
            svg.push_str(&plot.render_svg(&data_bounds, &pixel_bounds));
        }
        for vline in &self.vlines {
            let (px, _) = data_bounds.to_pixel(&pixel_bounds, vline.x, data_bounds.y_min);
            svg.push_str(&format!(
                "<line class=\"vline\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                px,
                pixel_bounds.y_min,
                px,
                pixel_bounds.y_max,
                vline.style.to_svg_style()
            ));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_axes(&pixel_bounds, &data_bounds, &x_ticks, &y_ticks));

        let mid_x = (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0;
        let mid_y = (pixel_bounds.y_min + pixel_bounds.y_max) / 2.0;
        if let Some(ref label) = self.x_label {
            svg.push_str(&label.centered_at(mid_x, pixel_bounds.y_max + 40.0).to_svg());
        }
        if let Some(ref label) = self.y_label {
            let mut t = label.centered_at(pixel_bounds.x_min - 60.0, mid_y);
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg());
        }

        if let Some(ref legend) = self.legend
            && legend.visible
            && !legend.entries.is_empty()
        {
            svg.push_str(&legend.render_svg(&pixel_bounds));
        }

        svg
    }

    fn render_axes(
        &self,
        pixel_bounds: &Bounds,
        data_bounds: &Bounds,
        x_ticks: &[(f64, String)],
        y_ticks: &[(f64, String)],
    ) -> String {
        let mut svg = String::new();

        if self.x_axis.visible {
            let axis = &self.x_axis;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel_bounds.x_min,
                pixel_bounds.y_max,
                pixel_bounds.x_max,
                pixel_bounds.y_max,
                axis.line_style.to_svg_style()
            ));
            if axis.show_ticks {
                for (tick, label) in x_ticks {
                    let (px, _) = data_bounds.to_pixel(pixel_bounds, *tick, data_bounds.y_min);
                    let tick_end = pixel_bounds.y_max + axis.tick_length;
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                        px,
                        pixel_bounds.y_max,
                        px,
                        tick_end,
                        axis.line_style.color.to_svg_string()
                    ));
                    svg.push_str(&format!(
                        "<text class=\"xtick\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" {}>{}</text>\n",
                        px,
                        tick_end + axis.tick_padding + axis.tick_label_style.font_size,
                        axis.tick_label_style.to_svg_attrs(),
                        crate::plotting::element::escape_xml(label)
                    ));
                }
            }
        }

        if self.y_axis.visible {
            let axis = &self.y_axis;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel_bounds.x_min,
                pixel_bounds.y_min,
                pixel_bounds.x_min,
                pixel_bounds.y_max,
                axis.line_style.to_svg_style()
            ));
            if axis.show_ticks {
                for (tick, label) in y_ticks {
                    let (_, py) = data_bounds.to_pixel(pixel_bounds, data_bounds.x_min, *tick);
                    let tick_start = pixel_bounds.x_min - axis.tick_length;
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                        tick_start,
                        py,
                        pixel_bounds.x_min,
                        py,
                        axis.line_style.color.to_svg_string()
                    ));
                    svg.push_str(&format!(
                        "<text class=\"ytick\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\" {}>{}</text>\n",
                        tick_start - axis.tick_padding,
                        py,
                        axis.tick_label_style.to_svg_attrs(),
                        crate::plotting::element::escape_xml(label)
                    ));
                }
            }
        }

        svg
    }
}

fn widen(range: Option<(f64, f64)>, v: f64) -> (f64, f64) {
    match range {
        Some((lo, hi)) => (lo.min(v), hi.max(v)),
        None => (v, v),
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for scatter plots.
pub struct ScatterPlotBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    marker: Option<Marker>,
    label: Option<String>,
}

impl<'a> ScatterPlotBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        let size = self.axes.theme.marker_size;

        let mut plot = ScatterPlot::new(self.x, self.y).color(color).size(size);
        if let Some(marker) = self.marker {
            plot = plot.marker(marker);
        }
        if let Some(label) = self.label {
            plot = plot.label(label);
        }

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

/// Builder for horizontal bar plots.
pub struct BarhPlotBuilder<'a> {
    axes: &'a mut Axes,
    y: Vec<f64>,
    width: Vec<f64>,
    fill: Option<FillStyle>,
    xerr: Option<Vec<f64>>,
    height: Option<f64>,
}

impl<'a> BarhPlotBuilder<'a> {
    pub fn fill(mut self, fill: FillStyle) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn xerr(mut self, xerr: impl IntoPlotData) -> Self {
        self.xerr = Some(xerr.into_plot_data());
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let fill = self
            .fill
            .unwrap_or_else(|| FillStyle::new(self.axes.next_color()));

        let mut plot = BarhPlot::new(self.y, self.width).fill(fill);
        if let Some(xerr) = self.xerr {
            plot = plot.xerr(xerr);
        }
        if let Some(height) = self.height {
            plot = plot.height(height);
        }

        self.axes.add_plot(Box::new(plot));
        self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_line_extends_x_range() {
        let mut ax = Axes::new();
        ax.scatter([1.0, 2.0], [0.0, 1.0]).build();
        assert_eq!(ax.x_range(), (1.0, 2.0));
        ax.zero_line();
        assert_eq!(ax.x_range(), (0.0, 2.0));
        assert_eq!(ax.vlines().len(), 1);
        assert_eq!(ax.vlines()[0].style.dash, DashPattern::Dashed);
    }

    #[test]
    fn test_labelled_plots_feed_hidden_legend() {
        let mut ax = Axes::new();
        ax.scatter([0.0], [0.0]).label("a").build();
        ax.scatter([1.0], [1.0]).label("b").build();
        let legend = ax.legend.as_ref().unwrap();
        assert!(!legend.visible);
        assert_eq!(legend.entries.len(), 2);

        ax.legend().reverse_legend();
        let legend = ax.legend.as_ref().unwrap();
        assert!(legend.visible);
        assert_eq!(legend.display_entries()[0].label, "b");
    }

    #[test]
    fn test_pinned_ticks_render_labels() {
        let mut ax = Axes::new();
        ax.scatter([0.5], [0.0]).build();
        ax.set_yticks(vec![0.0, 2.0], vec!["g1".into(), "g2".into()]);
        assert_eq!(ax.y_range(), (0.0, 2.0));
        let svg = ax.render_svg(800.0, 600.0);
        assert!(svg.contains(">g1</text>"));
        assert!(svg.contains(">g2</text>"));
    }

    #[test]
    fn test_colors_cycle_through_theme() {
        let mut ax = Axes::new();
        let first = ax.next_color();
        for _ in 0..9 {
            ax.next_color();
        }
        assert_eq!(ax.next_color(), first);
    }
}
