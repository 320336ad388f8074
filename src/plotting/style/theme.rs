//! Predefined figure themes.

use serde::Deserialize;

use super::color::Color;
use super::text_style::TextStyle;

/// Predefined plot themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White background with a light grid
    #[default]
    Default,
    /// Gray axes and no grid
    Minimal,
}

/// Theme configuration containing all style settings.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Background color for the figure
    pub background: Color,
    /// Background color for the plot area
    pub plot_background: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub grid_opacity: f64,
    /// Whether new axes show a grid
    pub show_grid: bool,
    pub title_style: TextStyle,
    pub label_style: TextStyle,
    pub tick_style: TextStyle,
    /// Colors handed out to series that do not pick one
    pub color_cycle: Vec<Color>,
    /// Default marker diameter in pixels
    pub marker_size: f64,
}

impl Theme {
    /// Get the configuration for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Default => ThemeConfig::default_theme(),
            Theme::Minimal => ThemeConfig::minimal_theme(),
        }
    }
}

impl ThemeConfig {
    fn default_theme() -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background: Color::WHITE,
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            grid_opacity: 0.8,
            show_grid: true,
            title_style: TextStyle::new().font_size(14.0).bold(),
            label_style: TextStyle::new().font_size(12.0),
            tick_style: TextStyle::new().font_size(10.0),
            color_cycle: tab10(),
            marker_size: 6.0,
        }
    }

    fn minimal_theme() -> Self {
        ThemeConfig {
            axis_color: Color::GRAY,
            grid_opacity: 0.3,
            show_grid: false,
            title_style: TextStyle::new().font_size(13.0).color(Color::DARK_GRAY),
            label_style: TextStyle::new().font_size(11.0).color(Color::GRAY),
            tick_style: TextStyle::new().font_size(9.0).color(Color::GRAY),
            marker_size: 5.0,
            ..Self::default_theme()
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Theme::Default.config()
    }
}

fn tab10() -> Vec<Color> {
    (0..10)
        .map(|i| Color::Named(format!("C{}", i)))
        .collect()
}
