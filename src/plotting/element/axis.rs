//! Axis configuration.

use crate::plotting::style::{Color, LineStyle, TextStyle};

/// Configuration for an axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    pub visible: bool,
    pub line_style: LineStyle,
    pub show_ticks: bool,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    pub tick_label_style: TextStyle,
    /// Number of ticks to generate when no positions are given
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Custom tick labels, paired with `tick_positions`
    pub tick_labels: Option<Vec<String>>,
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the ticks to fixed positions with matching labels.
    pub fn set_ticks(&mut self, positions: Vec<f64>, labels: Vec<String>) {
        self.tick_positions = Some(positions);
        self.tick_labels = Some(labels);
    }

    /// Resolve tick positions and labels, generating them from `auto` when
    /// no custom positions are set.
    pub fn resolve_ticks(&self, auto: impl FnOnce(usize) -> Vec<f64>) -> Vec<(f64, String)> {
        match self.tick_positions {
            Some(ref positions) => {
                let labels: Vec<String> = match self.tick_labels {
                    Some(ref custom) => custom.clone(),
                    None => positions.iter().map(|t| format_tick(*t)).collect(),
                };
                positions.iter().copied().zip(labels).collect()
            }
            None => auto(self.num_ticks)
                .into_iter()
                .map(|t| (t, format_tick(t)))
                .collect(),
        }
    }
}

/// Format a tick value based on its magnitude.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e4 || value.abs() < 1e-3 {
        format!("{:.1e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').to_string()
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            show_ticks: true,
            tick_length: 5.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 7,
            tick_padding: 3.0,
            tick_positions: None,
            tick_labels: None,
        }
    }
}
