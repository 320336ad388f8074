//! Marker/color pairs assigned to the variables of a grouped plot.

use serde::Deserialize;

use crate::plotting::{Color, Marker, PlotError, PlotResult};

/// Default marker sequence, matplotlib marker characters.
pub const DEFAULT_MARKERS: &str = "sox^vD+";
/// Default color sequence, matplotlib single-letter colors.
pub const DEFAULT_COLORS: &str = "bgrcmyk";

/// How one variable is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub marker: Marker,
    pub color: Color,
}

/// A symbol as written in a job file: `{"marker": "s", "color": "b"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymbolSpec {
    pub marker: char,
    pub color: String,
}

impl TryFrom<&SymbolSpec> for Symbol {
    type Error = PlotError;

    fn try_from(spec: &SymbolSpec) -> PlotResult<Self> {
        let marker = Marker::from_format_char(spec.marker).ok_or_else(|| {
            PlotError::InvalidConfig(format!("unknown marker '{}'", spec.marker))
        })?;
        Ok(Symbol {
            marker,
            color: Color::from(spec.color.as_str()),
        })
    }
}

/// Ordered, fixed-capacity sequence of symbols. Variable `i` gets symbol
/// `i`; there is no wrap-around, so every variable stays distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCycle {
    symbols: Vec<Symbol>,
}

impl SymbolCycle {
    pub fn new(symbols: Vec<Symbol>) -> PlotResult<Self> {
        if symbols.is_empty() {
            return Err(PlotError::InvalidConfig(
                "symbol cycle needs at least one marker/color pair".to_string(),
            ));
        }
        Ok(SymbolCycle { symbols })
    }

    /// Pair up matplotlib marker characters with single-letter colors.
    pub fn from_format(markers: &str, colors: &str) -> PlotResult<Self> {
        let markers: Vec<char> = markers.chars().collect();
        let colors: Vec<char> = colors.chars().collect();
        if markers.len() != colors.len() {
            return Err(PlotError::InvalidConfig(format!(
                "{} markers but {} colors",
                markers.len(),
                colors.len()
            )));
        }
        let specs: Vec<SymbolSpec> = markers
            .into_iter()
            .zip(colors)
            .map(|(marker, color)| SymbolSpec {
                marker,
                color: color.to_string(),
            })
            .collect();
        Self::from_specs(&specs)
    }

    pub fn from_specs(specs: &[SymbolSpec]) -> PlotResult<Self> {
        let symbols = specs
            .iter()
            .map(Symbol::try_from)
            .collect::<PlotResult<Vec<_>>>()?;
        Self::new(symbols)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Append a symbol, raising capacity by one.
    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Fail unless `needed` variables can each get their own symbol.
    pub fn ensure_capacity(&self, needed: usize) -> PlotResult<()> {
        if needed > self.symbols.len() {
            return Err(PlotError::SymbolsExhausted {
                needed,
                available: self.symbols.len(),
            });
        }
        Ok(())
    }
}

impl Default for SymbolCycle {
    fn default() -> Self {
        let symbols = DEFAULT_MARKERS
            .chars()
            .zip(DEFAULT_COLORS.chars())
            .filter_map(|(m, c)| {
                Some(Symbol {
                    marker: Marker::from_format_char(m)?,
                    color: Color::Named(c.to_string()),
                })
            })
            .collect();
        SymbolCycle { symbols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cycle() {
        let cycle = SymbolCycle::default();
        assert_eq!(cycle.len(), 7);
        assert_eq!(cycle.get(0).unwrap().marker, Marker::Square);
        assert_eq!(cycle.get(0).unwrap().color, Color::Named("b".into()));
        assert_eq!(cycle.get(2).unwrap().marker, Marker::Cross);
        assert_eq!(cycle.get(6).unwrap().marker, Marker::Plus);
        assert_eq!(cycle.get(6).unwrap().color, Color::Named("k".into()));
        assert!(cycle.get(7).is_none());
    }

    #[test]
    fn test_capacity() {
        let mut cycle = SymbolCycle::default();
        assert!(cycle.ensure_capacity(7).is_ok());
        assert!(matches!(
            cycle.ensure_capacity(8),
            Err(PlotError::SymbolsExhausted { needed: 8, available: 7 })
        ));
        cycle.push(Symbol {
            marker: Marker::Star,
            color: Color::from("orange"),
        });
        assert!(cycle.ensure_capacity(8).is_ok());
    }

    #[test]
    fn test_from_format_validation() {
        assert_eq!(
            SymbolCycle::from_format(DEFAULT_MARKERS, DEFAULT_COLORS).unwrap(),
            SymbolCycle::default()
        );
        assert!(SymbolCycle::from_format("so", "b").is_err());
        assert!(SymbolCycle::from_format("?", "b").is_err());
        assert!(SymbolCycle::from_format("", "").is_err());
    }
}
