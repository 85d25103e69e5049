//! Raw text behind the window's entry fields.
//!
//! Text is kept exactly as typed and only parsed when a button is pressed.

use std::fmt;

use eg_core::parse_number;
use eg_figure::{BjtParams, CurveStyle, FigureResult};

/// Which figure the Generate button builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    CustomPlot,
    #[default]
    BjtLoadLine,
}

impl GraphKind {
    pub const ALL: [GraphKind; 2] = [GraphKind::CustomPlot, GraphKind::BjtLoadLine];

    pub fn label(self) -> &'static str {
        match self {
            GraphKind::CustomPlot => "Custom Plot",
            GraphKind::BjtLoadLine => "BJT Load Line",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveForm {
    pub name: String,
    /// Comma-separated
    pub x_values: String,
    /// Comma-separated
    pub y_values: String,
    pub style: CurveStyle,
}

impl CurveForm {
    /// Empty the text fields after a successful add. The style stays selected.
    pub fn clear_entries(&mut self) {
        self.name.clear();
        self.x_values.clear();
        self.y_values.clear();
    }
}

/// The five load-line inputs. IB is entered in microamperes.
#[derive(Debug, Clone, PartialEq)]
pub struct BjtForm {
    pub vcc: String,
    pub rc: String,
    pub re: String,
    pub ib_ua: String,
    pub beta: String,
}

impl Default for BjtForm {
    fn default() -> Self {
        Self {
            vcc: "22".to_string(),
            rc: "10000".to_string(),
            re: "1500".to_string(),
            ib_ua: "5.96".to_string(),
            beta: "178".to_string(),
        }
    }
}

impl BjtForm {
    pub fn parse(&self) -> FigureResult<BjtParams> {
        BjtParams::new(
            parse_number(&self.vcc, "VCC")?,
            parse_number(&self.rc, "RC")?,
            parse_number(&self.re, "RE")?,
            parse_number(&self.ib_ua, "IB")?,
            parse_number(&self.beta, "beta")?,
        )
    }
}
