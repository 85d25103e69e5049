//! User-entered X/Y curves for the custom plot.
//!
//! Curves are validated on entry: both value lists must parse and have the
//! same length. A rejected curve never reaches the registry.

use std::fmt;
use std::str::FromStr;

use eg_core::{CoreError, parse_number_list};

use crate::error::{FigureError, FigureResult};

/// How a user curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveStyle {
    #[default]
    Line,
    Scatter,
    LineScatter,
}

impl CurveStyle {
    pub const ALL: [CurveStyle; 3] = [
        CurveStyle::Line,
        CurveStyle::Scatter,
        CurveStyle::LineScatter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CurveStyle::Line => "Line",
            CurveStyle::Scatter => "Scatter",
            CurveStyle::LineScatter => "Line+Scatter",
        }
    }
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CurveStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveStyle::ALL
            .into_iter()
            .find(|style| style.label() == s.trim())
            .ok_or(CoreError::InvalidArg { what: "curve style" })
    }
}

/// A named X/Y data set.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Legend label
    pub name: String,
    pub x_values: Vec<f64>,
    /// Same length as `x_values`
    pub y_values: Vec<f64>,
    pub style: CurveStyle,
}

impl Curve {
    pub fn new(
        name: impl Into<String>,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        style: CurveStyle,
    ) -> FigureResult<Self> {
        if x_values.len() != y_values.len() {
            return Err(FigureError::LengthMismatch {
                x_len: x_values.len(),
                y_len: y_values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            x_values,
            y_values,
            style,
        })
    }

    /// Parse a curve from comma-separated X and Y text.
    pub fn parse(
        name: impl Into<String>,
        x_text: &str,
        y_text: &str,
        style: CurveStyle,
    ) -> FigureResult<Self> {
        let x_values = parse_number_list(x_text, "X values")?;
        let y_values = parse_number_list(y_text, "Y values")?;
        Self::new(name, x_values, y_values, style)
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x_values
            .iter()
            .zip(&self.y_values)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

/// Ordered list of curves for the current session.
#[derive(Debug, Clone, Default)]
pub struct CurveRegistry {
    curves: Vec<Curve>,
}

impl CurveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name given to a curve entered without one.
    pub fn next_default_name(&self) -> String {
        format!("Curve {}", self.curves.len() + 1)
    }

    pub fn add(&mut self, curve: Curve) -> &Curve {
        self.curves.push(curve);
        &self.curves[self.curves.len() - 1]
    }

    /// Validate text input and append the resulting curve.
    ///
    /// A blank `name` gets [`next_default_name`](Self::next_default_name).
    /// On error the registry is left unchanged.
    pub fn add_from_text(
        &mut self,
        name: &str,
        x_text: &str,
        y_text: &str,
        style: CurveStyle,
    ) -> FigureResult<&Curve> {
        let name = if name.trim().is_empty() {
            self.next_default_name()
        } else {
            name.to_string()
        };
        let curve = Curve::parse(name, x_text, y_text, style)?;
        Ok(self.add(curve))
    }

    /// Remove a curve by index. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<Curve> {
        (index < self.curves.len()).then(|| self.curves.remove(index))
    }

    pub fn clear(&mut self) {
        self.curves.clear();
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }
}

impl<'a> IntoIterator for &'a CurveRegistry {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
