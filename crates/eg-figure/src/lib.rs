//! eg-figure: figure model and the two figure generators.
//!
//! - figure / color: backend-agnostic description of one plot
//! - curves: registry of user-entered X/Y curves
//! - custom: multi-curve plot built from the registry
//! - bjt: DC load-line analysis for a fixed-bias BJT stage

pub mod bjt;
pub mod color;
pub mod curves;
pub mod custom;
pub mod error;
pub mod figure;

pub use bjt::{BjtParams, LoadLineAnalysis, QPoint, analyze, load_line_figure};
pub use color::Color;
pub use curves::{Curve, CurveRegistry, CurveStyle};
pub use custom::{PlotLabels, custom_figure};
pub use error::{FigureError, FigureResult};
pub use figure::{
    Annotation, AxisLimits, Figure, FigureSize, GridStyle, Series, SeriesKind,
};
