//! Multi-curve plot built from the curve registry.

use crate::curves::{CurveRegistry, CurveStyle};
use crate::error::{FigureError, FigureResult};
use crate::figure::{Figure, FigureSize, GridStyle, Series, SeriesKind};

pub const CUSTOM_FIGURE_SIZE: FigureSize = FigureSize::new(700, 500);

/// Title and axis labels typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl From<CurveStyle> for SeriesKind {
    fn from(style: CurveStyle) -> Self {
        match style {
            CurveStyle::Line => SeriesKind::Line,
            CurveStyle::Scatter => SeriesKind::Scatter,
            CurveStyle::LineScatter => SeriesKind::LineMarkers,
        }
    }
}

/// One series per registered curve, in registration order, with a dashed grid and legend.
pub fn custom_figure(curves: &CurveRegistry, labels: &PlotLabels) -> FigureResult<Figure> {
    if curves.is_empty() {
        return Err(FigureError::NoCurves);
    }

    let mut figure = Figure::new(CUSTOM_FIGURE_SIZE);
    figure.title = labels.title.clone();
    figure.x_label = labels.x_label.clone();
    figure.y_label = labels.y_label.clone();
    figure.grid = GridStyle::Dashed;
    figure.legend = true;
    figure.series = curves
        .iter()
        .map(|curve| Series::new(curve.name.clone(), curve.points(), curve.style.into()))
        .collect();

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_is_rejected() {
        let err = custom_figure(&CurveRegistry::new(), &PlotLabels::default()).unwrap_err();
        assert_eq!(err, FigureError::NoCurves);
    }

    #[test]
    fn styles_map_to_series_kinds() {
        let mut curves = CurveRegistry::new();
        for (name, style) in [
            ("line", CurveStyle::Line),
            ("dots", CurveStyle::Scatter),
            ("both", CurveStyle::LineScatter),
        ] {
            curves.add_from_text(name, "0,1", "1,0", style).unwrap();
        }
        let labels = PlotLabels {
            title: "Response".into(),
            x_label: "t (s)".into(),
            y_label: "v (V)".into(),
        };

        let figure = custom_figure(&curves, &labels).unwrap();

        assert_eq!(figure.title, "Response");
        assert_eq!(figure.x_label, "t (s)");
        assert_eq!(figure.size, CUSTOM_FIGURE_SIZE);
        assert!(figure.legend);
        assert_eq!(figure.grid, GridStyle::Dashed);
        let kinds: Vec<_> = figure.series.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SeriesKind::Line, SeriesKind::Scatter, SeriesKind::LineMarkers]
        );
        assert_eq!(figure.series[2].label, "both");
    }
}
