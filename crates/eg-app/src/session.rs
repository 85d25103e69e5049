//! The state carried between button presses and the four button actions.

use std::path::{Path, PathBuf};

use eg_figure::{
    Curve, CurveRegistry, Figure, LoadLineAnalysis, PlotLabels, analyze, custom_figure,
    load_line_figure,
};

use crate::error::{AppError, AppResult};
use crate::forms::{BjtForm, CurveForm, GraphKind};
use crate::notice::Notice;

#[derive(Debug, Clone, Default)]
pub struct GraphSession {
    pub graph_kind: GraphKind,
    /// Title and axis labels for the custom plot
    pub labels: PlotLabels,
    pub bjt_form: BjtForm,
    pub curve_form: CurveForm,
    curves: CurveRegistry,
    figure: Option<Figure>,
    /// Set only while the held figure is a load-line chart
    analysis: Option<LoadLineAnalysis>,
    /// Bumped every time the held figure is replaced
    revision: u64,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curves(&self) -> &CurveRegistry {
        &self.curves
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn analysis(&self) -> Option<&LoadLineAnalysis> {
        self.analysis.as_ref()
    }

    pub fn figure_revision(&self) -> u64 {
        self.revision
    }

    /// Validate the curve form and append it to the curve list.
    ///
    /// On success the form's text fields are cleared. On failure neither the
    /// form nor the list changes.
    pub fn add_curve(&mut self) -> AppResult<Notice> {
        let form = &self.curve_form;
        let curve = self
            .curves
            .add_from_text(&form.name, &form.x_values, &form.y_values, form.style)
            .map_err(|err| {
                tracing::warn!(error = %err, "curve rejected");
                AppError::InvalidCurve(err)
            })?;

        let message = format!("Curve '{}' added.", curve.name);
        tracing::info!(name = %curve.name, points = curve.len(), style = %curve.style, "curve added");
        self.curve_form.clear_entries();
        Ok(Notice::info("Added", message))
    }

    pub fn clear_curves(&mut self) -> Notice {
        self.curves.clear();
        tracing::info!("curves cleared");
        Notice::info("Cleared", "All curves removed.")
    }

    pub fn remove_curve(&mut self, index: usize) -> Option<Curve> {
        let removed = self.curves.remove(index);
        if let Some(curve) = &removed {
            tracing::info!(name = %curve.name, "curve removed");
        }
        removed
    }

    /// Build the selected graph and replace the held figure.
    ///
    /// The held figure is left as it was when building fails.
    pub fn generate(&mut self) -> AppResult<()> {
        match self.graph_kind {
            GraphKind::CustomPlot => self.generate_custom(),
            GraphKind::BjtLoadLine => self.generate_load_line(),
        }
    }

    fn generate_custom(&mut self) -> AppResult<()> {
        if self.curves.is_empty() {
            tracing::warn!("custom plot requested without curves");
            return Err(AppError::NoCurves);
        }
        let figure = custom_figure(&self.curves, &self.labels).map_err(AppError::InvalidCurve)?;
        tracing::info!(curves = self.curves.len(), "custom plot generated");
        self.replace_figure(figure, None);
        Ok(())
    }

    fn generate_load_line(&mut self) -> AppResult<()> {
        let params = self.bjt_form.parse().map_err(|err| {
            tracing::warn!(error = %err, "BJT parameters rejected");
            AppError::InvalidBjt(err)
        })?;
        let analysis = analyze(&params);
        let figure = load_line_figure(&params, &analysis);

        let [vce_q, ic_q_ma] = analysis.q_point.chart_point();
        tracing::info!(
            ic_sat_ma = analysis.ic_sat_ma(),
            vce_q,
            ic_q_ma,
            saturated = analysis.is_saturated(),
            "load line generated"
        );
        self.replace_figure(figure, Some(analysis));
        Ok(())
    }

    fn replace_figure(&mut self, figure: Figure, analysis: Option<LoadLineAnalysis>) {
        self.figure = Some(figure);
        self.analysis = analysis;
        self.revision += 1;
    }

    /// Whether there is a figure to save.
    pub fn can_save(&self) -> bool {
        self.figure.is_some()
    }

    /// Export the held figure. Without one nothing is written.
    pub fn save_figure(&self, path: &Path) -> AppResult<Notice> {
        let figure = self.figure.as_ref().ok_or_else(|| {
            tracing::warn!("save requested before any graph was generated");
            AppError::NoFigure
        })?;
        let written: PathBuf = eg_export::export_figure(figure, path).map_err(|err| {
            tracing::warn!(error = %err, path = %path.display(), "export failed");
            AppError::from(err)
        })?;
        Ok(Notice::info(
            "Saved",
            format!("Graph saved:\n{}", written.display()),
        ))
    }
}
