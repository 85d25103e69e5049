use eg_core::to_milliamps;
use eg_figure::{Color, Figure, LoadLineAnalysis};
use egui::{Color32, RichText};
use egui_plot::{
    Arrows, Corner, HLine, Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints,
    Points, Text, VLine,
};

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Central panel: the held figure drawn with egui_plot plus the load-line summary.
#[derive(Default)]
pub struct FigureView {
    /// Revision whose bounds were last applied to the plot
    shown_revision: Option<u64>,
}

impl FigureView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        figure: Option<&Figure>,
        analysis: Option<&LoadLineAnalysis>,
        revision: u64,
    ) {
        let Some(figure) = figure else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Press \"Generate Graph\" to draw a plot.").weak());
            });
            return;
        };

        if !figure.title.is_empty() {
            ui.vertical_centered(|ui| ui.heading(figure.title.as_str()));
        }

        if let Some(analysis) = analysis {
            egui::TopBottomPanel::bottom("load_line_summary")
                .resizable(false)
                .show_inside(ui, |ui| show_summary(ui, analysis));
        }

        let fresh = self.shown_revision != Some(revision);
        self.shown_revision = Some(revision);
        let (x, y) = figure.view_bounds();

        let mut plot = Plot::new("figure_plot")
            .x_axis_label(figure.x_label.as_str())
            .y_axis_label(figure.y_label.as_str())
            .show_grid(figure.grid.is_visible());
        if figure.legend {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }
        if fresh {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            if fresh {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x.min, y.min], [x.max, y.max]));
            }

            if figure.origin_axes {
                plot_ui.hline(HLine::new(0.0).color(Color32::BLACK).width(1.0));
                plot_ui.vline(VLine::new(0.0).color(Color32::BLACK).width(1.0));
            }

            for (index, series) in figure.series.iter().enumerate() {
                let color = color32(figure.series_color(index));
                if series.kind.draws_line() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(series.points.clone()))
                            .name(&series.label)
                            .color(color)
                            .width(series.width),
                    );
                }
                if series.kind.draws_markers() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(series.points.clone()))
                            .name(&series.label)
                            .color(color)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(series.marker_radius),
                    );
                }
            }

            for annotation in &figure.annotations {
                let [px, py] = annotation.position;
                if let Some(target) = annotation.arrow_to {
                    plot_ui.arrows(
                        Arrows::new(vec![[px, py]], vec![target]).color(Color32::BLACK),
                    );
                }
                let mut text = RichText::new(&annotation.text)
                    .size(annotation.font_size)
                    .color(color32(annotation.color));
                if annotation.bold {
                    text = text.strong();
                }
                plot_ui.text(
                    Text::new(PlotPoint::new(px, py), text).anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        });
    }
}

fn show_summary(ui: &mut egui::Ui, analysis: &LoadLineAnalysis) {
    let [vce_q, ic_q_ma] = analysis.q_point.chart_point();
    egui::Grid::new("load_line_values")
        .num_columns(4)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Ic(sat):");
            ui.monospace(format!("{:.3} mA", analysis.ic_sat_ma()));
            ui.label("VCE(cutoff):");
            ui.monospace(format!("{:.2} V", analysis.vce_cutoff.value));
            ui.end_row();

            ui.label("RC + RE:");
            ui.monospace(format!("{:.0} Ω", analysis.r_total.value));
            ui.label("Q-point:");
            ui.monospace(format!(
                "{vce_q:.2} V, {:.4} mA",
                to_milliamps(analysis.q_point.ic)
            ));
            ui.end_row();
        });
    if analysis.is_saturated() {
        ui.colored_label(
            Color32::from_rgb(200, 120, 0),
            format!("Q-point is past saturation (VCE = {vce_q:.2} V, IC = {ic_q_ma:.2} mA)."),
        );
    }
}
