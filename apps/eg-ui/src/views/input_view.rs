//! Left-hand form: graph settings, BJT parameters and the custom curve entry.

use eg_app::GraphSession;
use eg_figure::CurveStyle;
use egui::{Grid, RichText, Ui};

const FIELD_WIDTH: f32 = 220.0;

/// Buttons pressed this frame.
#[derive(Debug, Default)]
pub struct InputActions {
    pub add_curve: bool,
    pub clear_curves: bool,
    pub remove_curve: Option<usize>,
}

#[derive(Default)]
pub struct InputView;

impl InputView {
    pub fn show(&mut self, ui: &mut Ui, session: &mut GraphSession) -> InputActions {
        let mut actions = InputActions::default();

        ui.group(|ui| {
            ui.label(RichText::new("Graph Settings (Custom Plot Only)").strong());
            Grid::new("graph_settings")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    text_row(ui, "Title:", &mut session.labels.title);
                    text_row(ui, "X-axis Label:", &mut session.labels.x_label);
                    text_row(ui, "Y-axis Label:", &mut session.labels.y_label);
                });
        });

        ui.add_space(6.0);
        ui.group(|ui| {
            ui.label(RichText::new("BJT Load Line Parameters").strong());
            let form = &mut session.bjt_form;
            Grid::new("bjt_parameters")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    text_row(ui, "VCC (V):", &mut form.vcc);
                    text_row(ui, "RC (Ω):", &mut form.rc);
                    text_row(ui, "RE (Ω):", &mut form.re);
                    text_row(ui, "IB (µA):", &mut form.ib_ua);
                    text_row(ui, "Beta:", &mut form.beta);
                });
        });

        ui.add_space(6.0);
        ui.group(|ui| {
            ui.label(RichText::new("Add Custom Curve").strong());
            let form = &mut session.curve_form;
            Grid::new("curve_entry")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    text_row(ui, "Curve Name:", &mut form.name);
                    text_row(ui, "X values:", &mut form.x_values);
                    text_row(ui, "Y values:", &mut form.y_values);

                    ui.label("Plot Type:");
                    egui::ComboBox::from_id_salt("curve_style")
                        .selected_text(form.style.label())
                        .show_ui(ui, |ui| {
                            for style in CurveStyle::ALL {
                                ui.selectable_value(&mut form.style, style, style.label());
                            }
                        });
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                actions.add_curve = ui.button("Add Curve").clicked();
                actions.clear_curves = ui.button("Clear Curves").clicked();
            });

            ui.separator();
            actions.remove_curve = show_curve_table(ui, session);
        });

        actions
    }
}

fn text_row(ui: &mut Ui, label: &str, text: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(text).desired_width(FIELD_WIDTH));
    ui.end_row();
}

/// Registered curves with a remove button per row. Returns the row to remove.
fn show_curve_table(ui: &mut Ui, session: &GraphSession) -> Option<usize> {
    use egui_extras::{Column, TableBuilder};

    let curves = session.curves();
    if curves.is_empty() {
        ui.label(RichText::new("No curves added").weak());
        return None;
    }

    let mut remove = None;
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(140.0).at_least(80.0)) // Name
        .column(Column::initial(60.0).at_least(40.0)) // Points
        .column(Column::initial(90.0).at_least(60.0)) // Style
        .column(Column::exact(30.0)) // Remove button
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Points");
            });
            header.col(|ui| {
                ui.strong("Style");
            });
            header.col(|ui| {
                ui.strong("");
            });
        })
        .body(|mut body| {
            for (index, curve) in curves.iter().enumerate() {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label(curve.name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(curve.len().to_string());
                    });
                    row.col(|ui| {
                        ui.label(curve.style.label());
                    });
                    row.col(|ui| {
                        if ui.small_button("✖").on_hover_text("Remove curve").clicked() {
                            remove = Some(index);
                        }
                    });
                });
            }
        });

    remove
}
