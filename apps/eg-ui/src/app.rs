use std::path::{Path, PathBuf};
use std::sync::Arc;

use eg_app::{AppError, AppResult, GraphKind, GraphSession, Notice};
use eg_export::ExportFormat;
use egui_file_dialog::FileDialog;

use crate::views::{FigureView, InputView, show_notice};

pub struct GraphApp {
    session: GraphSession,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    notice: Option<Notice>,
    input_view: InputView,
    figure_view: FigureView,
}

impl GraphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: GraphSession::new(),
            file_dialog: FileDialog::new(),
            last_directory: None,
            notice: None,
            input_view: InputView,
            figure_view: FigureView::default(),
        }
    }

    fn report(&mut self, result: AppResult<Notice>) {
        match result {
            Ok(notice) => self.notice = Some(notice),
            Err(err) => self.notice = Some(Notice::from(&err)),
        }
    }

    fn generate(&mut self) {
        if let Err(err) = self.session.generate() {
            self.notice = Some(Notice::from(&err));
        }
    }

    fn request_save(&mut self) {
        if !self.session.can_save() {
            self.notice = Some(Notice::from(&AppError::NoFigure));
            return;
        }

        let file_name = format!(
            "graph_{}.png",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let mut dialog = FileDialog::new()
            .title("Save Graph")
            .default_file_name(&file_name);
        for format in ExportFormat::ALL {
            dialog = dialog.add_file_filter(
                format.label(),
                Arc::new(move |path: &Path| format.matches(path)),
            );
        }
        dialog = dialog.default_file_filter(ExportFormat::Png.label());
        if let Some(dir) = &self.last_directory {
            dialog = dialog.initial_directory(dir.clone());
        }
        self.file_dialog = dialog;
        self.file_dialog.save_file();
    }

    fn save_to(&mut self, path: &Path) {
        self.last_directory = path.parent().map(Path::to_path_buf);
        let result = self.session.save_figure(path);
        self.report(result);
    }
}

impl eframe::App for GraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let interactive = self.notice.is_none();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Graph Type:");
                    egui::ComboBox::from_id_salt("graph_kind")
                        .selected_text(self.session.graph_kind.label())
                        .show_ui(ui, |ui| {
                            for kind in GraphKind::ALL {
                                ui.selectable_value(
                                    &mut self.session.graph_kind,
                                    kind,
                                    kind.label(),
                                );
                            }
                        });

                    ui.separator();
                    if ui.button("Generate Graph").clicked() {
                        self.generate();
                    }
                    if ui.button("Save Graph").clicked() {
                        self.request_save();
                    }
                });
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.save_to(&path);
        }

        let actions = egui::SidePanel::left("inputs")
            .default_width(380.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        ui.add_enabled_ui(interactive, |ui| {
                            self.input_view.show(ui, &mut self.session)
                        })
                        .inner
                    })
                    .inner
            })
            .inner;

        if actions.add_curve {
            let result = self.session.add_curve();
            self.report(result);
        }
        if actions.clear_curves {
            self.notice = Some(self.session.clear_curves());
        }
        if let Some(index) = actions.remove_curve {
            self.session.remove_curve(index);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.figure_view.show(
                ui,
                self.session.figure(),
                self.session.analysis(),
                self.session.figure_revision(),
            );
        });

        if let Some(notice) = &self.notice {
            if show_notice(ctx, notice) {
                self.notice = None;
            }
        }
    }
}
