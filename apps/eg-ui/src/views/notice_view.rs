use eg_app::{Notice, NoticeLevel};
use egui::{Color32, RichText};

/// Draw the pending notice as a centered dialog. Returns true once dismissed.
pub fn show_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let accent = match notice.level {
        NoticeLevel::Info => Color32::from_rgb(40, 110, 200),
        NoticeLevel::Warning => Color32::from_rgb(200, 140, 0),
        NoticeLevel::Error => Color32::from_rgb(200, 40, 40),
    };

    let mut dismissed = false;
    egui::Window::new(RichText::new(&notice.title).color(accent).strong())
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.label(notice.message.as_str());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        dismissed = true;
    }
    dismissed
}
