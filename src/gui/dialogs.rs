use eframe::egui;

use super::theme::Theme;

/// Blocking confirmation shown after a successful save, in place of a
/// transient toast: the write already happened, the dialog just says
/// so.
pub struct NoticeDialog {
    open: bool,
    title: String,
    message: String,
}

impl NoticeDialog {
    pub fn new() -> Self {
        Self { open: false, title: String::new(), message: String::new() }
    }

    pub fn show_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("notice_dialog")).show(ctx, |ui| {
            ui.set_width(300.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("ℹ").size(22.0).color(theme.accent()));
                ui.label(egui::RichText::new(&self.title).size(16.0).strong());
            });
            ui.add_space(8.0);
            ui.label(&self.message);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for NoticeDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Failed loads and saves end up here instead of disappearing into the
/// terminal. The raw error text is tucked behind a collapsing section.
pub struct ErrorDialog {
    open: bool,
    title: String,
    message: String,
    details: Option<String>,
}

impl ErrorDialog {
    pub fn new() -> Self {
        Self { open: false, title: String::new(), message: String::new(), details: None }
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<String>,
    ) {
        self.title = title.into();
        self.message = message.into();
        self.details = details;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_dialog")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(theme.danger()));
                ui.label(egui::RichText::new(&self.title).size(16.0).strong());
            });
            ui.add_space(8.0);
            ui.label(&self.message);

            if let Some(details) = &self.details {
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(3)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.details = None;
        }
    }
}

impl Default for ErrorDialog {
    fn default() -> Self {
        Self::new()
    }
}
