use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::{
    catalog::Category,
    collection::DeckMode,
    navigation::Navigation,
};

/// Navigation strip along the top plus the save/mode strip along the
/// bottom. Buttons at a boundary (first/last page or category) render
/// disabled rather than wrapping.
pub struct ControlBars;

impl ControlBars {
    pub fn show(ctx: &egui::Context, theme: &Theme, nav: &Navigation, actions: &mut ActionQueue) {
        let view = nav.current();

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(theme.heading(view.category().title()));
                ui.separator();

                if ui.add_enabled(view.has_prev_page(), egui::Button::new("◀")).clicked() {
                    actions.push(UiAction::ChangePage(-1));
                }
                ui.label(format!("Page {} / {}", view.page() + 1, view.page_count()));
                if ui.add_enabled(view.has_next_page(), egui::Button::new("▶")).clicked() {
                    actions.push(UiAction::ChangePage(1));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(nav.has_next(), egui::Button::new("Next Section"))
                        .clicked()
                    {
                        actions.push(UiAction::NextCategory);
                    }
                    if ui
                        .add_enabled(nav.has_prev(), egui::Button::new("Previous Section"))
                        .clicked()
                    {
                        actions.push(UiAction::PrevCategory);
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("control_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let save = egui::Button::new(
                    egui::RichText::new("Save").strong().color(theme.on_accent()),
                )
                .fill(theme.accent());
                if ui.add(save).clicked() {
                    actions.push(UiAction::Save);
                }

                if view.category() == Category::Decks {
                    let toggle = egui::Button::new(
                        egui::RichText::new(view.mode.label())
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(theme.highlight());
                    let hint = match view.mode {
                        DeckMode::Decks => "Clicking toggles deck unlocks",
                        DeckMode::Stakes => "Clicking an unlocked deck picks its stake",
                    };
                    if ui.add(toggle).on_hover_text(hint).clicked() {
                        actions.push(UiAction::ToggleDeckMode);
                    }
                }
            });
            ui.add_space(6.0);
        });
    }
}
