use eframe::egui;

use super::{
    icons::IconStore,
    theme::Theme,
};
use crate::core::catalog::{
    NO_STICKER,
    STAKE_NAMES,
};

const PICKER_COLUMNS: usize = 4;
const PICKER_ICON_SIZE: egui::Vec2 = egui::Vec2::new(45.0, 64.0);

/// Modal stake picker for one deck. Picking a stake (or removing the
/// sticker) commits immediately; there is no confirm step and the
/// choice is not part of the save/discard flow for unlock flags.
pub struct StakePickerModal {
    open: bool,
    deck: Option<String>,
}

impl StakePickerModal {
    pub fn new() -> Self {
        Self { open: false, deck: None }
    }

    pub fn open_for(&mut self, deck: String) {
        self.deck = Some(deck);
        self.open = true;
    }

    /// Returns `(deck, stake)` once the user picks; `stake` is
    /// `"No Sticker"` for removal.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        icons: &mut IconStore,
    ) -> Option<(String, String)> {
        if !self.open {
            return None;
        }
        let Some(deck) = self.deck.clone() else {
            self.open = false;
            return None;
        };

        let mut picked: Option<String> = None;

        let modal = egui::Modal::new(egui::Id::new("stake_picker")).show(ctx, |ui| {
            ui.set_width(300.0);

            ui.label(theme.heading(&format!("Select Stake for {deck}")));
            ui.add_space(10.0);

            egui::Grid::new("stake_picker_grid").num_columns(PICKER_COLUMNS).spacing([8.0, 8.0]).show(
                ui,
                |ui| {
                    for (index, stake) in STAKE_NAMES.iter().enumerate() {
                        let response = match icons.stake_icon(ctx, stake) {
                            Some(texture) => ui.add(
                                egui::ImageButton::new((texture.id(), PICKER_ICON_SIZE))
                                    .frame(false),
                            ),
                            None => ui.button(*stake),
                        };
                        if response.on_hover_text(*stake).clicked() {
                            picked = Some(stake.to_string());
                        }
                        if (index + 1) % PICKER_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                },
            );

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                let remove = egui::Button::new(
                    egui::RichText::new("Remove Stake Sticker")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(theme.danger());
                if ui.add(remove).clicked() {
                    picked = Some(NO_STICKER.to_string());
                }
            });

            if picked.is_some() {
                ui.close();
            }
        });

        if picked.is_some() || modal.should_close() {
            self.open = false;
            self.deck = None;
        }

        picked.map(|stake| (deck, stake))
    }
}

impl Default for StakePickerModal {
    fn default() -> Self {
        Self::new()
    }
}
