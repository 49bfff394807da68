use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    icons::{
        IconStore,
        TILE_HEIGHT,
        TILE_WIDTH,
    },
    theme::Theme,
};
use crate::core::{
    catalog::Category,
    collection::{
        CategoryState,
        DeckMode,
        TileState,
    },
    profile::Profile,
};

pub const GRID_COLUMNS: usize = 5;

const CELL_WIDTH: f32 = 104.0;

/// The current page as a 5×3 grid of clickable tiles. Clicks are
/// forwarded through the action queue; what a click means depends on
/// the category and, for decks, the active mode.
pub fn collection_grid(
    ctx: &egui::Context,
    theme: &Theme,
    view: &CategoryState,
    profile: &Profile,
    icons: &mut IconStore,
    actions: &mut ActionQueue,
) {
    let tiles = view.current_page_items(profile);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            egui::Grid::new("collection_grid")
                .num_columns(GRID_COLUMNS)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    for (index, tile) in tiles.iter().enumerate() {
                        draw_tile(ui, ctx, theme, view, tile, icons, actions);
                        if (index + 1) % GRID_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    });
}

fn draw_tile(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &Theme,
    view: &CategoryState,
    tile: &TileState,
    icons: &mut IconStore,
    actions: &mut ActionQueue,
) {
    ui.vertical(|ui| {
        ui.set_width(CELL_WIDTH);

        let size = egui::vec2(TILE_WIDTH as f32, TILE_HEIGHT as f32);
        let response = ui
            .vertical_centered(|ui| match icons.tile(ctx, view.category(), tile) {
                Some(texture) => {
                    ui.add(egui::ImageButton::new((texture.id(), size)).frame(false))
                }
                None => ui.add_sized(size, egui::Button::new("No Image")),
            })
            .inner;

        if response.clicked() {
            if let Some(action) = click_action(view, tile) {
                actions.push(action);
            }
        }

        let label_color = if tile.unlocked { ui.visuals().text_color() } else { theme.muted() };
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&tile.name).size(11.0).color(label_color));
        });
    });
}

fn click_action(view: &CategoryState, tile: &TileState) -> Option<UiAction> {
    match (view.category(), view.mode) {
        // Stake mode only reacts to decks the player actually has.
        (Category::Decks, DeckMode::Stakes) => {
            tile.unlocked.then(|| UiAction::OpenStakePicker(tile.name.clone()))
        }
        _ => Some(UiAction::ToggleUnlock(tile.name.clone())),
    }
}
