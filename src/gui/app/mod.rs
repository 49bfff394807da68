mod modals;

use eframe::egui;
use modals::Modals;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    grid::collection_grid,
    icons::IconStore,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::ControlBars,
};
use crate::{
    core::{
        navigation::Navigation,
        Profile,
    },
    persistence::ProfileStore,
};

pub struct TrackerApp {
    // Persistent state
    store: ProfileStore,
    profile: Profile,

    // Active view
    navigation: Navigation,

    // UI State
    icons: IconStore,
    actions: ActionQueue,
    modals: Modals,
    theme: Theme,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = ProfileStore::default_location();
        let (profile, load_error) = match store.load() {
            Ok(profile) => (profile, None),
            Err(err) => {
                eprintln!("Failed to load profile: {err}");
                (Profile::default(), Some(err))
            }
        };

        let theme = Theme::felt();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_theme(egui::ThemePreference::Dark);

        let mut modals = Modals::default();
        if let Some(err) = load_error {
            modals.error.show_error(
                "Profile Load Failed",
                "Starting from a blank profile. The file on disk is left \
                 untouched until you save.",
                Some(err.to_string()),
            );
        }

        Self {
            navigation: Navigation::new(&profile),
            store,
            profile,
            icons: IconStore::default_root(),
            actions: ActionQueue::new(),
            modals,
            theme,
        }
    }

    fn apply_actions(&mut self) {
        for action in self.actions.take() {
            match action {
                UiAction::ToggleUnlock(name) => self.navigation.current_mut().toggle(&name),
                UiAction::OpenStakePicker(deck) => self.modals.stake_picker.open_for(deck),
                UiAction::AssignSticker { deck, stake } => self.profile.set_sticker(&deck, &stake),
                UiAction::ChangePage(delta) => self.navigation.current_mut().advance_page(delta),
                UiAction::PrevCategory => self.navigation.prev_category(&self.profile),
                UiAction::NextCategory => self.navigation.next_category(&self.profile),
                UiAction::ToggleDeckMode => self.navigation.current_mut().toggle_mode(),
                UiAction::Save => self.save_profile(),
            }
        }
    }

    /// Commits the active view's working flags into the profile, then
    /// writes the whole profile. Sticker assignments are already in the
    /// profile at this point.
    fn save_profile(&mut self) {
        let view = self.navigation.current();
        self.profile.replace_unlocks(view.category(), view.flags().clone());

        match self.store.save(&self.profile) {
            Ok(()) => {
                self.modals.notice.show_notice("Saved", "Profile saved successfully!");
            }
            Err(err) => {
                eprintln!("Failed to save profile: {err}");
                self.modals.error.show_error(
                    "Save Failed",
                    "The profile could not be written.",
                    Some(err.to_string()),
                );
            }
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ControlBars::show(ctx, &self.theme, &self.navigation, &mut self.actions);
        collection_grid(
            ctx,
            &self.theme,
            self.navigation.current(),
            &self.profile,
            &mut self.icons,
            &mut self.actions,
        );

        if let Some((deck, stake)) =
            self.modals.stake_picker.show(ctx, &self.theme, &mut self.icons)
        {
            self.actions.push(UiAction::AssignSticker { deck, stake });
        }
        self.modals.notice.show(ctx, &self.theme);
        self.modals.error.show(ctx, &self.theme);

        self.apply_actions();
    }
}
