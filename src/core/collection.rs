use std::collections::BTreeMap;

use super::{
    catalog::{
        Category,
        RED_DECK,
    },
    profile::Profile,
};

pub const PAGE_SIZE: usize = 15;

/// Click interpretation for the deck category: toggle unlocks, or pick
/// stake stickers. Never persisted; a fresh view always starts in
/// `Decks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckMode {
    #[default]
    Decks,
    Stakes,
}

impl DeckMode {
    pub fn label(&self) -> &'static str {
        match self {
            DeckMode::Decks => "Decks",
            DeckMode::Stakes => "Stakes",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DeckMode::Decks => DeckMode::Stakes,
            DeckMode::Stakes => DeckMode::Decks,
        }
    }
}

/// Everything the grid needs to draw one item: effective unlock state,
/// the resolved icon file, and (for decks) the sticker sheet to
/// composite on top.
#[derive(Debug, Clone, PartialEq)]
pub struct TileState {
    pub name: String,
    pub unlocked: bool,
    pub icon_file: String,
    pub fallback_file: &'static str,
    pub sticker_file: Option<String>,
}

/// One category's view session: a working copy of its unlock flags plus
/// the page cursor. Unlock edits live here until explicitly committed
/// back into the profile; discarding the view discards them.
pub struct CategoryState {
    category: Category,
    names: Vec<String>,
    flags: BTreeMap<String, bool>,
    page: usize,
    pub mode: DeckMode,
}

impl CategoryState {
    pub fn new(category: Category, profile: &Profile) -> Self {
        Self::with_items(
            category,
            category.names().iter().map(|name| name.to_string()).collect(),
            profile.unlocks(category).clone(),
        )
    }

    pub fn with_items(
        category: Category,
        names: Vec<String>,
        flags: BTreeMap<String, bool>,
    ) -> Self {
        Self { category, names, flags, page: 0, mode: DeckMode::default() }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.names.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Moves the page cursor by `delta`. Requests that would land
    /// outside `[0, page_count)` leave the cursor unchanged; there is
    /// no wraparound.
    pub fn advance_page(&mut self, delta: isize) {
        let target = self.page as isize + delta;
        if target >= 0 && (target as usize) < self.page_count() {
            self.page = target as usize;
        }
    }

    /// Effective unlock state of one item (the starter deck always
    /// reads unlocked).
    pub fn is_unlocked(&self, name: &str) -> bool {
        if self.category == Category::Decks && name == RED_DECK {
            return true;
        }
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Flips an item's unlock flag in the working copy. Toggling the
    /// starter deck is a no-op: it can never be locked.
    pub fn toggle(&mut self, name: &str) {
        if self.category == Category::Decks && name == RED_DECK {
            return;
        }
        let entry = self.flags.entry(name.to_string()).or_insert(false);
        *entry = !*entry;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// The current page's tiles in canonical order, at most
    /// [`PAGE_SIZE`] of them. Sticker assignments are read straight
    /// from the profile so immediate-commit edits show up without a
    /// save.
    pub fn current_page_items(&self, profile: &Profile) -> Vec<TileState> {
        let start = self.page * PAGE_SIZE;
        self.names
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|name| {
                let unlocked = self.is_unlocked(name);
                let icon_file = if unlocked {
                    format!("{name}.png")
                } else {
                    self.category.locked_icon().to_string()
                };
                let sticker_file = match self.category {
                    Category::Decks => profile.sticker_asset_for(name),
                    _ => None,
                };
                TileState {
                    name: name.clone(),
                    unlocked,
                    icon_file,
                    fallback_file: self.category.fallback_icon(),
                    sticker_file,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::NO_STICKER;

    fn numbered_names(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("Item {i}")).collect()
    }

    fn view_of(count: usize) -> CategoryState {
        CategoryState::with_items(Category::Jokers, numbered_names(count), BTreeMap::new())
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut view = CategoryState::new(Category::Jokers, &Profile::default());

        assert!(!view.is_unlocked("Blueprint"));
        view.toggle("Blueprint");
        assert!(view.is_unlocked("Blueprint"));
        view.toggle("Blueprint");
        assert!(!view.is_unlocked("Blueprint"));
    }

    #[test]
    fn red_deck_cannot_be_toggled_and_always_reads_unlocked() {
        let mut view = CategoryState::new(Category::Decks, &Profile::default());

        assert!(view.is_unlocked(RED_DECK));
        view.toggle(RED_DECK);
        assert!(view.is_unlocked(RED_DECK));
        assert_eq!(view.flags().get(RED_DECK), Some(&false));

        // A joker that happened to share the name would not be special.
        let mut jokers =
            CategoryState::with_items(Category::Jokers, vec![RED_DECK.to_string()], BTreeMap::new());
        jokers.toggle(RED_DECK);
        assert!(jokers.is_unlocked(RED_DECK));
    }

    #[test]
    fn twenty_items_paginate_into_fifteen_and_five() {
        let mut view = view_of(20);
        let profile = Profile::default();

        assert_eq!(view.page_count(), 2);

        let first = view.current_page_items(&profile);
        assert_eq!(first.len(), 15);
        assert_eq!(first[0].name, "Item 1");
        assert_eq!(first[14].name, "Item 15");

        view.advance_page(1);
        let second = view.current_page_items(&profile);
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].name, "Item 16");
        assert_eq!(second[4].name, "Item 20");

        // Advancing past the last page is a no-op.
        view.advance_page(1);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn page_cursor_never_leaves_bounds() {
        let mut view = view_of(31);
        assert_eq!(view.page_count(), 3);

        view.advance_page(-1);
        assert_eq!(view.page(), 0);
        view.advance_page(5);
        assert_eq!(view.page(), 0);
        view.advance_page(2);
        assert_eq!(view.page(), 2);
        view.advance_page(1);
        assert_eq!(view.page(), 2);

        let mut single = view_of(3);
        assert_eq!(single.page_count(), 1);
        single.advance_page(1);
        single.advance_page(-1);
        assert_eq!(single.page(), 0);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let mut view = view_of(0);
        assert_eq!(view.page_count(), 1);
        assert!(!view.has_next_page());
        view.advance_page(1);
        assert_eq!(view.page(), 0);
        assert!(view.current_page_items(&Profile::default()).is_empty());
    }

    #[test]
    fn locked_tiles_resolve_to_placeholder_art() {
        let mut profile = Profile::default();
        profile.jokers.insert("Joker".to_string(), true);
        let view = CategoryState::new(Category::Jokers, &profile);

        let tiles = view.current_page_items(&profile);
        assert_eq!(tiles[0].name, "Joker");
        assert_eq!(tiles[0].icon_file, "Joker.png");
        assert_eq!(tiles[1].icon_file, "Locked_Joker.png");
        assert_eq!(tiles[1].fallback_file, "Joker.png");
        assert!(tiles.iter().all(|tile| tile.sticker_file.is_none()));
    }

    #[test]
    fn deck_tiles_carry_sticker_and_red_deck_art() {
        let mut profile = Profile::default();
        profile.set_sticker("Blue Deck", "Gold Stake");
        let view = CategoryState::new(Category::Decks, &profile);

        let tiles = view.current_page_items(&profile);
        let red = tiles.iter().find(|tile| tile.name == RED_DECK).unwrap();
        assert!(red.unlocked);
        assert_eq!(red.icon_file, "Red Deck.png");

        let blue = tiles.iter().find(|tile| tile.name == "Blue Deck").unwrap();
        assert!(!blue.unlocked);
        assert_eq!(blue.icon_file, "LockedDeck.png");
        assert_eq!(blue.sticker_file.as_deref(), Some("Gold Sticker.png"));
    }

    #[test]
    fn sticker_edits_show_up_without_a_save() {
        let mut profile = Profile::default();
        let view = CategoryState::new(Category::Decks, &profile);

        profile.set_sticker("Blue Deck", "Gold Stake");

        let tiles = view.current_page_items(&profile);
        let blue = tiles.iter().find(|tile| tile.name == "Blue Deck").unwrap();
        assert_eq!(blue.sticker_file.as_deref(), Some("Gold Sticker.png"));

        profile.set_sticker("Blue Deck", NO_STICKER);
        let tiles = view.current_page_items(&profile);
        let blue = tiles.iter().find(|tile| tile.name == "Blue Deck").unwrap();
        assert_eq!(blue.sticker_file, None);
    }

    #[test]
    fn mode_defaults_to_decks_and_toggles() {
        let mut view = CategoryState::new(Category::Decks, &Profile::default());
        assert_eq!(view.mode, DeckMode::Decks);
        view.toggle_mode();
        assert_eq!(view.mode, DeckMode::Stakes);
        view.toggle_mode();
        assert_eq!(view.mode, DeckMode::Decks);
    }
}
