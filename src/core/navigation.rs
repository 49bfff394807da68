use super::{
    catalog::Category,
    collection::CategoryState,
    profile::Profile,
};

/// Sequences the three category views. Owns the single active
/// [`CategoryState`]; switching categories replaces it wholesale, so
/// the page cursor, deck mode, and any uncommitted unlock edits reset
/// with it.
pub struct Navigation {
    index: usize,
    current: CategoryState,
}

impl Navigation {
    pub fn new(profile: &Profile) -> Self {
        Self { index: 0, current: CategoryState::new(Category::ALL[0], profile) }
    }

    pub fn current(&self) -> &CategoryState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut CategoryState {
        &mut self.current
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < Category::ALL.len()
    }

    /// Advances to the next category. At the last category this is a
    /// boundary, not a failure: the request is ignored.
    pub fn next_category(&mut self, profile: &Profile) {
        if self.has_next() {
            self.index += 1;
            self.current = CategoryState::new(Category::ALL[self.index], profile);
        }
    }

    pub fn prev_category(&mut self, profile: &Profile) {
        if self.has_prev() {
            self.index -= 1;
            self.current = CategoryState::new(Category::ALL[self.index], profile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collection::DeckMode;

    #[test]
    fn categories_cycle_in_fixed_order_with_disabled_boundaries() {
        let profile = Profile::default();
        let mut nav = Navigation::new(&profile);

        assert_eq!(nav.current().category(), Category::Jokers);
        assert!(!nav.has_prev());
        assert!(nav.has_next());

        nav.prev_category(&profile);
        assert_eq!(nav.current().category(), Category::Jokers);

        nav.next_category(&profile);
        assert_eq!(nav.current().category(), Category::Decks);
        nav.next_category(&profile);
        assert_eq!(nav.current().category(), Category::Stakes);
        assert!(!nav.has_next());

        nav.next_category(&profile);
        assert_eq!(nav.current().category(), Category::Stakes);
    }

    #[test]
    fn switching_categories_resets_page_mode_and_working_edits() {
        let profile = Profile::default();
        let mut nav = Navigation::new(&profile);

        nav.current_mut().advance_page(2);
        assert_eq!(nav.current().page(), 2);
        nav.current_mut().toggle("Blueprint");

        nav.next_category(&profile);
        nav.current_mut().toggle_mode();
        assert_eq!(nav.current().mode, DeckMode::Stakes);

        // Coming back rebuilds the joker view from the profile: the
        // unsaved toggle is gone and the cursor is back at page 0.
        nav.prev_category(&profile);
        assert_eq!(nav.current().page(), 0);
        assert!(!nav.current().is_unlocked("Blueprint"));

        nav.next_category(&profile);
        assert_eq!(nav.current().mode, DeckMode::Decks);
    }
}
