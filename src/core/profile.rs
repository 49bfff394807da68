use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

use super::catalog::{
    sticker_for_stake,
    Category,
    DECK_NAMES,
    NO_STICKER,
    RED_DECK,
};

/// The persisted unlock ledger. One instance per player, stored as a
/// single JSON object and always written back as a whole.
///
/// `stakes` holds unlock flags for the stake items themselves;
/// `deck_stickers` holds the stake currently assigned to each deck.
/// These are deliberately separate fields even though both talk about
/// stakes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub jokers: BTreeMap<String, bool>,
    #[serde(default)]
    pub decks: BTreeMap<String, bool>,
    #[serde(default)]
    pub stakes: BTreeMap<String, bool>,
    #[serde(default)]
    pub deck_stickers: BTreeMap<String, String>,
}

impl Default for Profile {
    fn default() -> Self {
        let mut profile = Profile {
            jokers: BTreeMap::new(),
            decks: BTreeMap::new(),
            stakes: BTreeMap::new(),
            deck_stickers: BTreeMap::new(),
        };
        profile.normalize();
        profile
    }
}

impl Profile {
    /// Guarantees an entry for every canonical item. Names the catalog
    /// doesn't know (e.g. from a newer file) are left alone.
    pub fn normalize(&mut self) {
        for category in Category::ALL {
            for name in category.names() {
                self.unlocks_mut(category).entry(name.to_string()).or_insert(false);
            }
        }
        for deck in DECK_NAMES {
            self.deck_stickers.entry(deck.to_string()).or_insert_with(|| NO_STICKER.to_string());
        }
    }

    pub fn unlocks(&self, category: Category) -> &BTreeMap<String, bool> {
        match category {
            Category::Jokers => &self.jokers,
            Category::Decks => &self.decks,
            Category::Stakes => &self.stakes,
        }
    }

    fn unlocks_mut(&mut self, category: Category) -> &mut BTreeMap<String, bool> {
        match category {
            Category::Jokers => &mut self.jokers,
            Category::Decks => &mut self.decks,
            Category::Stakes => &mut self.stakes,
        }
    }

    /// Effective unlock state. The starter deck never reads as locked,
    /// whatever the stored flag says.
    pub fn is_unlocked(&self, category: Category, name: &str) -> bool {
        if category == Category::Decks && name == RED_DECK {
            return true;
        }
        self.unlocks(category).get(name).copied().unwrap_or(false)
    }

    /// Replaces one category's unlock flags wholesale. Used when a
    /// category view commits its working copy on save.
    pub fn replace_unlocks(&mut self, category: Category, flags: BTreeMap<String, bool>) {
        *self.unlocks_mut(category) = flags;
    }

    /// The stake assigned to a deck, `"No Sticker"` when none is.
    pub fn sticker_for(&self, deck: &str) -> &str {
        self.deck_stickers.get(deck).map(String::as_str).unwrap_or(NO_STICKER)
    }

    /// Assigns a stake to a deck. Setting `"No Sticker"` removes the
    /// badge. Unlike unlock toggles, this takes effect immediately and
    /// is not guarded by the explicit save step.
    pub fn set_sticker(&mut self, deck: &str, stake: &str) {
        self.deck_stickers.insert(deck.to_string(), stake.to_string());
    }

    /// Sticker sheet asset for a deck's assigned stake, if it has one.
    pub fn sticker_asset_for(&self, deck: &str) -> Option<String> {
        let sticker = sticker_for_stake(self.sticker_for(deck));
        if sticker == NO_STICKER {
            None
        } else {
            Some(format!("{sticker}.png"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{
        JOKER_NAMES,
        STAKE_NAMES,
    };

    #[test]
    fn default_profile_is_fully_locked() {
        let profile = Profile::default();

        assert_eq!(profile.jokers.len(), JOKER_NAMES.len());
        assert_eq!(profile.decks.len(), DECK_NAMES.len());
        assert_eq!(profile.stakes.len(), STAKE_NAMES.len());
        assert!(profile.jokers.values().all(|unlocked| !unlocked));
        assert!(profile.decks.values().all(|unlocked| !unlocked));
        assert!(profile.stakes.values().all(|unlocked| !unlocked));

        for deck in DECK_NAMES {
            assert_eq!(profile.sticker_for(deck), NO_STICKER);
        }
    }

    #[test]
    fn normalize_fills_missing_entries_and_keeps_unknown_ones() {
        let mut profile = Profile {
            jokers: BTreeMap::from([("Blueprint".to_string(), true)]),
            decks: BTreeMap::from([("Modded Deck".to_string(), true)]),
            stakes: BTreeMap::new(),
            deck_stickers: BTreeMap::new(),
        };
        profile.normalize();

        assert_eq!(profile.jokers.get("Blueprint"), Some(&true));
        assert_eq!(profile.jokers.get("Joker"), Some(&false));
        assert_eq!(profile.decks.get("Modded Deck"), Some(&true));
        assert_eq!(profile.stakes.len(), STAKE_NAMES.len());
        assert_eq!(profile.sticker_for("Blue Deck"), NO_STICKER);
    }

    #[test]
    fn red_deck_reads_unlocked_regardless_of_flag() {
        let profile = Profile::default();
        assert_eq!(profile.decks.get(RED_DECK), Some(&false));
        assert!(profile.is_unlocked(Category::Decks, RED_DECK));
        assert!(!profile.is_unlocked(Category::Decks, "Blue Deck"));
    }

    #[test]
    fn sticker_assignment_round_trips_to_no_sticker() {
        let mut profile = Profile::default();

        profile.set_sticker("Blue Deck", "Gold Stake");
        assert_eq!(profile.sticker_for("Blue Deck"), "Gold Stake");
        assert_eq!(profile.sticker_asset_for("Blue Deck").as_deref(), Some("Gold Sticker.png"));

        profile.set_sticker("Blue Deck", NO_STICKER);
        assert_eq!(profile.sticker_for("Blue Deck"), NO_STICKER);
        assert_eq!(profile.sticker_asset_for("Blue Deck"), None);
    }

    #[test]
    fn replace_unlocks_touches_only_that_category() {
        let mut profile = Profile::default();
        let mut decks = profile.decks.clone();
        decks.insert("Plasma Deck".to_string(), true);

        profile.replace_unlocks(Category::Decks, decks);

        assert!(profile.is_unlocked(Category::Decks, "Plasma Deck"));
        assert!(profile.jokers.values().all(|unlocked| !unlocked));
        assert!(profile.stakes.values().all(|unlocked| !unlocked));
    }
}
