//! Canonical item lists for the three trackable collections.
//!
//! Insertion order is display order, matching the in-game collection
//! screens. Icon files are named after the item they depict, so these
//! names double as asset keys.

pub const NO_STICKER: &str = "No Sticker";
pub const RED_DECK: &str = "Red Deck";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Jokers,
    Decks,
    Stakes,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Jokers, Category::Decks, Category::Stakes];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Jokers => "Jokers",
            Category::Decks => "Decks",
            Category::Stakes => "Stakes",
        }
    }

    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Category::Jokers => JOKER_NAMES,
            Category::Decks => DECK_NAMES,
            Category::Stakes => STAKE_NAMES,
        }
    }

    /// Subdirectory of the icon root holding this category's art.
    pub fn icon_dir(&self) -> &'static str {
        match self {
            Category::Jokers => "Jokers",
            Category::Decks => "Decks",
            Category::Stakes => "Stakes",
        }
    }

    /// Placeholder art shown for locked items.
    pub fn locked_icon(&self) -> &'static str {
        match self {
            Category::Jokers => "Locked_Joker.png",
            Category::Decks | Category::Stakes => "LockedDeck.png",
        }
    }

    /// Last-resort art when even the expected file is missing.
    pub fn fallback_icon(&self) -> &'static str {
        match self {
            Category::Jokers => "Joker.png",
            Category::Decks | Category::Stakes => "LockedDeck.png",
        }
    }
}

/// Sticker sheet asset for a stake name. Unknown names degrade to the
/// no-sticker entry rather than erroring.
pub fn sticker_for_stake(stake: &str) -> &'static str {
    match stake {
        "White Stake" => "White Sticker",
        "Red Stake" => "Red Sticker",
        "Green Stake" => "Green Sticker",
        "Black Stake" => "Black Sticker",
        "Blue Stake" => "Blue Sticker",
        "Purple Stake" => "Purple Sticker",
        "Orange Stake" => "Orange Sticker",
        "Gold Stake" => "Gold Sticker",
        _ => NO_STICKER,
    }
}

pub const JOKER_NAMES: &[&str] = &[
    "Joker",
    "Greedy Joker",
    "Lusty Joker",
    "Wrathful Joker",
    "Gluttonous Joker",
    "Jolly Joker",
    "Zany Joker",
    "Mad Joker",
    "Crazy Joker",
    "Droll Joker",
    "Sly Joker",
    "Wily Joker",
    "Clever Joker",
    "Devious Joker",
    "Crafty Joker",
    "Half Joker",
    "Joker Stencil",
    "Four Fingers",
    "Mime",
    "Credit Card",
    "Ceremonial Dagger",
    "Banner",
    "Mystic Summit",
    "Marble Joker",
    "Loyalty Card",
    "8 Ball",
    "Misprint",
    "Dusk",
    "Raised Fist",
    "Chaos the Clown",
    "Fibonacci",
    "Steel Joker",
    "Scary Face",
    "Abstract Joker",
    "Delayed Gratification",
    "Hack",
    "Pareidolia",
    "Gros Michel",
    "Even Steven",
    "Odd Todd",
    "Scholar",
    "Business Card",
    "Supernova",
    "Ride the Bus",
    "Space Joker",
    "Egg",
    "Burglar",
    "Blackboard",
    "Runner",
    "Ice Cream",
    "DNA",
    "Splash",
    "Blue Joker",
    "Sixth Sense",
    "Constellation",
    "Hiker",
    "Faceless Joker",
    "Green Joker",
    "Superposition",
    "To Do List",
    "Cavendish",
    "Card Sharp",
    "Red Card",
    "Madness",
    "Square Joker",
    "Séance",
    "Riff-Raff",
    "Vampire",
    "Shortcut",
    "Hologram",
    "Vagabond",
    "Baron",
    "Cloud 9",
    "Rocket",
    "Obelisk",
    "Midas Mask",
    "Luchador",
    "Photograph",
    "Gift Card",
    "Turtle Bean",
    "Erosion",
    "Reserved Parking",
    "Mail-In Rebate",
    "To the Moon",
    "Hallucination",
    "Fortune Teller",
    "Juggler",
    "Drunkard",
    "Stone Joker",
    "Golden Joker",
    "Lucky Cat",
    "Baseball Card",
    "Bull",
    "Diet Cola",
    "Trading Card",
    "Flash Card",
    "Popcorn",
    "Spare Trousers",
    "Ancient Joker",
    "Ramen",
    "Walkie Talkie",
    "Seltzer",
    "Castle",
    "Smiley Face",
    "Campfire",
    "Golden Ticket",
    "Mr. Bones",
    "Acrobat",
    "Sock and Buskin",
    "Swashbuckler",
    "Troubadour",
    "Certificate",
    "Smeared Joker",
    "Throwback",
    "Hanging Chad",
    "Rough Gem",
    "Bloodstone",
    "Arrowhead",
    "Onyx Agate",
    "Glass Joker",
    "Showman",
    "Flower Pot",
    "Blueprint",
    "Wee Joker",
    "Merry Andy",
    "Oops! All 6s",
    "The Idol",
    "Seeing Double",
    "Matador",
    "Hit the Road",
    "The Duo",
    "The Trio",
    "The Family",
    "The Order",
    "The Tribe",
    "Stuntman",
    "Invisible Joker",
    "Brainstorm",
    "Satellite",
    "Shoot the Moon",
    "Driver's License",
    "Cartomancer",
    "Astronomer",
    "Burnt Joker",
    "Bootstraps",
    "Canio",
    "Triboulet",
    "Yorick",
    "Chicot",
    "Perkeo",
];

pub const DECK_NAMES: &[&str] = &[
    "Red Deck",
    "Blue Deck",
    "Yellow Deck",
    "Green Deck",
    "Black Deck",
    "Magic Deck",
    "Nebula Deck",
    "Ghost Deck",
    "Abandoned Deck",
    "Checkered Deck",
    "Zodiac Deck",
    "Painted Deck",
    "Anaglyph Deck",
    "Plasma Deck",
    "Erratic Deck",
];

pub const STAKE_NAMES: &[&str] = &[
    "White Stake",
    "Red Stake",
    "Green Stake",
    "Black Stake",
    "Blue Stake",
    "Purple Stake",
    "Orange Stake",
    "Gold Stake",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes_match_the_game() {
        assert_eq!(JOKER_NAMES.len(), 150);
        assert_eq!(DECK_NAMES.len(), 15);
        assert_eq!(STAKE_NAMES.len(), 8);
    }

    #[test]
    fn every_stake_has_a_sticker() {
        for stake in STAKE_NAMES {
            assert_ne!(sticker_for_stake(stake), NO_STICKER, "{stake} has no sticker");
        }
        assert_eq!(sticker_for_stake("Cosmic Stake"), NO_STICKER);
        assert_eq!(sticker_for_stake(NO_STICKER), NO_STICKER);
    }
}
