use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use crate::core::{
    Profile,
    TrackerError,
};

const APP_NAME: &str = "balatrack";
const PROFILE_FILE: &str = "profile.json";

pub fn app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// Reads and writes the player profile at a fixed path. Loading a
/// missing file is first-run, not an error; a malformed file is
/// reported as-is, never repaired.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn default_location() -> Self {
        Self { path: app_data_dir().join(PROFILE_FILE) }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Profile, TrackerError> {
        if !self.path.exists() {
            return Ok(Profile::default());
        }

        let json = fs::read_to_string(&self.path)?;
        let mut profile: Profile = serde_json::from_str(&json)?;
        profile.normalize();
        println!("Profile loaded from: {}", self.path.display());
        Ok(profile)
    }

    /// Serializes the whole profile and overwrites the file. Partial
    /// writes of single categories are not a thing; the profile is the
    /// unit of persistence.
    pub fn save(&self, profile: &Profile) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        println!("Profile saved to: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{
        Category,
        NO_STICKER,
    };

    fn scratch_store(tag: &str) -> ProfileStore {
        let dir = std::env::temp_dir()
            .join(format!("balatrack-test-{}-{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        ProfileStore::at(dir.join(PROFILE_FILE))
    }

    fn cleanup(store: &ProfileStore) {
        if let Some(dir) = store.path().parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn fresh_load_yields_a_fully_locked_profile() {
        let store = scratch_store("fresh");

        let profile = store.load().unwrap();
        assert!(profile.jokers.values().all(|unlocked| !unlocked));
        assert!(profile.decks.values().all(|unlocked| !unlocked));
        assert!(profile.stakes.values().all(|unlocked| !unlocked));
        assert!(profile.deck_stickers.values().all(|sticker| sticker == NO_STICKER));

        cleanup(&store);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = scratch_store("roundtrip");

        let mut profile = Profile::default();
        profile.jokers.insert("Blueprint".to_string(), true);
        profile.set_sticker("Blue Deck", "Gold Stake");
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, profile);

        cleanup(&store);
    }

    #[test]
    fn malformed_file_propagates_the_json_error() {
        let store = scratch_store("malformed");
        fs::write(store.path(), "{\"jokers\": [nope").unwrap();

        match store.load() {
            Err(TrackerError::Json(_)) => {}
            other => panic!("expected a JSON error, got {other:?}"),
        }

        cleanup(&store);
    }

    #[test]
    fn loading_a_sparse_file_fills_missing_entries() {
        let store = scratch_store("sparse");
        fs::write(
            store.path(),
            r#"{"jokers": {"Blueprint": true}, "deck_stickers": {"Blue Deck": "Gold Stake"}}"#,
        )
        .unwrap();

        let profile = store.load().unwrap();
        assert_eq!(profile.jokers.get("Blueprint"), Some(&true));
        assert_eq!(profile.jokers.get("Joker"), Some(&false));
        assert!(!profile.decks.is_empty());
        assert_eq!(profile.sticker_for("Blue Deck"), "Gold Stake");
        assert_eq!(profile.sticker_for("Plasma Deck"), NO_STICKER);

        cleanup(&store);
    }

    #[test]
    fn saving_one_category_keeps_the_rest_of_the_file() {
        let store = scratch_store("category-save");

        let mut profile = Profile::default();
        profile.jokers.insert("Blueprint".to_string(), true);
        profile.set_sticker("Blue Deck", "Gold Stake");
        store.save(&profile).unwrap();

        // Simulate a deck-view session: load, edit the working copy,
        // commit only the decks mapping, save the whole profile.
        let mut loaded = store.load().unwrap();
        let mut decks = loaded.unlocks(Category::Decks).clone();
        decks.insert("Plasma Deck".to_string(), true);
        loaded.replace_unlocks(Category::Decks, decks);
        store.save(&loaded).unwrap();

        let reread = store.load().unwrap();
        assert!(reread.is_unlocked(Category::Decks, "Plasma Deck"));
        assert_eq!(reread.jokers.get("Blueprint"), Some(&true));
        assert_eq!(reread.sticker_for("Blue Deck"), "Gold Stake");

        cleanup(&store);
    }
}
