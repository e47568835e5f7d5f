// Preference store - flat key/value persistence gated by the remember switch
use crate::file_manager::{read_json_file, write_json_file};
use crate::models::Preferences;
use crate::utils::get_preferences_json_path;
use log::warn;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Persisted key names. The remember switch is the master key: nothing else
/// is written while it is off, and flipping it off wipes the whole store.
pub mod keys {
    pub const INPUT_FOLDER: &str = "inputFolder";
    pub const OUTPUT_FOLDER: &str = "outputFolder";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const KEEP_ASPECT_RATIO: &str = "keepAspectRatio";
    pub const OVERWRITE: &str = "overwrite";
    pub const REMEMBER: &str = "remember";
}

pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_location() -> Self {
        Self::new(get_preferences_json_path())
    }

    /// Loads never fail: a missing or unreadable store behaves like an empty
    /// one so corrupt local state can't take the app down.
    fn read_map(&self) -> Map<String, Value> {
        if !self.path.exists() {
            return Map::new();
        }

        match read_json_file::<Map<String, Value>>(&self.path) {
            Ok(map) => map,
            Err(e) => {
                warn!("Preference store unreadable, falling back to defaults: {}", e);
                Map::new()
            }
        }
    }

    fn string_from(map: &Map<String, Value>, key: &str) -> String {
        match map.get(key) {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warn!("Malformed preference {:?} ({}), using default", key, other);
                String::new()
            }
        }
    }

    fn bool_from(map: &Map<String, Value>, key: &str) -> bool {
        match map.get(key) {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                warn!("Malformed preference {:?} ({}), using default", key, other);
                false
            }
        }
    }

    pub fn load_string(&self, key: &str) -> String {
        Self::string_from(&self.read_map(), key)
    }

    pub fn load_bool(&self, key: &str) -> bool {
        Self::bool_from(&self.read_map(), key)
    }

    pub fn remember(&self) -> bool {
        self.load_bool(keys::REMEMBER)
    }

    /// Persists one key. A save while the remember switch is off is a
    /// deliberate no-op, not an error.
    pub fn save(&self, key: &str, value: Value) -> Result<(), String> {
        if key != keys::REMEMBER && !self.remember() {
            return Ok(());
        }

        let mut map = self.read_map();
        map.insert(key.to_string(), value);
        write_json_file(&self.path, &map)
    }

    /// Turning remember off forgets everything already stored, not just
    /// future writes.
    pub fn set_remember(&self, remember: bool) -> Result<(), String> {
        if !remember {
            return self.clear_all();
        }

        let mut map = self.read_map();
        map.insert(keys::REMEMBER.to_string(), Value::Bool(true));
        write_json_file(&self.path, &map)
    }

    pub fn clear_all(&self) -> Result<(), String> {
        write_json_file(&self.path, &Map::new())
    }

    /// Typed view over the whole store, used to seed the form at startup.
    pub fn snapshot(&self) -> Preferences {
        let map = self.read_map();

        Preferences {
            input_folder: Self::string_from(&map, keys::INPUT_FOLDER),
            output_folder: Self::string_from(&map, keys::OUTPUT_FOLDER),
            width: Self::string_from(&map, keys::WIDTH),
            height: Self::string_from(&map, keys::HEIGHT),
            keep_aspect_ratio: Self::bool_from(&map, keys::KEEP_ASPECT_RATIO),
            overwrite: Self::bool_from(&map, keys::OVERWRITE),
            remember: Self::bool_from(&map, keys::REMEMBER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn temp_store(name: &str) -> PreferenceStore {
        let path = std::env::temp_dir().join(format!(
            "rescale-prefs-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        PreferenceStore::new(path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.snapshot(), Preferences::default());
    }

    #[test]
    fn saves_are_ignored_while_remember_is_off() {
        let store = temp_store("gated");

        store.save(keys::WIDTH, json!("800")).unwrap();
        assert_eq!(store.load_string(keys::WIDTH), "");
    }

    #[test]
    fn round_trip_while_remember_is_on() {
        let store = temp_store("roundtrip");
        store.set_remember(true).unwrap();

        store.save(keys::INPUT_FOLDER, json!("/photos/in")).unwrap();
        store.save(keys::OUTPUT_FOLDER, json!("/photos/out")).unwrap();
        store.save(keys::WIDTH, json!("1920")).unwrap();
        store.save(keys::KEEP_ASPECT_RATIO, json!(true)).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.input_folder, "/photos/in");
        assert_eq!(snapshot.output_folder, "/photos/out");
        assert_eq!(snapshot.width, "1920");
        assert!(snapshot.keep_aspect_ratio);
        assert!(snapshot.remember);

        // Saving the identical values back changes nothing on reload
        store.save(keys::WIDTH, json!("1920")).unwrap();
        assert_eq!(store.snapshot(), snapshot);
    }

    #[test]
    fn turning_remember_off_clears_every_key() {
        let store = temp_store("wipe");
        store.set_remember(true).unwrap();
        store.save(keys::INPUT_FOLDER, json!("/photos/in")).unwrap();
        store.save(keys::HEIGHT, json!("1080")).unwrap();
        store.save(keys::OVERWRITE, json!(true)).unwrap();

        store.set_remember(false).unwrap();

        assert_eq!(store.snapshot(), Preferences::default());
    }

    #[test]
    fn malformed_value_falls_back_to_default() {
        let store = temp_store("badvalue");
        store.set_remember(true).unwrap();
        // width stored as a number instead of form text
        store.save(keys::WIDTH, json!(1920)).unwrap();
        store.save(keys::OVERWRITE, json!("yes")).unwrap();

        assert_eq!(store.load_string(keys::WIDTH), "");
        assert!(!store.load_bool(keys::OVERWRITE));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let store = temp_store("badfile");
        fs::write(&store.path, b"{ not json").unwrap();

        assert_eq!(store.snapshot(), Preferences::default());
        assert!(!store.remember());
    }
}
