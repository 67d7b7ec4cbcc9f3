//! Save/load of the player data document
//!
//! Features:
//! - Versioned, pretty-printed JSON document at a fixed path
//! - Atomic replace (tmp → rename) on every save
//! - Missing document reported as `Ok(None)`, not as an error
//! - Malformed documents reported with the JSON path of the bad field
//!
//! The store keeps no state besides its path; the session controller owns the
//! live records and decides when to save.

mod atomic;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FIRST_LEVEL, SAVE_FORMAT_VERSION};
use crate::error::PersistenceError;
use crate::progression::ProgressionRecord;
use crate::settings::SettingsRecord;

fn default_version() -> u32 {
    SAVE_FORMAT_VERSION
}

fn default_current_level() -> u32 {
    FIRST_LEVEL
}

/// Everything that survives a restart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Document format version (absent in the earliest documents)
    #[serde(default = "default_version")]
    pub version: u32,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub unlocked_levels: BTreeSet<u32>,
    /// Level last started (absent in the earliest documents)
    #[serde(default = "default_current_level")]
    pub current_level: u32,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self::from_parts(&SettingsRecord::default(), &ProgressionRecord::default())
    }
}

impl PersistedState {
    pub fn from_parts(settings: &SettingsRecord, progression: &ProgressionRecord) -> Self {
        Self {
            version: SAVE_FORMAT_VERSION,
            music_volume: settings.music_volume,
            sfx_volume: settings.sfx_volume,
            unlocked_levels: progression.unlocked_levels.clone(),
            current_level: progression.current_level,
        }
    }

    pub fn settings(&self) -> SettingsRecord {
        SettingsRecord {
            music_volume: self.music_volume,
            sfx_volume: self.sfx_volume,
        }
    }

    pub fn progression(&self) -> ProgressionRecord {
        ProgressionRecord {
            unlocked_levels: self.unlocked_levels.clone(),
            current_level: self.current_level,
        }
    }
}

/// Stateless gateway to the document at a fixed path
#[derive(Debug, Clone)]
pub struct PersistenceStore {
    path: PathBuf,
}

impl PersistenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. `Ok(None)` means it does not exist yet (first run).
    pub fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let state: PersistedState = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        if state.version > SAVE_FORMAT_VERSION {
            log::warn!(
                "Player data version {} is newer than supported version {}, loading best effort",
                state.version,
                SAVE_FORMAT_VERSION
            );
        }
        log::info!(
            "Loaded player data from {} ({} levels unlocked)",
            self.path.display(),
            state.unlocked_levels.len()
        );
        Ok(Some(state))
    }

    /// Serialize the full state and replace the document
    pub fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(state).map_err(PersistenceError::Serialize)?;
        atomic::write_text_atomic(&self.path, &json).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Player data saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_in(dir: &tempfile::TempDir) -> PersistenceStore {
        PersistenceStore::new(dir.path().join("playerdata.json"))
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        let state = PersistedState {
            version: SAVE_FORMAT_VERSION,
            music_volume: 0.35,
            sfx_volume: 0.8,
            unlocked_levels: BTreeSet::from([1, 2, 5]),
            current_level: 5,
        };
        store.save(&state).expect("save");

        assert_eq!(store.load().expect("load"), Some(state));
    }

    proptest! {
        #[test]
        fn prop_save_then_load_returns_same_state(
            music_volume in 0.0f32..=1.0,
            sfx_volume in 0.0f32..=1.0,
            unlocked_levels in prop::collection::btree_set(1u32..50, 1..10),
            current_level in 1u32..50,
        ) {
            let dir = tempfile::tempdir().expect("tempdir");
            let store = store_in(&dir);
            let state = PersistedState {
                version: SAVE_FORMAT_VERSION,
                music_volume,
                sfx_volume,
                unlocked_levels,
                current_level,
            };

            store.save(&state).expect("save");
            prop_assert_eq!(store.load().expect("load"), Some(state));
        }
    }

    #[test]
    fn test_document_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.save(&PersistedState::default()).expect("save");

        let json = fs::read_to_string(store.path()).expect("read");
        assert!(json.contains('\n'), "document should be pretty-printed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["musicVolume"], serde_json::json!(1.0));
        assert_eq!(value["sfxVolume"], serde_json::json!(1.0));
        assert_eq!(value["unlockedLevels"], serde_json::json!([1]));
        assert_eq!(value["currentLevel"], serde_json::json!(1));
        assert_eq!(value["version"], serde_json::json!(SAVE_FORMAT_VERSION));
    }

    #[test]
    fn test_loads_document_without_optional_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{ "musicVolume": 0.5, "sfxVolume": 0.25, "unlockedLevels": [3, 1, 2] }"#,
        )
        .expect("write");

        let state = store.load().expect("load").expect("present");
        assert_eq!(state.version, SAVE_FORMAT_VERSION);
        assert_eq!(state.current_level, 1);
        assert_eq!(state.unlocked_levels, BTreeSet::from([1, 2, 3]));
        assert_eq!(state.music_volume, 0.5);
    }

    #[test]
    fn test_malformed_reports_field_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{ "musicVolume": "loud", "sfxVolume": 1.0, "unlockedLevels": [1] }"#,
        )
        .expect("write");

        match store.load() {
            Err(PersistenceError::Malformed { source, .. }) => {
                assert_eq!(source.path().to_string(), "musicVolume");
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_document_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(store.path(), r#"{ "musicVolume": 0.5, "sfxVol"#).expect("write");

        assert!(matches!(store.load(), Err(PersistenceError::Malformed { .. })));
    }

    #[test]
    fn test_directory_in_place_of_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PersistenceStore::new(dir.path());

        assert!(matches!(store.load(), Err(PersistenceError::Read { .. })));
    }
}
