//! Arcade Session - screen flow, level progression and settings for a level-based game
//!
//! Core modules:
//! - `session`: Mode state machine and the controller that owns the live session
//! - `progression`: Unlocked levels and the current level pointer
//! - `settings`: Music/effects volume
//! - `persistence`: Save/load of the player data document
//! - `platform`: Collaborator seams (menus, audio, scenes, game clock)
//! - `config`: Runtime configuration from the environment

pub mod audio;
pub mod command;
pub mod config;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod progression;
pub mod session;
pub mod settings;

pub use config::SessionConfig;
pub use error::{ConfigError, PersistenceError, SessionError};
pub use persistence::{PersistedState, PersistenceStore};
pub use platform::{Platform, Scene, TimeFlow};
pub use progression::{ProgressionModel, ProgressionRecord};
pub use session::{SessionController, SessionMode, Transition};
pub use settings::{SettingsModel, SettingsRecord};

/// Game configuration constants
pub mod consts {
    /// Number of levels when nothing else is configured
    pub const DEFAULT_TOTAL_LEVELS: u32 = 7;
    /// The level every player starts with
    pub const FIRST_LEVEL: u32 = 1;
    /// Volume for both channels on first run
    pub const DEFAULT_VOLUME: f32 = 1.0;

    /// Directory under the platform data dir
    pub const APP_DIR_NAME: &str = "arcade-session";
    /// Player data document name
    pub const SAVE_FILE_NAME: &str = "playerdata.json";
    /// Format version written into new documents
    pub const SAVE_FORMAT_VERSION: u32 = 1;
}

/// Clamp a volume into [0.0, 1.0]. Returns `None` for NaN.
#[inline]
pub fn clamp_volume(vol: f32) -> Option<f32> {
    if vol.is_nan() {
        None
    } else {
        Some(vol.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(0.25), Some(0.25));
        assert_eq!(clamp_volume(-3.0), Some(0.0));
        assert_eq!(clamp_volume(7.5), Some(1.0));
        assert_eq!(clamp_volume(f32::INFINITY), Some(1.0));
        assert_eq!(clamp_volume(f32::NAN), None);
    }
}
