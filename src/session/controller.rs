//! The session controller
//!
//! Single owner of the live mode, progression and settings. Every mode change,
//! level completion and settings change goes through here, and this is the
//! only place that decides when the player data document is written:
//! - first run (or malformed document): defaults saved during `init`
//! - every `complete_level`
//! - every applied volume change
//! - `shutdown`

use crate::config::SessionConfig;
use crate::error::{PersistenceError, SessionError};
use crate::persistence::{PersistedState, PersistenceStore};
use crate::platform::{Platform, Scene, TimeFlow};
use crate::progression::ProgressionModel;
use crate::settings::{SettingsModel, SettingsRecord};

use super::mode::{SessionMode, Transition};

pub struct SessionController {
    mode: SessionMode,
    progression: ProgressionModel,
    settings: SettingsModel,
    store: PersistenceStore,
    platform: Platform,
}

impl SessionController {
    /// Load (or create) player data, apply settings and enter the main menu.
    ///
    /// Fails only when an existing document cannot be read at all; a missing or
    /// malformed document is replaced with defaults.
    pub fn init(config: SessionConfig, platform: Platform) -> Result<Self, SessionError> {
        let store = PersistenceStore::new(config.save_path);

        let (state, fresh) = match store.load() {
            Ok(Some(state)) => (state, false),
            Ok(None) => {
                log::info!(
                    "No player data at {}, starting with defaults",
                    store.path().display()
                );
                (PersistedState::default(), true)
            }
            Err(PersistenceError::Malformed { path, source }) => {
                log::warn!(
                    "Player data at {} is malformed ({source}), resetting to defaults",
                    path.display()
                );
                (PersistedState::default(), true)
            }
            Err(error) => return Err(error.into()),
        };

        let mut session = Self {
            mode: SessionMode::MainMenu,
            progression: ProgressionModel::from_record(state.progression(), config.total_levels),
            settings: SettingsModel::from_record(state.settings()),
            store,
            platform,
        };

        if fresh {
            // Not fatal: the next save retries.
            if let Err(error) = session.save() {
                log::error!("Could not write default player data: {error}");
            }
        }

        session.settings.apply_all(&mut *session.platform.audio);
        session.platform.presentation.show_main_menu();
        log::info!(
            "Session ready: {} of {} levels unlocked",
            session.progression.unlocked_levels().len(),
            session.progression.total_levels()
        );
        Ok(session)
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn progression(&self) -> &ProgressionModel {
        &self.progression
    }

    pub fn settings(&self) -> SettingsRecord {
        self.settings.record()
    }

    pub fn is_level_unlocked(&self, level: u32) -> bool {
        self.progression.is_level_unlocked(level)
    }

    /// Current state in its persisted shape
    pub fn snapshot(&self) -> PersistedState {
        PersistedState::from_parts(&self.settings.record(), self.progression.record())
    }

    /// Write the current state to the player data document
    pub fn save(&self) -> Result<(), SessionError> {
        self.store.save(&self.snapshot())?;
        Ok(())
    }

    // === Transitions ===

    /// Start (or restart) a level. Does not check whether it is unlocked.
    pub fn start_game(&mut self, level: u32) {
        self.transition(Transition::StartGame);
        self.progression.set_current_level(level);
        self.platform.scenes.load_scene(Scene::Level(level));
        log::info!("Started level {level}");
    }

    /// Start a level only if it is unlocked. Returns whether it started.
    pub fn start_unlocked_level(&mut self, level: u32) -> bool {
        if !self.progression.is_level_unlocked(level) {
            log::debug!("Level {level} is locked, not starting");
            return false;
        }
        self.start_game(level);
        true
    }

    pub fn return_to_main_menu(&mut self) {
        self.transition(Transition::ReturnToMainMenu);
        self.platform.scenes.load_scene(Scene::MainMenu);
        self.platform.presentation.show_main_menu();
    }

    pub fn open_settings(&mut self) {
        self.transition(Transition::OpenSettings);
        self.platform.presentation.show_settings_menu();
    }

    pub fn open_level_selection(&mut self) {
        self.transition(Transition::OpenLevelSelection);
        let unlocked = self.progression.unlocked_levels();
        self.platform.presentation.show_level_selection(&unlocked);
    }

    /// Freeze game time. Only applies while playing; returns whether it did.
    pub fn pause_game(&mut self) -> bool {
        if !self.transition(Transition::Pause) {
            return false;
        }
        self.platform.clock.set_time_flow(TimeFlow::Frozen);
        self.platform.presentation.show_pause_menu();
        true
    }

    /// Unfreeze game time. Only applies while paused; returns whether it did.
    pub fn resume_game(&mut self) -> bool {
        // Leaving Paused restores the clock and hides the menu
        self.transition(Transition::Resume)
    }

    /// Finish the current level: unlock the next one, save, go to level selection.
    ///
    /// The mode changes even if the save fails; the write error is returned
    /// afterwards.
    pub fn complete_level(&mut self) -> Result<(), SessionError> {
        let current = self.progression.current_level();
        if self.progression.unlock_next_level() {
            log::info!("Level {} unlocked", current + 1);
        }
        let saved = self.save();
        self.open_level_selection();
        saved
    }

    // === Settings ===

    /// Set music volume (clamped to 0.0 - 1.0) and save. NaN is ignored.
    pub fn set_music_volume(&mut self, vol: f32) -> Result<(), SessionError> {
        match self.settings.set_music_volume(vol, &mut *self.platform.audio) {
            Some(_) => self.save(),
            None => Ok(()),
        }
    }

    /// Set sound effects volume (clamped to 0.0 - 1.0) and save. NaN is ignored.
    pub fn set_sfx_volume(&mut self, vol: f32) -> Result<(), SessionError> {
        match self.settings.set_sfx_volume(vol, &mut *self.platform.audio) {
            Some(_) => self.save(),
            None => Ok(()),
        }
    }

    /// Orderly shutdown hook: always saves
    pub fn shutdown(&mut self) -> Result<(), SessionError> {
        log::info!("Session shutting down in {}", self.mode.as_str());
        self.save()
    }

    /// Apply a transition. Returns false (and changes nothing) if it does not
    /// apply in the current mode.
    fn transition(&mut self, transition: Transition) -> bool {
        let Some(next) = self.mode.apply(transition) else {
            log::debug!("Ignoring {:?} in {}", transition, self.mode.as_str());
            return false;
        };

        let previous = std::mem::replace(&mut self.mode, next);
        if previous == SessionMode::Paused && next != SessionMode::Paused {
            self.platform.clock.set_time_flow(TimeFlow::Running);
            self.platform.presentation.hide_pause_menu();
        }
        log::debug!("{} -> {}", previous.as_str(), next.as_str());
        true
    }
}
