//! Test collaborators that journal every call in order.

use std::cell::RefCell;
use std::rc::Rc;

use super::{AudioOutput, GameClock, Platform, Presentation, Scene, SceneLoader, TimeFlow};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformCall {
    ShowMainMenu,
    ShowSettingsMenu,
    ShowLevelSelection(Vec<u32>),
    ShowPauseMenu,
    HidePauseMenu,
    MusicVolume(f32),
    EffectsVolume(f32),
    LoadScene(Scene),
    TimeFlow(TimeFlow),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<PlatformCall>>>);

impl Journal {
    fn push(&self, call: PlatformCall) {
        self.0.borrow_mut().push(call);
    }

    /// Drain everything recorded so far
    pub(crate) fn take(&self) -> Vec<PlatformCall> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

struct Recorder(Journal);

impl Presentation for Recorder {
    fn show_main_menu(&mut self) {
        self.0.push(PlatformCall::ShowMainMenu);
    }

    fn show_settings_menu(&mut self) {
        self.0.push(PlatformCall::ShowSettingsMenu);
    }

    fn show_level_selection(&mut self, unlocked: &[u32]) {
        self.0.push(PlatformCall::ShowLevelSelection(unlocked.to_vec()));
    }

    fn show_pause_menu(&mut self) {
        self.0.push(PlatformCall::ShowPauseMenu);
    }

    fn hide_pause_menu(&mut self) {
        self.0.push(PlatformCall::HidePauseMenu);
    }
}

impl AudioOutput for Recorder {
    fn set_music_volume(&mut self, vol: f32) {
        self.0.push(PlatformCall::MusicVolume(vol));
    }

    fn set_effects_volume(&mut self, vol: f32) {
        self.0.push(PlatformCall::EffectsVolume(vol));
    }
}

impl SceneLoader for Recorder {
    fn load_scene(&mut self, scene: Scene) {
        self.0.push(PlatformCall::LoadScene(scene));
    }
}

impl GameClock for Recorder {
    fn set_time_flow(&mut self, flow: TimeFlow) {
        self.0.push(PlatformCall::TimeFlow(flow));
    }
}

/// A platform whose collaborators all write into one shared journal
pub(crate) fn recording_platform() -> (Platform, Journal) {
    let journal = Journal::default();
    let platform = Platform {
        presentation: Box::new(Recorder(journal.clone())),
        audio: Box::new(Recorder(journal.clone())),
        scenes: Box::new(Recorder(journal.clone())),
        clock: Box::new(Recorder(journal.clone())),
    };
    (platform, journal)
}
