//! Platform abstraction layer
//!
//! The session core talks to the outside world only through these traits:
//! - Presentation (menus)
//! - Audio output
//! - Scene loading
//! - Game clock (pause flag)
//!
//! All calls are synchronous and happen on the thread that owns the session.

mod headless;

#[cfg(test)]
pub(crate) mod recording;

pub use headless::{HeadlessClock, HeadlessPresentation, HeadlessScenes};

use std::fmt;

use crate::audio::Mixer;

/// Menus and overlays shown by the host UI
pub trait Presentation {
    fn show_main_menu(&mut self);
    fn show_settings_menu(&mut self);
    /// Show the level picker with the currently unlocked levels (ascending)
    fn show_level_selection(&mut self, unlocked: &[u32]);
    fn show_pause_menu(&mut self);
    fn hide_pause_menu(&mut self);
}

/// Volume sink with separate music and effects channels
pub trait AudioOutput {
    fn set_music_volume(&mut self, vol: f32);
    fn set_effects_volume(&mut self, vol: f32);
}

/// Loads the scene backing a mode
pub trait SceneLoader {
    fn load_scene(&mut self, scene: Scene);
}

/// Global game-time flag
pub trait GameClock {
    fn set_time_flow(&mut self, flow: TimeFlow);
}

/// Scene to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    MainMenu,
    Level(u32),
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scene::MainMenu => write!(f, "MainMenu"),
            Scene::Level(level) => write!(f, "Level{level}"),
        }
    }
}

/// Whether game time advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFlow {
    #[default]
    Running,
    Frozen,
}

/// The collaborators a session is wired to
pub struct Platform {
    pub presentation: Box<dyn Presentation>,
    pub audio: Box<dyn AudioOutput>,
    pub scenes: Box<dyn SceneLoader>,
    pub clock: Box<dyn GameClock>,
}

impl Platform {
    /// Log-only collaborators plus a native mixer, for tools and the console binary
    pub fn headless() -> Self {
        Self {
            presentation: Box::new(HeadlessPresentation),
            audio: Box::new(Mixer::new()),
            scenes: Box::new(HeadlessScenes),
            clock: Box::new(HeadlessClock::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_names() {
        assert_eq!(Scene::MainMenu.to_string(), "MainMenu");
        assert_eq!(Scene::Level(4).to_string(), "Level4");
    }
}
