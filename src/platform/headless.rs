//! Collaborators for running without a UI: everything is logged.

use super::{GameClock, Presentation, Scene, SceneLoader, TimeFlow};

#[derive(Debug, Default)]
pub struct HeadlessPresentation;

impl Presentation for HeadlessPresentation {
    fn show_main_menu(&mut self) {
        log::info!("[ui] main menu");
    }

    fn show_settings_menu(&mut self) {
        log::info!("[ui] settings menu");
    }

    fn show_level_selection(&mut self, unlocked: &[u32]) {
        log::info!("[ui] level selection, unlocked {unlocked:?}");
    }

    fn show_pause_menu(&mut self) {
        log::info!("[ui] pause menu shown");
    }

    fn hide_pause_menu(&mut self) {
        log::info!("[ui] pause menu hidden");
    }
}

#[derive(Debug, Default)]
pub struct HeadlessScenes;

impl SceneLoader for HeadlessScenes {
    fn load_scene(&mut self, scene: Scene) {
        log::info!("[scene] loading {scene}");
    }
}

#[derive(Debug, Default)]
pub struct HeadlessClock {
    flow: TimeFlow,
}

impl HeadlessClock {
    #[cfg(test)]
    fn flow(&self) -> TimeFlow {
        self.flow
    }
}

impl GameClock for HeadlessClock {
    fn set_time_flow(&mut self, flow: TimeFlow) {
        if self.flow != flow {
            log::debug!("[clock] {:?} -> {:?}", self.flow, flow);
        }
        self.flow = flow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_tracks_flow() {
        let mut clock = HeadlessClock::default();
        assert_eq!(clock.flow(), TimeFlow::Running);
        clock.set_time_flow(TimeFlow::Frozen);
        assert_eq!(clock.flow(), TimeFlow::Frozen);
    }
}
