//! Application modes and the transition table

/// Screen/mode the application is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Title screen (initial mode)
    #[default]
    MainMenu,
    /// Volume settings
    SettingsMenu,
    /// Level picker
    LevelSelection,
    /// A level is running
    Playing,
    /// A level is running but game time is frozen
    Paused,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::MainMenu => "MainMenu",
            SessionMode::SettingsMenu => "SettingsMenu",
            SessionMode::LevelSelection => "LevelSelection",
            SessionMode::Playing => "Playing",
            SessionMode::Paused => "Paused",
        }
    }

    /// Where a transition leads from this mode, or `None` if it does not apply here
    pub fn apply(self, transition: Transition) -> Option<SessionMode> {
        match (self, transition) {
            (_, Transition::StartGame) => Some(SessionMode::Playing),
            (_, Transition::ReturnToMainMenu) => Some(SessionMode::MainMenu),
            (_, Transition::OpenSettings) => Some(SessionMode::SettingsMenu),
            (_, Transition::OpenLevelSelection) => Some(SessionMode::LevelSelection),
            (SessionMode::Playing, Transition::Pause) => Some(SessionMode::Paused),
            (SessionMode::Paused, Transition::Resume) => Some(SessionMode::Playing),
            (_, Transition::Pause | Transition::Resume) => None,
        }
    }
}

/// Requested mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartGame,
    ReturnToMainMenu,
    OpenSettings,
    OpenLevelSelection,
    Pause,
    Resume,
}
