//! Console commands for driving a session from text input

use std::str::FromStr;

use thiserror::Error;

use crate::error::SessionError;
use crate::session::SessionController;

/// A single console command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Start a level without checking unlocks
    Start(u32),
    /// Start a level only if unlocked
    Play(u32),
    Menu,
    Settings,
    Levels,
    Pause,
    Resume,
    Complete,
    Music(f32),
    Sfx(f32),
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{command} expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid argument {value:?} for {command}")]
    InvalidArgument { command: &'static str, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();

        match name.to_lowercase().as_str() {
            "start" => parse_arg(arg, "start", "a level number").map(Command::Start),
            "play" => parse_arg(arg, "play", "a level number").map(Command::Play),
            "menu" => Ok(Command::Menu),
            "settings" => Ok(Command::Settings),
            "levels" => Ok(Command::Levels),
            "pause" => Ok(Command::Pause),
            "resume" => Ok(Command::Resume),
            "complete" => Ok(Command::Complete),
            "music" => parse_arg(arg, "music", "a volume between 0 and 1").map(Command::Music),
            "sfx" => parse_arg(arg, "sfx", "a volume between 0 and 1").map(Command::Sfx),
            "status" => Ok(Command::Status),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_arg<T: FromStr>(
    arg: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<T, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument { command, expected })?;
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: raw.to_string(),
    })
}

impl Command {
    /// Run against a session. `Status` and `Quit` are left to the caller.
    pub fn execute(self, session: &mut SessionController) -> Result<(), SessionError> {
        match self {
            Command::Start(level) => session.start_game(level),
            Command::Play(level) => {
                if !session.start_unlocked_level(level) {
                    log::warn!("Level {level} is locked");
                }
            }
            Command::Menu => session.return_to_main_menu(),
            Command::Settings => session.open_settings(),
            Command::Levels => session.open_level_selection(),
            Command::Pause => {
                session.pause_game();
            }
            Command::Resume => {
                session.resume_game();
            }
            Command::Complete => session.complete_level()?,
            Command::Music(vol) => session.set_music_volume(vol)?,
            Command::Sfx(vol) => session.set_sfx_volume(vol)?,
            Command::Status | Command::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("start 3".parse::<Command>(), Ok(Command::Start(3)));
        assert_eq!("PLAY 2".parse::<Command>(), Ok(Command::Play(2)));
        assert_eq!("  pause  ".parse::<Command>(), Ok(Command::Pause));
        assert_eq!("music 0.5".parse::<Command>(), Ok(Command::Music(0.5)));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert!(matches!(
            "start".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "start",
                ..
            })
        ));
        assert!(matches!(
            "sfx loud".parse::<Command>(),
            Err(CommandError::InvalidArgument { command: "sfx", .. })
        ));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn test_execute_drives_session() {
        use crate::consts::SAVE_FILE_NAME;
        use crate::{Platform, SessionConfig, SessionMode};

        let dir = tempfile::tempdir().expect("tempdir");
        let config = SessionConfig::new(3, dir.path().join(SAVE_FILE_NAME));
        let mut session = SessionController::init(config, Platform::headless()).expect("init");

        for line in ["play 2", "start 1", "pause", "resume", "complete", "play 2"] {
            let command: Command = line.parse().expect("parse");
            command.execute(&mut session).expect("execute");
        }

        assert_eq!(session.mode(), SessionMode::Playing);
        assert_eq!(session.progression().current_level(), 2);
    }
}
