//! Arcade Session console
//!
//! Drives a session over the headless platform from stdin, one command per
//! line. Player data lives where `ARCADE_SESSION_DATA_DIR` points (or the
//! platform data directory).

use std::io::{self, BufRead};
use std::process::ExitCode;

use arcade_session::command::Command;
use arcade_session::{Platform, SessionConfig, SessionController};

const HELP: &str = "commands: start <n> | play <n> | menu | settings | levels | pause | resume | \
complete | music <0-1> | sfx <0-1> | status | quit";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = match SessionController::init(config, Platform::headless()) {
        Ok(session) => session,
        Err(error) => {
            log::error!("Failed to start session: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("{HELP}");
    print_status(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                log::error!("Failed to read input: {error}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(error) => {
                println!("{error}\n{HELP}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Err(error) = command.execute(&mut session) {
            // Progress is still live in memory; shutdown retries the write
            log::error!("{error}");
        }
        print_status(&session);
    }

    match session.shutdown() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Progress was not saved: {error}");
            ExitCode::FAILURE
        }
    }
}

fn print_status(session: &SessionController) {
    let progression = session.progression();
    let settings = session.settings();
    println!(
        "[{}] level {} | unlocked {:?} (up to {} of {}) | music {:.2} sfx {:.2}",
        session.mode().as_str(),
        progression.current_level(),
        progression.unlocked_levels(),
        progression.highest_unlocked(),
        progression.total_levels(),
        settings.music_volume,
        settings.sfx_volume
    );
}
