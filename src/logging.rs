//! Logger setup.
//!
//! The terminal belongs to the UI while the control runs, so the binary logs
//! to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

pub const DEFAULT_LOG_FILE: &str = "./emails-input.log";

/// Installs a file logger at `path`. Returns `false`, after reporting on
/// stderr, when the file cannot be created or a logger is already set.
pub fn initialize(path: &Path, level: LevelFilter) -> bool {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            return false;
        }
    };

    match WriteLogger::init(level, build_config(), file) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Warning: Could not install logger for {:?}: {}", path, err);
            false
        }
    }
}

/// Terminal logger for tests. No-ops if a logger is already installed.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
