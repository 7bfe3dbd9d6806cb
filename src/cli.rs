use std::path::PathBuf;

use clap::Parser;
use crossterm::event::KeyCode;
use log::LevelFilter;

use crate::engine::{Config, ConfigError, Options};
use crate::logging::DEFAULT_LOG_FILE;

/// Collect email addresses as chips in the terminal and print them on exit.
#[derive(Parser, Debug)]
#[command(name = "emails-input", version)]
pub struct Cli {
    /// Text shown in the empty field
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Regex used to split pasted text into addresses
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Regex an address must match to count as valid
    #[arg(long)]
    pub pattern: Option<String>,

    /// Key that turns the typed text into a chip: enter, tab, space, or a
    /// single character. Repeat to add more; replaces the default set.
    #[arg(long = "commit-key", value_parser = parse_commit_key)]
    pub commit_keys: Vec<KeyCode>,

    /// Where to write the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            commit_keys: if self.commit_keys.is_empty() {
                None
            } else {
                Some(self.commit_keys.clone())
            },
            paste_delimiter: self.delimiter.clone(),
            validity_pattern: self.pattern.clone(),
            placeholder: self.placeholder.clone(),
            ..Options::default()
        }
    }

    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::from_options(self.options())
    }
}

pub fn parse_commit_key(input: &str) -> Result<KeyCode, String> {
    match input.to_ascii_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        "comma" => Ok(KeyCode::Char(',')),
        "semicolon" => Ok(KeyCode::Char(';')),
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCode::Char(c)),
                _ => Err(format!("unknown commit key: {input}")),
            }
        }
    }
}
