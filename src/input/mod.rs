use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasteError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard is empty")]
    Empty,
}

pub mod clipboard;
pub mod controller;

pub use controller::{Change, InputController, KeyOutcome, Phase};
