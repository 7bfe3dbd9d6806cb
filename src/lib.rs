//! Tag-style email input for the terminal.
//!
//! Addresses typed into the field become chips when a commit key is
//! pressed, when the field loses focus, or when text is pasted. Each chip
//! is unique and flagged valid or invalid when it is added.

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod logging;
pub mod ui;
