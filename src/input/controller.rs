//! Input controller for the token field
//!
//! Turns the three field events that matter into store operations:
//! - a commit key (Enter or `,` by default) submits the buffer
//! - focus loss submits the buffer and always empties the field
//! - a paste is split on the delimiter once the pasted text is in the field
//!
//! ## Paste ordering
//!
//! A paste event arrives before the platform has put the pasted text into
//! the field. `handle_paste` therefore only queues a continuation; the
//! terminal loop calls `run_pending` at the start of its next iteration,
//! after the text has landed and before the next event is read.

use std::collections::{HashSet, VecDeque};

use crossterm::event::KeyCode;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::{Config, Token, TokenNotFound, TokenRejected, TokenStore};

/// Controller phase. `Committing` only lasts for the duration of a commit
/// key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Committing,
}

/// Result of feeding a key to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a commit key. The platform applies the key normally.
    Ignored,
    /// Buffer accepted as a token and cleared.
    Committed(Token),
    /// Commit key pressed but the buffer was rejected. The buffer is left
    /// alone and the key is not suppressed.
    Rejected(TokenRejected),
}

impl KeyOutcome {
    /// Whether the key's own effect (inserting `,`, etc.) must be skipped.
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyOutcome::Committed(_))
    }
}

/// Store mutations reported back to whoever mirrors the store on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(Token),
    Removed(Token),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    SplitPaste,
}

#[derive(Debug)]
pub struct InputController {
    store: TokenStore,
    buffer: String,
    phase: Phase,
    pending: VecDeque<Deferred>,
    commit_keys: HashSet<KeyCode>,
    delimiter: Regex,
}

impl InputController {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TokenStore::new(config.validator.clone()),
            buffer: String::new(),
            phase: Phase::Idle,
            pending: VecDeque::new(),
            commit_keys: config.commit_keys.clone(),
            delimiter: config.paste_delimiter.clone(),
        }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Handles a key press in the field.
    pub fn handle_key(&mut self, key: KeyCode) -> KeyOutcome {
        if !self.commit_keys.contains(&key) {
            return KeyOutcome::Ignored;
        }

        self.enter(Phase::Committing);
        let outcome = match self.store.add(self.buffer.trim()) {
            Ok(token) => {
                self.clear_buffer();
                KeyOutcome::Committed(token)
            }
            Err(rejected) => KeyOutcome::Rejected(rejected),
        };
        self.enter(Phase::Idle);

        outcome
    }

    /// Handles the field losing focus. The buffer is emptied even when the
    /// store rejects it.
    pub fn handle_blur(&mut self) -> Result<Token, TokenRejected> {
        let result = self.store.add(self.buffer.trim());
        self.clear_buffer();
        result
    }

    /// Synchronous half of a paste: schedules the split for the next tick.
    pub fn handle_paste(&mut self) {
        log::debug!("paste received, split deferred");
        self.pending.push_back(Deferred::SplitPaste);
    }

    /// Runs every queued continuation and returns the tokens they added.
    pub fn run_pending(&mut self) -> Vec<Token> {
        let mut added = Vec::new();
        while let Some(task) = self.pending.pop_front() {
            match task {
                Deferred::SplitPaste => added.extend(self.split_buffer()),
            }
        }
        added
    }

    /// Removes a token by value.
    pub fn remove(&mut self, value: &str) -> Result<Token, TokenNotFound> {
        self.store.remove(value)
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn insert_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Deletes the last grapheme cluster. Returns `false` when the buffer
    /// was already empty.
    pub fn delete_grapheme(&mut self) -> bool {
        match self.buffer.grapheme_indices(true).next_back() {
            Some((index, _)) => {
                self.buffer.truncate(index);
                true
            }
            None => false,
        }
    }

    fn split_buffer(&mut self) -> Vec<Token> {
        let candidates: Vec<String> = self
            .delimiter
            .split(&self.buffer)
            .map(|part| part.trim().to_string())
            .collect();
        log::debug!("splitting pasted text into {} candidates", candidates.len());

        let added = candidates
            .iter()
            .filter_map(|candidate| self.store.add(candidate).ok())
            .collect();
        self.clear_buffer();
        added
    }

    // The only place the buffer is emptied.
    fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    fn enter(&mut self, phase: Phase) {
        log::trace!("controller {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
