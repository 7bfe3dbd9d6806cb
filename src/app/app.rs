use crossterm::event::KeyCode;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{Config, Token};
use crate::input::{clipboard, Change, InputController, KeyOutcome};

/// One emails-input instance: its private configuration, the controller
/// that owns the token store, and the field's focus state.
pub struct App {
    mode: AppMode,
    config: Config,
    controller: InputController,
}

impl App {
    pub fn new(config: Config) -> Self {
        log::info!("emails-input created with {:?}", config);
        Self {
            mode: AppMode::Editing,
            controller: InputController::new(&config),
            config,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> &[Token] {
        self.controller.store().list()
    }

    pub fn buffer(&self) -> &str {
        self.controller.buffer()
    }

    /// Runs deferred work queued by earlier events. Called once per loop
    /// iteration, before the next event is read.
    pub fn tick(&mut self) -> Vec<Change> {
        self.controller
            .run_pending()
            .into_iter()
            .map(Change::Added)
            .collect()
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Change> {
        match event {
            AppEvent::Key(code) => {
                self.focus();
                self.handle_key(code)
            }
            AppEvent::Paste(text) => {
                self.focus();
                self.paste(&text);
                Vec::new()
            }
            AppEvent::PasteFromClipboard => {
                self.focus();
                match clipboard::read_text() {
                    Ok(text) => self.paste(&text),
                    Err(e) => log::warn!("paste ignored: {e}"),
                }
                Vec::new()
            }
            AppEvent::Focus => {
                self.focus();
                Vec::new()
            }
            AppEvent::Blur => self.blur(),
            AppEvent::Remove(value) => match self.controller.remove(&value) {
                Ok(token) => vec![Change::Removed(token)],
                Err(e) => {
                    log::debug!("stale remove request: {e}");
                    Vec::new()
                }
            },
            AppEvent::Quit => {
                let changes = self.blur();
                log::info!("quitting with {} tokens", self.tokens().len());
                self.mode = AppMode::Quit;
                changes
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let store = self.controller.store();
        RenderState {
            mode: self.mode,
            buffer: self.controller.buffer().to_string(),
            placeholder: self.config.placeholder.clone(),
            token_count: store.len(),
            invalid_count: store.invalid_count(),
        }
    }

    /// Final listing printed after the terminal is restored: one value per
    /// line, invalid ones tagged.
    pub fn summary(&self) -> String {
        self.tokens()
            .iter()
            .map(|token| {
                if token.is_valid {
                    token.value.clone()
                } else {
                    format!("{}\t(invalid)", token.value)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn handle_key(&mut self, code: KeyCode) -> Vec<Change> {
        let outcome = self.controller.handle_key(code);
        if !outcome.prevents_default() {
            self.apply_default(code);
        }

        match outcome {
            KeyOutcome::Committed(token) => vec![Change::Added(token)],
            KeyOutcome::Rejected(_) | KeyOutcome::Ignored => Vec::new(),
        }
    }

    // What the field does with a key nobody suppressed.
    fn apply_default(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.controller.insert_char(c),
            KeyCode::Backspace => {
                self.controller.delete_grapheme();
            }
            _ => {}
        }
    }

    // The platform applies the pasted text after the paste event has been
    // dispatched, so the split is queued first. The field is single-line:
    // line breaks are dropped on the way in.
    fn paste(&mut self, text: &str) {
        self.controller.handle_paste();
        let single_line: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        self.controller.insert_str(&single_line);
    }

    fn focus(&mut self) {
        if self.mode == AppMode::Blurred {
            log::trace!("field focused");
            self.mode = AppMode::Editing;
        }
    }

    fn blur(&mut self) -> Vec<Change> {
        if self.mode != AppMode::Editing {
            return Vec::new();
        }
        self.mode = AppMode::Blurred;

        match self.controller.handle_blur() {
            Ok(token) => vec![Change::Added(token)],
            Err(_) => Vec::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
