use crate::app::{App, AppEvent, AppMode};
use crate::ui::chips::{hit_test, ChipList, Hit, KeyRoute};
use crate::ui::render::{render_control, FrameLayout};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::{Palette, Theme};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal presenter: owns the screen, the chip mirror and the geometry of
/// the last frame.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    presenter: Presenter,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(app: &App) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            presenter: Presenter::new(Theme::new(&app.config().class_names, Palette::midnight())),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            // Deferred work runs before the next event is read.
            let changes = app.tick();
            self.presenter.chips.apply_all(&changes);

            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                self.presenter.dispatch(event, app);
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let presenter = &mut self.presenter;
        self.terminal.draw(|frame| {
            presenter.layout = render_control(frame, &presenter.chips, &state, &presenter.theme);
        })?;
        Ok(())
    }
}

/// The part of the view that does not touch the terminal: chip mirror,
/// theme, and translation of terminal events into app events.
#[derive(Debug, Default)]
pub struct Presenter {
    pub chips: ChipList,
    pub theme: Theme,
    pub layout: FrameLayout,
}

impl Presenter {
    pub fn new(theme: Theme) -> Self {
        Self {
            chips: ChipList::new(),
            theme,
            layout: FrameLayout::default(),
        }
    }

    /// Feeds one terminal event through the app and mirrors the result.
    pub fn dispatch(&mut self, event: Event, app: &mut App) {
        if let Some(app_event) = self.translate(event, app) {
            log::trace!("dispatching {:?}", app_event);
            if matches!(app_event, AppEvent::Blur | AppEvent::Quit) {
                self.chips.clear_selection();
            }
            let changes = app.handle_event(app_event);
            self.chips.apply_all(&changes);
        }
    }

    pub fn translate(&mut self, event: Event, app: &App) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.translate_key(key, app),
            Event::Paste(text) => Some(AppEvent::Paste(text)),
            Event::FocusLost => Some(AppEvent::Blur),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            _ => None,
        }
    }

    fn translate_key(&mut self, key: KeyEvent, app: &App) -> Option<AppEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(AppEvent::Quit),
                KeyCode::Char('v') => Some(AppEvent::PasteFromClipboard),
                _ => None,
            };
        }

        match self.chips.route_key(key.code, app.buffer().is_empty()) {
            KeyRoute::Consumed => None,
            KeyRoute::Remove(value) => Some(AppEvent::Remove(value)),
            KeyRoute::Field if key.code == KeyCode::Esc => Some(AppEvent::Blur),
            KeyRoute::Field => Some(AppEvent::Key(key.code)),
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent) -> Option<AppEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        match hit_test(
            &self.layout.slots,
            self.layout.container,
            mouse.column,
            mouse.row,
        ) {
            Hit::RemoveControl(value) => Some(AppEvent::Remove(value)),
            Hit::Chip(_) | Hit::Container => {
                self.chips.clear_selection();
                Some(AppEvent::Focus)
            }
            Hit::Outside => Some(AppEvent::Blur),
        }
    }
}
