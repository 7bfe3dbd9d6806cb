use crossterm::event::KeyCode;

/// Application events, already stripped of terminal details
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// Key press aimed at the text field
    Key(KeyCode),
    /// Text delivered by a bracketed paste
    Paste(String),
    /// `Ctrl+V`: paste from the system clipboard
    PasteFromClipboard,
    /// Click inside the container
    Focus,
    /// Field lost focus (Esc, click outside, terminal focus lost)
    Blur,
    /// A chip's remove control was activated
    Remove(String),
    Quit,
}
