pub mod chips;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use chips::ChipList;
pub use render::{render_chip, render_control, render_field, render_status};
pub use terminal::{Presenter, TuiManager};
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
