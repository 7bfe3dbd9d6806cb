/// Focus state of the text field, plus the terminal `Quit` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Editing,
    Blurred,
    Quit,
}
