use crate::app::mode::AppMode;

/// Snapshot of everything outside the chip list that the view draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub mode: AppMode,
    pub buffer: String,
    pub placeholder: String,
    pub token_count: usize,
    pub invalid_count: usize,
}

impl RenderState {
    pub fn is_focused(&self) -> bool {
        self.mode == AppMode::Editing
    }

    /// Text shown in the field: the buffer, or the placeholder when empty
    pub fn field_text(&self) -> &str {
        if self.buffer.is_empty() {
            &self.placeholder
        } else {
            &self.buffer
        }
    }

    pub fn showing_placeholder(&self) -> bool {
        self.buffer.is_empty()
    }
}
