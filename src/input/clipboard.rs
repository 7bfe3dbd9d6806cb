use super::PasteError;

/// Reads the system clipboard as text for `Ctrl+V` pastes.
///
/// Terminals with bracketed paste deliver the text themselves; this is the
/// fallback when the key press reaches us instead.
pub fn read_text() -> Result<String, PasteError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PasteError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| PasteError::Clipboard(e.to_string()))?;

    if text.is_empty() {
        return Err(PasteError::Empty);
    }

    Ok(text)
}
