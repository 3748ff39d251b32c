use crate::ClipboardError;
use arboard::Clipboard;

/// Get text from the clipboard.
#[must_use]
pub fn get_text() -> Option<String> {
    Clipboard::new().ok()?.get_text().ok()
}

/// Set text to the clipboard.
///
/// Desktop clipboards have no clip labels, so `label` is ignored.
///
/// # Errors
/// Returns an error if the clipboard cannot be opened or rejects the text.
pub fn set_text(text: &str, _label: Option<&str>) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Platform(e.to_string()))
}

/// Whether this platform has a clipboard.
#[must_use]
pub const fn is_supported() -> bool {
    true
}
