use crate::ClipboardError;

/// Get text from the clipboard. Always `None` here.
#[must_use]
pub const fn get_text() -> Option<String> {
    None
}

/// Set text to the clipboard.
///
/// # Errors
/// Always returns [`ClipboardError::NotSupported`].
pub const fn set_text(_text: &str, _label: Option<&str>) -> Result<(), ClipboardError> {
    Err(ClipboardError::NotSupported)
}

/// Whether this platform has a clipboard.
#[must_use]
pub const fn is_supported() -> bool {
    false
}
