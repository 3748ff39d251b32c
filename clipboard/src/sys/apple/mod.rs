//! Apple platform (iOS/macOS) clipboard implementation using swift-bridge.

use crate::ClipboardError;

#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn clipboard_get_text() -> Option<String>;
        fn clipboard_set_text(text: String) -> bool;
    }
}

/// Get text from the Apple system clipboard.
#[must_use]
pub fn get_text() -> Option<String> {
    ffi::clipboard_get_text()
}

/// Set text to the Apple system clipboard.
///
/// The general pasteboard has no clip labels, so `label` is ignored.
///
/// # Errors
/// Returns an error if the pasteboard refuses the write.
pub fn set_text(text: &str, _label: Option<&str>) -> Result<(), ClipboardError> {
    if ffi::clipboard_set_text(text.to_string()) {
        Ok(())
    } else {
        Err(ClipboardError::Platform("pasteboard rejected the text".into()))
    }
}

/// Whether this platform has a clipboard.
#[must_use]
pub const fn is_supported() -> bool {
    true
}
