//! Cross-platform clipboard access.
//!
//! This crate provides a unified API for reading and writing plain text on the
//! system clipboard across macOS, Windows, Linux, Android, and iOS.

#![warn(missing_docs)]

/// Platform-specific clipboard backends.
pub mod sys;

pub use sys::{get_text, is_supported, set_text};

/// Errors that can occur when writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The platform rejected the operation.
    #[error("platform error: {0}")]
    Platform(String),
    /// The backend needs host initialization first.
    #[error("clipboard not initialized: {0}")]
    NotInitialized(&'static str),
    /// There is no clipboard on this platform.
    #[error("clipboard not supported on this platform")]
    NotSupported,
}
