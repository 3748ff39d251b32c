use sharekit_clipboard::ClipboardError;
use thiserror::Error;

/// Errors reported by a [`CapabilityProvider`](crate::CapabilityProvider).
///
/// These never reach callers of [`Share`](crate::Share): the adapter logs
/// presentation failures and turns clipboard failures into `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// There is no active window or activity to present from.
    #[error("no foreground window or activity to present from")]
    NoForegroundContext,

    /// The native share or browser surface could not be presented.
    #[error("presentation failed: {0}")]
    Presentation(String),

    /// The clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The capability does not exist on this platform.
    #[error("not supported on this platform: {0}")]
    NotSupported(&'static str),

    /// The platform backend has not been initialized by the host.
    #[error("platform backend not initialized: {0}")]
    NotInitialized(&'static str),
}

/// The two failure kinds a caller could ever observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A share sheet or browser could not be shown. Logged only.
    Presentation,
    /// The clipboard write failed. Reported as `false`.
    Clipboard,
}

impl ShareError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Clipboard(_) => FailureKind::Clipboard,
            Self::NoForegroundContext
            | Self::Presentation(_)
            | Self::NotSupported(_)
            | Self::NotInitialized(_) => FailureKind::Presentation,
        }
    }
}

impl From<ClipboardError> for ShareError {
    fn from(err: ClipboardError) -> Self {
        Self::Clipboard(err.to_string())
    }
}
