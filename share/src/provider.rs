use async_trait::async_trait;

use crate::{
    BrowserSurface, Dismissal, EmbeddedBrowser, ShareError, SharePayload, request::is_image_type,
};

/// The native facility behind a platform adapter.
///
/// Implementations issue the platform calls and report every failure as a
/// [`ShareError`]; deciding what the caller sees is left to
/// [`Adapter`](crate::Adapter).
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// The in-app browser this provider can present, if any.
    fn browser_surface(&self) -> Option<BrowserSurface>;

    /// Whether a window or activity is available to present from.
    fn has_foreground_context(&self) -> bool;

    /// Whether an attachment of `mime_type` renders in the share surface.
    fn accepts_attachment(&self, mime_type: &str) -> bool {
        is_image_type(mime_type)
    }

    /// Present the share surface and wait until the user is done with it.
    async fn present_share(&self, payload: SharePayload) -> Result<(), ShareError>;

    /// Hand `url` to the system browser.
    async fn open_external(&self, url: &str) -> Result<(), ShareError>;

    /// Present an in-app browser. Resolves once it is on screen.
    async fn open_embedded(
        &self,
        url: &str,
        browser: EmbeddedBrowser,
    ) -> Result<Dismissal, ShareError>;

    /// Put `text` on the clipboard.
    fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> Result<(), ShareError>;

    /// Whether this provider has a clipboard at all. Must not change at runtime.
    fn supports_clipboard(&self) -> bool;
}
