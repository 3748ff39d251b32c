//! Desktop (Windows, Linux, macOS) provider.
//!
//! Desktops have no share sheet and no in-app browser. Shares go to the
//! default mail handler as a `mailto:` link, URLs go to the default browser.

use async_trait::async_trait;
use futures::channel::oneshot;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{
    BrowserSurface, CapabilityProvider, Dismissal, EmbeddedBrowser, ShareError, SharePayload,
};

#[cfg(target_os = "windows")]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(target_os = "windows"))]
const LINE_SEPARATOR: &str = "\n";

/// Provider backed by the desktop's default URL handlers and clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopProvider;

/// Build the `mailto:` link a share is sent through.
#[must_use]
pub fn mailto_uri(payload: &SharePayload) -> String {
    let mut params = Vec::new();
    if let Some(subject) = &payload.subject {
        params.push(format!("subject={}", utf8_percent_encode(subject, NON_ALPHANUMERIC)));
    }
    let body = payload.joined_text(LINE_SEPARATOR);
    if !body.is_empty() {
        params.push(format!("body={}", utf8_percent_encode(&body, NON_ALPHANUMERIC)));
    }

    if params.is_empty() {
        "mailto:".to_string()
    } else {
        format!("mailto:?{}", params.join("&"))
    }
}

/// Open `target` with its default handler on a helper thread.
async fn launch(target: String) -> Result<(), ShareError> {
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        let _ = tx.send(open::that(&target));
    });

    rx.await
        .map_err(|_| ShareError::Presentation("launcher thread panicked".into()))?
        .map_err(|e| ShareError::Presentation(e.to_string()))
}

#[async_trait]
impl CapabilityProvider for DesktopProvider {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn browser_surface(&self) -> Option<BrowserSurface> {
        None
    }

    fn has_foreground_context(&self) -> bool {
        true
    }

    fn accepts_attachment(&self, _mime_type: &str) -> bool {
        false
    }

    async fn present_share(&self, payload: SharePayload) -> Result<(), ShareError> {
        launch(mailto_uri(&payload)).await
    }

    async fn open_external(&self, url: &str) -> Result<(), ShareError> {
        launch(url.to_string()).await
    }

    async fn open_embedded(
        &self,
        _url: &str,
        _browser: EmbeddedBrowser,
    ) -> Result<Dismissal, ShareError> {
        Err(ShareError::NotSupported("in-app browser"))
    }

    fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> Result<(), ShareError> {
        sharekit_clipboard::set_text(text, label).map_err(ShareError::from)
    }

    fn supports_clipboard(&self) -> bool {
        sharekit_clipboard::is_supported()
    }
}
