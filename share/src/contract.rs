use async_trait::async_trait;

use crate::{BrowserOptions, ShareRequest};

/// Share text, links and data, open URLs, and write the clipboard.
///
/// Every platform implements the same contract and none of the operations
/// can fail observably except [`set_clipboard_text`](Share::set_clipboard_text),
/// which reports `false`. A share sheet the user cancels and one that could
/// not be shown both just complete.
#[async_trait]
pub trait Share: Send + Sync {
    /// Present the native share surface for `request`.
    async fn share_request(&self, request: ShareRequest);

    /// Open `url`, in-app when possible and requested, otherwise in the
    /// system browser. `None` means default options.
    ///
    /// With an in-app browser whose dismissal the platform reports, this
    /// completes after the user closes it and after `on_dismissed` ran.
    async fn open_browser(&self, url: &str, options: Option<BrowserOptions>);

    /// Put `text` on the clipboard. `label` is used where clips carry one.
    async fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> bool;

    /// Whether the clipboard is available. Constant for the process lifetime.
    fn supports_clipboard(&self) -> bool;

    /// Share plain text. `title` becomes the sheet heading or mail subject.
    async fn share(&self, text: &str, title: Option<&str>) {
        self.share_request(ShareRequest::text(text).with_optional_title(title))
            .await;
    }

    /// Share a link with an optional message.
    async fn share_link(&self, url: &str, message: Option<&str>, title: Option<&str>) {
        let mut request = ShareRequest::link(url).with_optional_title(title);
        if let Some(message) = message {
            request = request.with_message(message);
        }
        self.share_request(request).await;
    }

    /// Share binary data with an optional link and message.
    ///
    /// Data the platform cannot render is dropped; the text still shares.
    async fn share_link_with_data(
        &self,
        data: Vec<u8>,
        mime_type: &str,
        url: Option<&str>,
        message: Option<&str>,
        title: Option<&str>,
    ) {
        let mut request = ShareRequest::attachment(data, mime_type).with_optional_title(title);
        if let Some(url) = url {
            request = request.with_url(url);
        }
        if let Some(message) = message {
            request = request.with_message(message);
        }
        self.share_request(request).await;
    }
}
