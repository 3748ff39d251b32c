use async_trait::async_trait;

use crate::{
    BrowserSurface, CapabilityProvider, Dismissal, EmbeddedBrowser, ShareError, SharePayload,
};

/// Provider for targets without any native share facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedProvider;

#[async_trait]
impl CapabilityProvider for UnsupportedProvider {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn browser_surface(&self) -> Option<BrowserSurface> {
        None
    }

    fn has_foreground_context(&self) -> bool {
        false
    }

    fn accepts_attachment(&self, _mime_type: &str) -> bool {
        false
    }

    async fn present_share(&self, _payload: SharePayload) -> Result<(), ShareError> {
        Err(ShareError::NotSupported("share sheet"))
    }

    async fn open_external(&self, _url: &str) -> Result<(), ShareError> {
        Err(ShareError::NotSupported("system browser"))
    }

    async fn open_embedded(
        &self,
        _url: &str,
        _browser: EmbeddedBrowser,
    ) -> Result<Dismissal, ShareError> {
        Err(ShareError::NotSupported("in-app browser"))
    }

    fn set_clipboard_text(&self, _text: &str, _label: Option<&str>) -> Result<(), ShareError> {
        Err(ShareError::NotSupported("clipboard"))
    }

    fn supports_clipboard(&self) -> bool {
        false
    }
}
