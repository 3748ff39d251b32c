//! iOS provider using swift-bridge.
//!
//! The Swift side presents `UIActivityViewController` and
//! `SFSafariViewController` on the main queue and reports back through the
//! `extern "Rust"` callbacks below, matched up by callback id.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::{
    BrowserSurface, CapabilityProvider, DismissSender, Dismissal, EmbeddedBrowser, ShareError,
    SharePayload,
};

const PRESENTED: i32 = 0;
const NO_PRESENTER: i32 = 1;
/// The presenter was busy or the URL was rejected; UIKit would not present.
const PRESENT_FAILED: i32 = 2;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn callbacks() -> &'static Mutex<HashMap<u64, oneshot::Sender<i32>>> {
    static LOCK: OnceLock<Mutex<HashMap<u64, oneshot::Sender<i32>>>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(HashMap::new()))
}

fn dismissals() -> &'static Mutex<HashMap<u64, DismissSender>> {
    static LOCK: OnceLock<Mutex<HashMap<u64, DismissSender>>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(HashMap::new()))
}

#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn share_has_foreground_context() -> bool;
        fn share_present_activity(
            text: Option<String>,
            url: Option<String>,
            image: Vec<u8>,
            subject: Option<String>,
            excluded: String,
            cb_id: u64,
        );
        fn share_open_safari(url: String, reader_mode: bool, cb_id: u64, dismiss_id: u64);
        fn share_open_url(url: String, cb_id: u64);
    }

    extern "Rust" {
        fn on_share_result(cb_id: u64, status: i32);
        fn on_browser_dismissed(dismiss_id: u64);
    }
}

fn on_share_result(cb_id: u64, status: i32) {
    let sender = callbacks()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&cb_id);
    if let Some(tx) = sender {
        let _ = tx.send(status);
    }
}

fn on_browser_dismissed(dismiss_id: u64) {
    let sender = dismissals()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&dismiss_id);
    if let Some(tx) = sender {
        tx.dismissed();
    }
}

fn register() -> (u64, oneshot::Receiver<i32>) {
    let (tx, rx) = oneshot::channel();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    callbacks()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id, tx);
    (id, rx)
}

async fn status(rx: oneshot::Receiver<i32>, what: &str) -> Result<(), ShareError> {
    match rx.await {
        Ok(PRESENTED) => Ok(()),
        Ok(NO_PRESENTER) => Err(ShareError::NoForegroundContext),
        Ok(PRESENT_FAILED) => Err(ShareError::Presentation(format!(
            "{what} could not be presented"
        ))),
        Ok(code) => Err(ShareError::Presentation(format!("{what} failed with status {code}"))),
        Err(_) => Err(ShareError::Presentation(format!("{what} callback dropped"))),
    }
}

/// Provider backed by UIKit and `SafariServices`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppleProvider;

#[async_trait]
impl CapabilityProvider for AppleProvider {
    fn name(&self) -> &'static str {
        "ios"
    }

    fn browser_surface(&self) -> Option<BrowserSurface> {
        Some(BrowserSurface::FullScreen)
    }

    fn has_foreground_context(&self) -> bool {
        ffi::share_has_foreground_context()
    }

    async fn present_share(&self, payload: SharePayload) -> Result<(), ShareError> {
        let (id, rx) = register();
        let image = payload.attachment.map(|a| a.data).unwrap_or_default();

        ffi::share_present_activity(
            payload.text,
            payload.url,
            image,
            payload.subject,
            payload.excluded_targets.join("\n"),
            id,
        );

        status(rx, "activity sheet").await
    }

    async fn open_external(&self, url: &str) -> Result<(), ShareError> {
        let (id, rx) = register();
        ffi::share_open_url(url.to_string(), id);
        status(rx, "open url").await
    }

    async fn open_embedded(
        &self,
        url: &str,
        browser: EmbeddedBrowser,
    ) -> Result<Dismissal, ShareError> {
        let (id, rx) = register();
        let (dismiss_tx, dismissal) = Dismissal::channel();
        let dismiss_id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        dismissals()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(dismiss_id, dismiss_tx);

        ffi::share_open_safari(url.to_string(), browser.reader_mode, id, dismiss_id);

        if let Err(e) = status(rx, "safari view controller").await {
            dismissals()
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&dismiss_id);
            return Err(e);
        }
        Ok(dismissal)
    }

    fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> Result<(), ShareError> {
        sharekit_clipboard::set_text(text, label).map_err(ShareError::from)
    }

    fn supports_clipboard(&self) -> bool {
        sharekit_clipboard::is_supported()
    }
}
