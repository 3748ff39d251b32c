use std::future::Future;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;
use log::{debug, error, info, warn};

use crate::{
    BrowserLaunch, BrowserOptions, CapabilityProvider, FailureKind, Share, ShareError,
    ShareRequest, excluded_targets,
};

/// [`Share`] on top of a [`CapabilityProvider`].
///
/// Normalizes requests and options, then calls the provider exactly once per
/// operation. Provider errors and panics end here: presentation failures are
/// logged, clipboard failures become `false`.
#[derive(Debug, Default, Clone)]
pub struct Adapter<P> {
    provider: P,
}

impl<P: CapabilityProvider> Adapter<P> {
    /// Wrap `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    async fn open_external(&self, url: &str) {
        if let Err(e) = guarded(self.provider.open_external(url)).await {
            self.report("open browser", &e);
        }
    }

    fn report(&self, action: &str, err: &ShareError) {
        let name = self.provider.name();
        match (err.kind(), err) {
            (FailureKind::Presentation, ShareError::NotSupported(_)) => {
                debug!("{name}: unable to {action}: {err}");
            }
            (FailureKind::Presentation, _) => error!("{name}: unable to {action}: {err}"),
            (FailureKind::Clipboard, _) => warn!("{name}: unable to {action}: {err}"),
        }
    }
}

/// Run a provider call, turning a panic into a presentation failure.
async fn guarded<T>(call: impl Future<Output = Result<T, ShareError>>) -> Result<T, ShareError> {
    AssertUnwindSafe(call)
        .catch_unwind()
        .await
        .unwrap_or_else(|_| Err(ShareError::Presentation("provider panicked".into())))
}

#[async_trait]
impl<P: CapabilityProvider> Share for Adapter<P> {
    async fn share_request(&self, request: ShareRequest) {
        let name = self.provider.name();
        let payload = request.into_payload(
            |mime_type| self.provider.accepts_attachment(mime_type),
            excluded_targets,
        );

        if payload.is_empty() {
            debug!("{name}: nothing to share");
            return;
        }

        if let Err(e) = guarded(self.provider.present_share(payload)).await {
            self.report("share", &e);
        }
    }

    async fn open_browser(&self, url: &str, options: Option<BrowserOptions>) {
        let name = self.provider.name();
        let mut options = options.unwrap_or_default();
        let on_dismissed = options.on_dismissed.take();

        let launch = options.resolve(
            self.provider.browser_surface(),
            self.provider.has_foreground_context(),
        );

        let browser = match launch {
            BrowserLaunch::External => {
                if options.use_embedded_browser {
                    debug!("{name}: no in-app browser available, using system browser");
                }
                self.open_external(url).await;
                return;
            }
            BrowserLaunch::Embedded(browser) => browser,
        };

        match guarded(self.provider.open_embedded(url, browser)).await {
            Ok(dismissal) => {
                if on_dismissed.is_some() && !dismissal.is_tracked() {
                    debug!("{name}: browser does not report dismissal, on_dismissed will not run");
                }
                if dismissal.wait().await {
                    if let Some(callback) = on_dismissed {
                        callback();
                    }
                }
            }
            Err(ShareError::NoForegroundContext) => {
                info!("{name}: foreground context went away, using system browser");
                self.open_external(url).await;
            }
            Err(e) => self.report("open browser", &e),
        }
    }

    async fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> bool {
        let name = self.provider.name();
        if !self.provider.supports_clipboard() {
            debug!("{name}: clipboard not supported");
            return false;
        }

        let written = std::panic::catch_unwind(AssertUnwindSafe(|| {
            self.provider.set_clipboard_text(text, label)
        }))
        .unwrap_or_else(|_| Err(ShareError::Clipboard("provider panicked".into())));

        match written {
            Ok(()) => true,
            Err(e) => {
                self.report("copy to clipboard", &e);
                false
            }
        }
    }

    fn supports_clipboard(&self) -> bool {
        self.provider.supports_clipboard()
    }
}
