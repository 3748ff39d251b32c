use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sharekit_share::{
    Adapter, BrowserOptions, BrowserSurface, CapabilityProvider, Color, Dismissal,
    EmbeddedBrowser, POST_TO_FACEBOOK, Share, ShareError, SharePayload,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Share(SharePayload),
    External(String),
    Embedded(String, EmbeddedBrowser),
}

#[derive(Debug, Clone, Copy)]
enum Embedded {
    Dismissed,
    Untracked,
    NoForeground,
    Fails,
    Panics,
}

#[derive(Debug)]
struct RecordingProvider {
    surface: Option<BrowserSurface>,
    foreground: bool,
    embedded: Embedded,
    share_fails: bool,
    clipboard: bool,
    clipboard_fails: bool,
    calls: Mutex<Vec<Call>>,
    clip: Mutex<Option<(String, Option<String>)>>,
}

impl RecordingProvider {
    fn new() -> Self {
        Self {
            surface: Some(BrowserSurface::FullScreen),
            foreground: true,
            embedded: Embedded::Dismissed,
            share_fails: false,
            clipboard: true,
            clipboard_fails: false,
            calls: Mutex::new(Vec::new()),
            clip: Mutex::new(None),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn clip(&self) -> Option<(String, Option<String>)> {
        self.clip.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CapabilityProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn browser_surface(&self) -> Option<BrowserSurface> {
        self.surface
    }

    fn has_foreground_context(&self) -> bool {
        self.foreground
    }

    async fn present_share(&self, payload: SharePayload) -> Result<(), ShareError> {
        self.record(Call::Share(payload));
        if self.share_fails {
            Err(ShareError::Presentation("sheet refused".into()))
        } else {
            Ok(())
        }
    }

    async fn open_external(&self, url: &str) -> Result<(), ShareError> {
        self.record(Call::External(url.to_string()));
        Ok(())
    }

    async fn open_embedded(
        &self,
        url: &str,
        browser: EmbeddedBrowser,
    ) -> Result<Dismissal, ShareError> {
        self.record(Call::Embedded(url.to_string(), browser));
        match self.embedded {
            Embedded::Dismissed => {
                let (tx, dismissal) = Dismissal::channel();
                tx.dismissed();
                Ok(dismissal)
            }
            Embedded::Untracked => Ok(Dismissal::untracked()),
            Embedded::NoForeground => Err(ShareError::NoForegroundContext),
            Embedded::Fails => Err(ShareError::Presentation("browser refused".into())),
            Embedded::Panics => panic!("browser exploded"),
        }
    }

    fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> Result<(), ShareError> {
        if self.clipboard_fails {
            return Err(ShareError::Clipboard("locked".into()));
        }
        *self.clip.lock().unwrap() = Some((text.to_string(), label.map(str::to_owned)));
        Ok(())
    }

    fn supports_clipboard(&self) -> bool {
        self.clipboard
    }
}

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    (count, move || {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn share_text_presents_once_with_subject_and_default_exclusions() {
    let adapter = Adapter::new(RecordingProvider::new());
    adapter.share("hello", Some("Greeting")).await;

    let calls = adapter.provider().calls();
    assert_eq!(calls.len(), 1);
    let Call::Share(payload) = &calls[0] else {
        panic!("expected a share, got {calls:?}");
    };
    assert_eq!(payload.text.as_deref(), Some("hello"));
    assert_eq!(payload.url, None);
    assert_eq!(payload.subject.as_deref(), Some("Greeting"));
    assert!(payload.excluded_targets.iter().any(|t| t == POST_TO_FACEBOOK));
}

#[tokio::test]
async fn share_link_carries_message_then_url() {
    let adapter = Adapter::new(RecordingProvider::new());
    adapter
        .share_link("https://example.com", Some("look"), None)
        .await;

    let calls = adapter.provider().calls();
    let Call::Share(payload) = &calls[0] else {
        panic!("expected a share, got {calls:?}");
    };
    assert_eq!(payload.fragments().collect::<Vec<_>>(), ["look", "https://example.com"]);
    assert_eq!(payload.joined_text("\n"), "look\nhttps://example.com");
    assert_eq!(payload.subject, None);
}

#[tokio::test]
async fn empty_strings_are_treated_as_absent() {
    let adapter = Adapter::new(RecordingProvider::new());
    adapter
        .share_link("https://example.com", Some(""), Some(""))
        .await;

    let calls = adapter.provider().calls();
    let Call::Share(payload) = &calls[0] else {
        panic!("expected a share, got {calls:?}");
    };
    assert_eq!(payload.text, None);
    assert_eq!(payload.subject, None);
    assert_eq!(payload.url.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn nothing_to_share_skips_the_provider() {
    let adapter = Adapter::new(RecordingProvider::new());
    adapter.share("", Some("title only")).await;
    assert!(adapter.provider().calls().is_empty());
}

#[tokio::test]
async fn image_data_is_kept_and_other_data_dropped() {
    let adapter = Adapter::new(RecordingProvider::new());
    adapter
        .share_link_with_data(vec![0x89, b'P', b'N', b'G'], "IMAGE/png", None, Some("pic"), None)
        .await;
    adapter
        .share_link_with_data(
            b"%PDF-1.7".to_vec(),
            "application/pdf",
            Some("https://example.com/doc"),
            Some("doc"),
            None,
        )
        .await;

    let calls = adapter.provider().calls();
    assert_eq!(calls.len(), 2);
    let Call::Share(image) = &calls[0] else {
        panic!("expected a share, got {calls:?}");
    };
    assert!(image.attachment.as_ref().is_some_and(|a| a.is_image()));

    let Call::Share(pdf) = &calls[1] else {
        panic!("expected a share, got {calls:?}");
    };
    assert_eq!(pdf.attachment, None);
    assert_eq!(pdf.joined_text(" "), "doc https://example.com/doc");
}

#[tokio::test]
async fn unsupported_data_alone_shares_nothing() {
    let adapter = Adapter::new(RecordingProvider::new());
    adapter
        .share_link_with_data(vec![1, 2, 3], "application/zip", None, None, Some("t"))
        .await;
    assert!(adapter.provider().calls().is_empty());
}

#[tokio::test]
async fn presentation_failures_are_swallowed() {
    let mut provider = RecordingProvider::new();
    provider.share_fails = true;
    let adapter = Adapter::new(provider);

    adapter.share("still fine", None).await;
    assert_eq!(adapter.provider().calls().len(), 1);
}

#[tokio::test]
async fn embedded_disabled_opens_system_browser_without_callback() {
    let adapter = Adapter::new(RecordingProvider::new());
    let (count, callback) = counter();

    adapter
        .open_browser(
            "https://example.com",
            Some(BrowserOptions::external().on_dismissed(callback)),
        )
        .await;

    assert_eq!(
        adapter.provider().calls(),
        [Call::External("https://example.com".into())]
    );
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn embedded_browser_runs_dismiss_callback_once() {
    let adapter = Adapter::new(RecordingProvider::new());
    let (count, callback) = counter();

    adapter
        .open_browser(
            "https://example.com",
            Some(BrowserOptions::new().with_reader_mode(true).on_dismissed(callback)),
        )
        .await;

    let calls = adapter.provider().calls();
    assert_eq!(calls.len(), 1);
    let Call::Embedded(url, browser) = &calls[0] else {
        panic!("expected an embedded browser, got {calls:?}");
    };
    assert_eq!(url, "https://example.com");
    assert!(browser.reader_mode);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn untracked_browser_never_runs_callback() {
    let mut provider = RecordingProvider::new();
    provider.surface = Some(BrowserSurface::Toolbar);
    provider.embedded = Embedded::Untracked;
    let adapter = Adapter::new(provider);
    let (count, callback) = counter();

    let color = Color::rgb(0x1e, 0x88, 0xe5);
    adapter
        .open_browser(
            "https://example.com",
            Some(
                BrowserOptions::new()
                    .with_reader_mode(true)
                    .with_toolbar_color(color)
                    .on_dismissed(callback),
            ),
        )
        .await;

    let calls = adapter.provider().calls();
    let Call::Embedded(_, browser) = &calls[0] else {
        panic!("expected an embedded browser, got {calls:?}");
    };
    assert_eq!(browser.surface, BrowserSurface::Toolbar);
    assert!(!browser.reader_mode);
    assert_eq!(browser.toolbar_color, Some(color));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn no_foreground_context_falls_back_to_system_browser() {
    let mut provider = RecordingProvider::new();
    provider.foreground = false;
    let adapter = Adapter::new(provider);

    adapter.open_browser("https://example.com", None).await;

    assert_eq!(
        adapter.provider().calls(),
        [Call::External("https://example.com".into())]
    );
}

#[tokio::test]
async fn no_embedded_surface_falls_back_to_system_browser() {
    let mut provider = RecordingProvider::new();
    provider.surface = None;
    let adapter = Adapter::new(provider);

    adapter.open_browser("https://example.com", None).await;

    assert_eq!(
        adapter.provider().calls(),
        [Call::External("https://example.com".into())]
    );
}

#[tokio::test]
async fn losing_foreground_mid_launch_falls_back_to_system_browser() {
    let mut provider = RecordingProvider::new();
    provider.embedded = Embedded::NoForeground;
    let adapter = Adapter::new(provider);
    let (count, callback) = counter();

    adapter
        .open_browser(
            "https://example.com",
            Some(BrowserOptions::new().on_dismissed(callback)),
        )
        .await;

    let calls = adapter.provider().calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Embedded(..)));
    assert_eq!(calls[1], Call::External("https://example.com".into()));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn browser_failures_and_panics_are_swallowed() {
    for behavior in [Embedded::Fails, Embedded::Panics] {
        let mut provider = RecordingProvider::new();
        provider.embedded = behavior;
        let adapter = Adapter::new(provider);
        let (count, callback) = counter();

        adapter
            .open_browser(
                "https://example.com",
                Some(BrowserOptions::new().on_dismissed(callback)),
            )
            .await;

        assert_eq!(adapter.provider().calls().len(), 1, "{behavior:?}");
        assert_eq!(count.load(Ordering::SeqCst), 0, "{behavior:?}");
    }
}

#[tokio::test]
async fn clipboard_write_is_observable() {
    let adapter = Adapter::new(RecordingProvider::new());

    assert!(adapter.set_clipboard_text("copied", Some("Link")).await);
    assert_eq!(
        adapter.provider().clip(),
        Some(("copied".to_string(), Some("Link".to_string())))
    );

    assert!(adapter.set_clipboard_text("again", None).await);
    assert_eq!(adapter.provider().clip(), Some(("again".to_string(), None)));
}

#[tokio::test]
async fn clipboard_failure_reports_false() {
    let mut provider = RecordingProvider::new();
    provider.clipboard_fails = true;
    let adapter = Adapter::new(provider);

    assert!(!adapter.set_clipboard_text("nope", None).await);
}

#[tokio::test]
async fn missing_clipboard_reports_false_without_calling_provider() {
    let mut provider = RecordingProvider::new();
    provider.clipboard = false;
    let adapter = Adapter::new(provider);

    assert!(!adapter.supports_clipboard());
    assert!(!adapter.set_clipboard_text("nope", None).await);
    assert_eq!(adapter.provider().clip(), None);
}

#[tokio::test]
async fn clipboard_support_is_stable() {
    let adapter = Adapter::new(RecordingProvider::new());
    let first = adapter.supports_clipboard();
    adapter.set_clipboard_text("x", None).await;
    adapter.share("y", None).await;
    assert_eq!(adapter.supports_clipboard(), first);
}

#[test]
fn errors_classify_into_two_kinds() {
    use sharekit_share::FailureKind;

    assert_eq!(ShareError::Clipboard("x".into()).kind(), FailureKind::Clipboard);
    assert_eq!(ShareError::NoForegroundContext.kind(), FailureKind::Presentation);
    assert_eq!(ShareError::NotSupported("share sheet").kind(), FailureKind::Presentation);
    assert_eq!(
        ShareError::from(sharekit_clipboard::ClipboardError::NotSupported).kind(),
        FailureKind::Clipboard
    );
}
