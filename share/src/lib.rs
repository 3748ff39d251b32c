//! Cross-platform sharing, in-app browsing and clipboard writes.
//!
//! One contract, [`Share`], implemented for iOS, Android, Windows, Linux and
//! macOS. The backend is picked at build time. Callers write the same code on
//! every platform and get the best behavior the platform offers: options a
//! platform cannot honor are ignored, and a share sheet that cannot be shown
//! completes like one the user cancelled.
//!
//! ```rust,no_run
//! use sharekit_share::{BrowserOptions, Color};
//!
//! async fn demo() {
//!     sharekit_share::share_link("https://example.com", Some("Have a look"), None).await;
//!
//!     let options = BrowserOptions::new()
//!         .with_toolbar_color(Color::rgb(0x1e, 0x88, 0xe5))
//!         .on_dismissed(|| println!("closed"));
//!     sharekit_share::open_browser("https://example.com", Some(options)).await;
//!
//!     if sharekit_share::supports_clipboard() {
//!         let copied = sharekit_share::set_clipboard_text("hello", None).await;
//!         println!("copied: {copied}");
//!     }
//! }
//! ```
//!
//! ## Android
//!
//! Hand the library a `Context` once, and keep it informed about the current
//! activity so in-app browsers have something to present from:
//!
//! ```rust,ignore
//! sharekit_share::sys::android::init_with_context(&mut env, &context)?;
//! sharekit_share::sys::android::set_current_activity(&mut env, Some(&activity))?;
//! ```

#![warn(missing_docs)]

mod adapter;
mod browser;
mod contract;
mod error;
mod exclusion;
mod provider;
mod request;

/// Platform-specific providers.
pub mod sys;

pub use adapter::Adapter;
pub use browser::{
    BrowserLaunch, BrowserOptions, BrowserSurface, Color, DismissCallback, DismissSender,
    Dismissal, EmbeddedBrowser,
};
pub use contract::Share;
pub use error::{FailureKind, ShareError};
pub use exclusion::{
    POST_TO_FACEBOOK, clear_excluded_targets, excluded_targets, set_excluded_targets,
};
pub use provider::CapabilityProvider;
pub use request::{Attachment, ShareContent, SharePayload, ShareRequest, is_image_type};

/// The adapter for the platform this crate was built for.
#[must_use]
pub fn platform() -> Adapter<sys::PlatformProvider> {
    Adapter::new(sys::PlatformProvider::default())
}

/// Share plain text. See [`Share::share`].
pub async fn share(text: &str, title: Option<&str>) {
    platform().share(text, title).await;
}

/// Open a URL. See [`Share::open_browser`].
pub async fn open_browser(url: &str, options: Option<BrowserOptions>) {
    platform().open_browser(url, options).await;
}

/// Share a link. See [`Share::share_link`].
pub async fn share_link(url: &str, message: Option<&str>, title: Option<&str>) {
    platform().share_link(url, message, title).await;
}

/// Share binary data with an optional link and message. See
/// [`Share::share_link_with_data`].
pub async fn share_link_with_data(
    data: Vec<u8>,
    mime_type: &str,
    url: Option<&str>,
    message: Option<&str>,
    title: Option<&str>,
) {
    platform()
        .share_link_with_data(data, mime_type, url, message, title)
        .await;
}

/// Put text on the clipboard. See [`Share::set_clipboard_text`].
pub async fn set_clipboard_text(text: &str, label: Option<&str>) -> bool {
    platform().set_clipboard_text(text, label).await
}

/// Whether this platform has a clipboard.
#[must_use]
pub fn supports_clipboard() -> bool {
    platform().supports_clipboard()
}
