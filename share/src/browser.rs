//! Browser options and how they resolve against a provider's capabilities.

use std::fmt;

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    /// A color with alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed as `0xAARRGGBB`, the layout of an Android color int.
    #[must_use]
    pub const fn argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Callback run once after the user closes an embedded browser.
pub type DismissCallback = Box<dyn FnOnce() + Send + 'static>;

/// Options for [`Share::open_browser`](crate::Share::open_browser).
///
/// Options a platform has no use for are ignored, never rejected.
#[derive(Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserOptions {
    /// Present an in-app browser instead of handing off to the system browser.
    /// Default `true`.
    pub use_embedded_browser: bool,
    /// Run after the user closes the embedded browser.
    #[serde(skip)]
    pub on_dismissed: Option<DismissCallback>,
    /// Request reader mode. Full-screen embedded browsers only. Default `false`.
    pub use_reader_mode: bool,
    /// Show the page title. Toolbar-style browsers only. Default `true`.
    pub show_title: bool,
    /// Toolbar tint. Toolbar-style browsers only.
    pub toolbar_color: Option<Color>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            use_embedded_browser: true,
            on_dismissed: None,
            use_reader_mode: false,
            show_title: true,
            toolbar_color: None,
        }
    }
}

impl fmt::Debug for BrowserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserOptions")
            .field("use_embedded_browser", &self.use_embedded_browser)
            .field("on_dismissed", &self.on_dismissed.is_some())
            .field("use_reader_mode", &self.use_reader_mode)
            .field("show_title", &self.show_title)
            .field("toolbar_color", &self.toolbar_color)
            .finish()
    }
}

impl BrowserOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that always open the system browser.
    #[must_use]
    pub fn external() -> Self {
        Self::default().with_embedded_browser(false)
    }

    /// Choose between the in-app and the system browser.
    #[must_use]
    pub fn with_embedded_browser(mut self, embedded: bool) -> Self {
        self.use_embedded_browser = embedded;
        self
    }

    /// Request reader mode.
    #[must_use]
    pub fn with_reader_mode(mut self, reader_mode: bool) -> Self {
        self.use_reader_mode = reader_mode;
        self
    }

    /// Show or hide the page title.
    #[must_use]
    pub fn with_show_title(mut self, show_title: bool) -> Self {
        self.show_title = show_title;
        self
    }

    /// Tint the toolbar.
    #[must_use]
    pub fn with_toolbar_color(mut self, color: Color) -> Self {
        self.toolbar_color = Some(color);
        self
    }

    /// Run `callback` once the user closes the embedded browser.
    #[must_use]
    pub fn on_dismissed(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_dismissed = Some(Box::new(callback));
        self
    }

    /// Decide how to open a URL given what the provider offers.
    ///
    /// Falls back to [`BrowserLaunch::External`] when the caller opted out, the
    /// provider has no embedded surface, or nothing is in the foreground.
    /// Fields the chosen surface does not use are cleared.
    #[must_use]
    pub const fn resolve(
        &self,
        surface: Option<BrowserSurface>,
        has_foreground_context: bool,
    ) -> BrowserLaunch {
        if !self.use_embedded_browser || !has_foreground_context {
            return BrowserLaunch::External;
        }
        match surface {
            None => BrowserLaunch::External,
            Some(BrowserSurface::FullScreen) => BrowserLaunch::Embedded(EmbeddedBrowser {
                surface: BrowserSurface::FullScreen,
                reader_mode: self.use_reader_mode,
                show_title: false,
                toolbar_color: None,
            }),
            Some(BrowserSurface::Toolbar) => BrowserLaunch::Embedded(EmbeddedBrowser {
                surface: BrowserSurface::Toolbar,
                reader_mode: false,
                show_title: self.show_title,
                toolbar_color: self.toolbar_color,
            }),
        }
    }
}

/// The kind of in-app browser a provider can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserSurface {
    /// A full-screen controller with its own chrome (`SFSafariViewController`).
    FullScreen,
    /// A browser with a minimal, tintable toolbar (Chrome Custom Tabs).
    Toolbar,
}

/// How a URL will be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserLaunch {
    /// Hand the URL to the system browser.
    External,
    /// Present an in-app browser.
    Embedded(EmbeddedBrowser),
}

/// Settings for an in-app browser, already narrowed to its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedBrowser {
    /// Surface being presented.
    pub surface: BrowserSurface,
    /// Reader mode.
    pub reader_mode: bool,
    /// Show the page title.
    pub show_title: bool,
    /// Toolbar tint.
    pub toolbar_color: Option<Color>,
}

/// Resolves when the user closes an embedded browser.
#[derive(Debug)]
pub struct Dismissal(Option<oneshot::Receiver<()>>);

/// Provider side of a [`Dismissal`].
#[derive(Debug)]
pub struct DismissSender(oneshot::Sender<()>);

impl Dismissal {
    /// A dismissal the provider can report.
    #[must_use]
    pub fn channel() -> (DismissSender, Self) {
        let (tx, rx) = oneshot::channel();
        (DismissSender(tx), Self(Some(rx)))
    }

    /// A dismissal the provider cannot observe.
    #[must_use]
    pub const fn untracked() -> Self {
        Self(None)
    }

    /// Whether the provider will report the dismissal.
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        self.0.is_some()
    }

    /// Wait for the user to close the browser.
    ///
    /// Returns `false` right away when untracked, and `false` if the provider
    /// dropped its sender without reporting.
    pub async fn wait(self) -> bool {
        match self.0 {
            Some(rx) => rx.await.is_ok(),
            None => false,
        }
    }
}

impl DismissSender {
    /// Report that the user closed the browser.
    pub fn dismissed(self) {
        let _ = self.0.send(());
    }
}
