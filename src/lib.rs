//! # Sharekit
//!
//! Share text, links and files through the platform's share sheet, open
//! links in an in-app or system browser, and put text on the clipboard, with
//! one API across iOS, Android, macOS, Windows and Linux.
//!
//! ## Features
//!
//! - `share` (default): the share contract, browser launching and clipboard writes.
//! - `clipboard`: direct plain-text clipboard access, read and write.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! sharekit = { version = "0.1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use sharekit::share::{self, BrowserOptions};
//!
//! async fn tell_a_friend() {
//!     share::share_link("https://example.com", Some("Worth a read"), Some("Share")).await;
//!     share::open_browser("https://example.com", Some(BrowserOptions::external())).await;
//! }
//! ```

#[cfg(feature = "clipboard")]
pub use sharekit_clipboard as clipboard;

#[cfg(feature = "share")]
pub use sharekit_share as share;
