//! Platform-specific clipboard backend implementations.

#[cfg(any(target_os = "windows", target_os = "linux"))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux"))]
pub use desktop::*;

#[cfg(target_os = "android")]
/// Android platform backend.
pub mod android;
#[cfg(target_os = "android")]
pub use android::{get_text, is_supported, set_text};

#[cfg(any(target_os = "ios", target_os = "macos"))]
/// Apple platform backend.
pub mod apple;
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub use apple::*;

#[cfg(not(any(
    target_os = "windows",
    target_os = "linux",
    target_os = "android",
    target_os = "ios",
    target_os = "macos"
)))]
mod unsupported;
#[cfg(not(any(
    target_os = "windows",
    target_os = "linux",
    target_os = "android",
    target_os = "ios",
    target_os = "macos"
)))]
pub use unsupported::*;
