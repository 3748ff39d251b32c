//! Platform-specific capability providers.
//!
//! Exactly one backend is compiled in and exported as [`PlatformProvider`].

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub use desktop::DesktopProvider as PlatformProvider;

#[cfg(target_os = "android")]
/// Android platform backend.
pub mod android;
#[cfg(target_os = "android")]
pub use android::AndroidProvider as PlatformProvider;

#[cfg(target_os = "ios")]
/// iOS platform backend.
pub mod apple;
#[cfg(target_os = "ios")]
pub use apple::AppleProvider as PlatformProvider;

// Fallback for unsupported platforms
#[cfg(not(any(
    target_os = "windows",
    target_os = "linux",
    target_os = "macos",
    target_os = "android",
    target_os = "ios"
)))]
mod unsupported;
#[cfg(not(any(
    target_os = "windows",
    target_os = "linux",
    target_os = "macos",
    target_os = "android",
    target_os = "ios"
)))]
pub use unsupported::UnsupportedProvider as PlatformProvider;
