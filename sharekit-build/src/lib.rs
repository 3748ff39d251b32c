//! Shared build utilities for sharekit crates.
//!
//! This crate provides common functionality for:
//! - Apple: Swift bridge generation and Swift compilation
//! - Android: Kotlin → DEX compilation
//!
//! # Usage
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
//!
//!     if target_os == "ios" {
//!         let config = sharekit_build::AppleSwiftConfig::new("sharekit-share", "ShareHelper")
//!             .swift_source("src/sys/apple/ShareHelper.swift")
//!             .framework("UIKit");
//!         sharekit_build::compile_swift("src/sys/apple/mod.rs", &config);
//!     }
//!
//!     if target_os == "android" {
//!         sharekit_build::build_kotlin(&["src/sys/android/ShareHelper.kt"]);
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod android;
mod apple;

pub use android::{AndroidConfig, build_kotlin, build_kotlin_with, find_android_jar, find_d8_jar};
pub use apple::{AppleSwiftConfig, build_apple_bridge, compile_swift};
