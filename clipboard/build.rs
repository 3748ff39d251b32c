//! Build script for sharekit-clipboard.

fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "ios" || target_os == "macos" {
        use sharekit_build::AppleSwiftConfig;

        let config = AppleSwiftConfig::new("sharekit-clipboard", "ClipboardHelper")
            .swift_source("src/sys/apple/clipboard.swift");

        let config = if target_os == "ios" {
            config.framework("UIKit")
        } else {
            config.framework("AppKit")
        };

        sharekit_build::compile_swift("src/sys/apple/mod.rs", &config);
    }

    if target_os == "android" {
        sharekit_build::build_kotlin(&["src/sys/android/ClipboardHelper.kt"]);
    }
}
