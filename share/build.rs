//! Build script for sharekit-share.

fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "ios" {
        use sharekit_build::AppleSwiftConfig;

        let config = AppleSwiftConfig::new("sharekit-share", "ShareHelper")
            .swift_source("src/sys/apple/ShareHelper.swift")
            .framework("UIKit")
            .framework("SafariServices");

        sharekit_build::compile_swift("src/sys/apple/mod.rs", &config);
    }

    if target_os == "android" {
        sharekit_build::build_kotlin(&["src/sys/android/ShareHelper.kt"]);
    }
}
