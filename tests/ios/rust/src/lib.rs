//! iOS test harness for sharekit crates.
//!
//! Built as a static library and linked into the Xcode test app, which calls
//! `run_tests` once its first view controller is on screen.

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        fn run_tests();
        fn test_set_clipboard(text: String) -> bool;
    }
}

fn runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .inspect_err(|e| log::error!("Failed to build runtime: {e}"))
        .ok()
}

fn run_tests() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .try_init();
    println!("=== sharekit iOS Test Runner ===");

    // Share calls hop to the main queue, so they must not block it.
    std::thread::spawn(|| {
        let Some(rt) = runtime() else { return };
        rt.block_on(async {
            println!("Clipboard supported: {}", sharekit_share::supports_clipboard());
            sharekit_share_demo::run().await;
            println!("=== Done ===");
        });
    });
}

fn test_set_clipboard(text: String) -> bool {
    let Some(rt) = runtime() else { return false };
    let copied = rt.block_on(sharekit_share::set_clipboard_text(&text, Some("sharekit")));
    copied && sharekit_clipboard::get_text().as_deref() == Some(text.as_str())
}
