//! Walks through every share operation, for running inside host apps.

use log::info;
use sharekit_share::{BrowserOptions, Color};

const LINK: &str = "https://github.com/water-rs/sharekit";

/// Run the demo.
pub async fn run() {
    info!("Running Share Demo...");

    // Plain text
    sharekit_share::share("Hello from the shared crate!", Some("Demo")).await;

    // Link with message
    sharekit_share::share_link(LINK, Some("Check this out"), Some("Sharekit")).await;

    // A tiny PNG; platforms without image sharing send the text only
    sharekit_share::share_link_with_data(
        PIXEL_PNG.to_vec(),
        "image/png",
        Some(LINK),
        Some("One pixel"),
        None,
    )
    .await;

    // In-app browser, tinted where the platform allows it
    let options = BrowserOptions::new()
        .with_toolbar_color(Color::rgb(0x1e, 0x88, 0xe5))
        .on_dismissed(|| info!("Browser dismissed"));
    sharekit_share::open_browser(LINK, Some(options)).await;

    // System browser
    sharekit_share::open_browser(LINK, Some(BrowserOptions::external())).await;

    if sharekit_share::supports_clipboard() {
        let copied = sharekit_share::set_clipboard_text(LINK, Some("Sharekit")).await;
        info!("Clipboard write: {copied}");
    } else {
        info!("Clipboard not supported");
    }
}

static PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60,
    0x60, 0x60, 0xf8, 0x0f, 0x00, 0x01, 0x04, 0x01, 0x00, 0x5f, 0xe5, 0xc3, 0x4b, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];
