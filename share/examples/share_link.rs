//! Share a link, then open it in the best available browser.
//!
//! On desktop the share goes to the default mail client.

use sharekit_share::{BrowserOptions, Color};

fn main() {
    env_logger::init();

    pollster::block_on(async {
        sharekit_share::share_link("https://www.rust-lang.org", Some("Have a look"), Some("Rust"))
            .await;

        let options = BrowserOptions::new()
            .with_toolbar_color(Color::rgb(0xde, 0xa5, 0x84))
            .on_dismissed(|| println!("browser closed"));
        sharekit_share::open_browser("https://www.rust-lang.org", Some(options)).await;

        if sharekit_share::supports_clipboard() {
            let copied =
                sharekit_share::set_clipboard_text("https://www.rust-lang.org", Some("Link")).await;
            println!("copied to clipboard: {copied}");
        }
    });
}
