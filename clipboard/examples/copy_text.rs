//! Clipboard round-trip demo.
fn main() {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Copied by sharekit".to_string());

    if !sharekit_clipboard::is_supported() {
        println!("No clipboard on this platform.");
        return;
    }

    match sharekit_clipboard::set_text(&text, Some("demo")) {
        Ok(()) => println!("Copied: {text}"),
        Err(e) => println!("Failed to copy: {e}"),
    }

    match sharekit_clipboard::get_text() {
        Some(read) => println!("Clipboard text content:\n{read}"),
        None => println!("Clipboard does not contain text."),
    }
}
