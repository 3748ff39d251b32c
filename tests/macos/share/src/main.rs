use sharekit_share::sys::desktop::mailto_uri;
use sharekit_share::{ShareRequest, excluded_targets, is_image_type};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("Testing Share...");

    let payload = ShareRequest::link("https://example.com")
        .with_message("Hello from sharekit")
        .with_title("Sharekit")
        .into_payload(is_image_type, excluded_targets);
    println!("Mail link: {}", mailto_uri(&payload));

    sharekit_share_demo::run().await;
    println!("Done.");
}
