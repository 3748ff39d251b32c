//! Android JNI test harness for sharekit crates.
//!
//! This crate is only compiled for Android targets.
//! To build: cargo ndk -t arm64-v8a build -p sharekit-test-android
//!
//! Each function matches a native declaration in the test app's `MainActivity.kt`.

#![cfg(target_os = "android")]
#![allow(non_snake_case)]

use jni::JNIEnv;
use jni::objects::{JClass, JObject, JString};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean};
use sharekit_share::BrowserOptions;

fn block_on<F: std::future::Future>(future: F) -> Option<F::Output> {
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => Some(rt.block_on(future)),
        Err(e) => {
            log::error!("Failed to build runtime: {e}");
            None
        }
    }
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    env.get_string(value).ok().map(Into::into)
}

// ============================================================================
// Setup
// ============================================================================

/// Install logging, load the helper classes and record the activity.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_sharekit_test_MainActivity_initShare(
    mut env: JNIEnv,
    _class: JClass,
    activity: JObject,
) -> jboolean {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("sharekit"),
    );

    let ready = sharekit_share::sys::android::init_with_context(&mut env, &activity).and_then(|()| {
        sharekit_share::sys::android::set_current_activity(&mut env, Some(&activity))
    });

    match ready {
        Ok(()) => JNI_TRUE,
        Err(e) => {
            log::error!("Share init failed: {e}");
            JNI_FALSE
        }
    }
}

/// Forget the activity, e.g. from `onPause`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_sharekit_test_MainActivity_clearActivity(
    mut env: JNIEnv,
    _class: JClass,
) {
    if let Err(e) = sharekit_share::sys::android::set_current_activity(&mut env, None) {
        log::error!("Failed to clear activity: {e}");
    }
}

// ============================================================================
// Share Crate Tests
// ============================================================================

/// Share a link with message and title.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_sharekit_test_MainActivity_testShareLink(
    mut env: JNIEnv,
    _class: JClass,
    url: JString,
    message: JString,
) {
    let Some(url) = read_string(&mut env, &url) else {
        log::error!("testShareLink needs a url");
        return;
    };
    let message = read_string(&mut env, &message);

    block_on(sharekit_share::share_link(&url, message.as_deref(), Some("Sharekit")));
}

/// Open a URL, embedded when `embedded` is set.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_sharekit_test_MainActivity_testOpenBrowser(
    mut env: JNIEnv,
    _class: JClass,
    url: JString,
    embedded: jboolean,
) {
    let Some(url) = read_string(&mut env, &url) else {
        log::error!("testOpenBrowser needs a url");
        return;
    };

    let options = BrowserOptions::new()
        .with_embedded_browser(embedded == JNI_TRUE)
        .with_toolbar_color(sharekit_share::Color::rgb(0x1e, 0x88, 0xe5));
    block_on(sharekit_share::open_browser(&url, Some(options)));
}

/// Copy `text`, then read it back.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_sharekit_test_MainActivity_testSetClipboard(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
) -> jboolean {
    let Some(text) = read_string(&mut env, &text) else {
        return JNI_FALSE;
    };

    let copied = block_on(sharekit_share::set_clipboard_text(&text, Some("sharekit")))
        .unwrap_or(false);
    let read_back = sharekit_clipboard::get_text();
    log::info!("Clipboard copied={copied} read_back={read_back:?}");

    if copied && read_back.as_deref() == Some(text.as_str()) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

/// Run the shared demo end to end.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_sharekit_test_MainActivity_runDemo(_env: JNIEnv, _class: JClass) {
    block_on(sharekit_share_demo::run());
}
