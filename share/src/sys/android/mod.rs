//! Android provider using JNI and an embedded helper class.
//!
//! Shares go through an `ACTION_SEND` chooser, in-app browsing through a
//! Chrome Custom Tab launched from the current activity, and everything else
//! through the application context captured by [`init_with_context`].

use std::sync::{OnceLock, PoisonError, RwLock};

use async_trait::async_trait;
use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::{JNIEnv, JavaVM};

use crate::{
    BrowserSurface, CapabilityProvider, Dismissal, EmbeddedBrowser, ShareError, SharePayload,
};

/// Embedded DEX bytecode containing the `ShareHelper` class.
static DEX_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/classes.dex"));

/// Cached class loader for the embedded DEX.
static CLASS_LOADER: OnceLock<GlobalRef> = OnceLock::new();

/// VM and application context captured at initialization.
static RUNTIME: OnceLock<(JavaVM, GlobalRef)> = OnceLock::new();

/// The activity in front, if the host reported one.
static CURRENT_ACTIVITY: RwLock<Option<GlobalRef>> = RwLock::new(None);

/// Line separator joining message and link into `EXTRA_TEXT`.
const LINE_SEPARATOR: &str = "\n";

fn jni_error(what: &str) -> impl FnOnce(jni::errors::Error) -> ShareError + '_ {
    move |e| ShareError::Presentation(format!("JNI error {what}: {e}"))
}

/// Initialize the DEX class loader and remember the application context.
///
/// Call once with any valid `Context` before using the share functions.
///
/// # Errors
/// Returns an error if the helper class cannot be loaded.
pub fn init_with_context(env: &mut JNIEnv, context: &JObject) -> Result<(), ShareError> {
    if let Err(e) = sharekit_clipboard::sys::android::init_with_context(env, context) {
        log::warn!("Clipboard backend unavailable: {e}");
    }

    if RUNTIME.get().is_none() {
        let app_context = env
            .call_method(context, "getApplicationContext", "()Landroid/content/Context;", &[])
            .and_then(|v| v.l())
            .map_err(jni_error("getApplicationContext"))?;
        let app_context = env
            .new_global_ref(app_context)
            .map_err(jni_error("new_global_ref"))?;
        let vm = env.get_java_vm().map_err(jni_error("get_java_vm"))?;
        let _ = RUNTIME.set((vm, app_context));
    }

    if CLASS_LOADER.get().is_some() {
        return Ok(());
    }

    let cache_dir = env
        .call_method(context, "getCacheDir", "()Ljava/io/File;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error("getCacheDir"))?;

    let cache_path = env
        .call_method(&cache_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error("getAbsolutePath"))?;

    let dex_path = format!(
        "{}/sharekit_share.dex",
        env.get_string((&cache_path).into())
            .map_err(jni_error("get_string"))?
            .to_str()
            .map_err(|e| ShareError::Presentation(format!("cache path is not UTF-8: {e}")))?
    );

    std::fs::write(&dex_path, DEX_BYTES)
        .map_err(|e| ShareError::Presentation(format!("Failed to write DEX: {e}")))?;
    log::info!("Share helper DEX written to {dex_path}");

    let dex_path_jstring = env.new_string(&dex_path).map_err(jni_error("new_string"))?;

    let parent_loader = env
        .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error("getClassLoader"))?;

    let dex_class_loader_class = env
        .find_class("dalvik/system/DexClassLoader")
        .map_err(jni_error("find_class"))?;

    let class_loader = env
        .new_object(
            dex_class_loader_class,
            "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;Ljava/lang/ClassLoader;)V",
            &[
                JValue::Object(&dex_path_jstring),
                JValue::Object(&cache_path),
                JValue::Object(&JObject::null()),
                JValue::Object(&parent_loader),
            ],
        )
        .map_err(jni_error("new DexClassLoader"))?;

    let global_ref = env
        .new_global_ref(class_loader)
        .map_err(jni_error("new_global_ref"))?;

    let _ = CLASS_LOADER.set(global_ref);
    Ok(())
}

/// Record the activity in front, or `None` when the app went to background.
///
/// Without a current activity, in-app browsers fall back to the system browser.
///
/// # Errors
/// Returns an error if a global reference cannot be created.
pub fn set_current_activity(
    env: &mut JNIEnv,
    activity: Option<&JObject>,
) -> Result<(), ShareError> {
    let activity = activity
        .filter(|a| !a.is_null())
        .map(|a| env.new_global_ref(a))
        .transpose()
        .map_err(jni_error("new_global_ref activity"))?;

    *CURRENT_ACTIVITY
        .write()
        .unwrap_or_else(PoisonError::into_inner) = activity;
    Ok(())
}

fn current_activity() -> Option<GlobalRef> {
    CURRENT_ACTIVITY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn get_helper_class<'a>(env: &mut JNIEnv<'a>) -> Result<JClass<'a>, ShareError> {
    let class_loader = CLASS_LOADER
        .get()
        .ok_or(ShareError::NotInitialized("call init_with_context first"))?;

    let helper_class_name = env
        .new_string("sharekit.share.ShareHelper")
        .map_err(jni_error("new_string name"))?;

    let helper_class = env
        .call_method(
            class_loader.as_obj(),
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&helper_class_name)],
        )
        .and_then(|v| v.l())
        .map_err(jni_error("loadClass"))?;

    Ok(helper_class.into())
}

/// Call a `void` helper method, clearing any Java exception it throws.
fn call_helper(
    env: &mut JNIEnv,
    method: &str,
    signature: &str,
    args: &[JValue],
) -> Result<(), ShareError> {
    let helper_class = get_helper_class(env)?;
    let result = env.call_static_method(helper_class, method, signature, args);

    if let Err(e) = result {
        if env.exception_check().unwrap_or(false) {
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        return Err(ShareError::Presentation(format!("{method} failed: {e}")));
    }
    Ok(())
}

fn with_runtime<T>(
    f: impl FnOnce(&mut JNIEnv, &JObject) -> Result<T, ShareError>,
) -> Result<T, ShareError> {
    let (vm, context) = RUNTIME
        .get()
        .ok_or(ShareError::NotInitialized("call init_with_context first"))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(jni_error("attach_current_thread"))?;
    f(&mut *env, context.as_obj())
}

/// Share the payload from `context`.
///
/// # Errors
/// Returns an error if the chooser cannot be started.
pub fn share_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    payload: &SharePayload,
) -> Result<(), ShareError> {
    let text = env
        .new_string(payload.joined_text(LINE_SEPARATOR))
        .map_err(jni_error("new_string text"))?;
    let subject = match &payload.subject {
        Some(subject) => JObject::from(
            env.new_string(subject)
                .map_err(jni_error("new_string subject"))?,
        ),
        None => JObject::null(),
    };

    call_helper(
        env,
        "share",
        "(Landroid/content/Context;Ljava/lang/String;Ljava/lang/String;)V",
        &[
            JValue::Object(context),
            JValue::Object(&text),
            JValue::Object(&subject),
        ],
    )
}

/// Open `url` in the default browser from `context`.
///
/// # Errors
/// Returns an error if no activity can handle the URL.
pub fn open_external_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    url: &str,
) -> Result<(), ShareError> {
    let url = env.new_string(url).map_err(jni_error("new_string url"))?;
    call_helper(
        env,
        "openExternal",
        "(Landroid/content/Context;Ljava/lang/String;)V",
        &[JValue::Object(context), JValue::Object(&url)],
    )
}

/// Open `url` in a Custom Tab on top of `activity`.
///
/// # Errors
/// Returns an error if the tab cannot be launched.
pub fn open_custom_tab_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    url: &str,
    browser: &EmbeddedBrowser,
) -> Result<(), ShareError> {
    let url = env.new_string(url).map_err(jni_error("new_string url"))?;
    #[allow(clippy::cast_possible_wrap)]
    let color = browser.toolbar_color.map_or(0, |c| c.argb() as i32);

    call_helper(
        env,
        "openCustomTab",
        "(Landroid/app/Activity;Ljava/lang/String;ZZI)V",
        &[
            JValue::Object(activity),
            JValue::Object(&url),
            JValue::Bool(browser.show_title.into()),
            JValue::Bool(browser.toolbar_color.is_some().into()),
            JValue::Int(color),
        ],
    )
}

/// Provider backed by Android intents and Custom Tabs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AndroidProvider;

#[async_trait]
impl CapabilityProvider for AndroidProvider {
    fn name(&self) -> &'static str {
        "android"
    }

    fn browser_surface(&self) -> Option<BrowserSurface> {
        Some(BrowserSurface::Toolbar)
    }

    fn has_foreground_context(&self) -> bool {
        current_activity().is_some()
    }

    // Sharing binary data needs a FileProvider the host would have to declare.
    fn accepts_attachment(&self, _mime_type: &str) -> bool {
        false
    }

    async fn present_share(&self, payload: SharePayload) -> Result<(), ShareError> {
        with_runtime(|env, context| share_with_context(env, context, &payload))
    }

    async fn open_external(&self, url: &str) -> Result<(), ShareError> {
        with_runtime(|env, context| open_external_with_context(env, context, url))
    }

    async fn open_embedded(
        &self,
        url: &str,
        browser: EmbeddedBrowser,
    ) -> Result<Dismissal, ShareError> {
        let activity = current_activity().ok_or(ShareError::NoForegroundContext)?;
        with_runtime(|env, _| {
            open_custom_tab_with_activity(env, activity.as_obj(), url, &browser)
        })?;
        // Custom Tabs do not report when they close.
        Ok(Dismissal::untracked())
    }

    fn set_clipboard_text(&self, text: &str, label: Option<&str>) -> Result<(), ShareError> {
        sharekit_clipboard::set_text(text, label).map_err(ShareError::from)
    }

    fn supports_clipboard(&self) -> bool {
        sharekit_clipboard::is_supported()
    }
}
