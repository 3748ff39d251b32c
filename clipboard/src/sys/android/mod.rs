//! Android clipboard implementation using JNI and an embedded helper class.

use crate::ClipboardError;
use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::{JNIEnv, JavaVM};
use std::sync::OnceLock;

/// Embedded DEX bytecode containing the `ClipboardHelper` class.
static DEX_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/classes.dex"));

/// Cached class loader for the embedded DEX.
static CLASS_LOADER: OnceLock<GlobalRef> = OnceLock::new();

/// Application context and VM captured by [`init_with_context`].
static RUNTIME: OnceLock<(JavaVM, GlobalRef)> = OnceLock::new();

fn platform(what: &str) -> impl FnOnce(jni::errors::Error) -> ClipboardError + '_ {
    move |e| ClipboardError::Platform(format!("JNI error {what}: {e}"))
}

/// Initialize the DEX class loader and remember the application context.
///
/// Call once with any valid `Context`; later calls are no-ops.
///
/// # Errors
/// Returns an error if the helper class cannot be loaded.
pub fn init_with_context(env: &mut JNIEnv, context: &JObject) -> Result<(), ClipboardError> {
    if RUNTIME.get().is_none() {
        let app_context = env
            .call_method(context, "getApplicationContext", "()Landroid/content/Context;", &[])
            .and_then(|v| v.l())
            .map_err(platform("getApplicationContext"))?;
        let app_context = env
            .new_global_ref(app_context)
            .map_err(platform("new_global_ref"))?;
        let vm = env.get_java_vm().map_err(platform("get_java_vm"))?;
        let _ = RUNTIME.set((vm, app_context));
    }

    if CLASS_LOADER.get().is_some() {
        return Ok(());
    }

    // Standard DEX loading boilerplate
    let cache_dir = env
        .call_method(context, "getCacheDir", "()Ljava/io/File;", &[])
        .and_then(|v| v.l())
        .map_err(platform("getCacheDir"))?;

    let cache_path = env
        .call_method(&cache_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(platform("getAbsolutePath"))?;

    let dex_path = format!(
        "{}/sharekit_clipboard.dex",
        env.get_string((&cache_path).into())
            .map_err(platform("get_string"))?
            .to_str()
            .map_err(|e| ClipboardError::Platform(format!("cache path is not UTF-8: {e}")))?
    );

    std::fs::write(&dex_path, DEX_BYTES)
        .map_err(|e| ClipboardError::Platform(format!("Failed to write DEX: {e}")))?;

    let dex_path_jstring = env.new_string(&dex_path).map_err(platform("new_string"))?;

    let parent_loader = env
        .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(platform("getClassLoader"))?;

    let dex_class_loader_class = env
        .find_class("dalvik/system/DexClassLoader")
        .map_err(platform("find_class"))?;

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
        .map_err(platform("new_object"))?;

    let global_ref = env
        .new_global_ref(class_loader)
        .map_err(platform("new_global_ref"))?;

    let _ = CLASS_LOADER.set(global_ref);
    Ok(())
}

fn get_helper_class<'a>(env: &mut JNIEnv<'a>) -> Result<JClass<'a>, ClipboardError> {
    let class_loader = CLASS_LOADER
        .get()
        .ok_or(ClipboardError::NotInitialized("call init_with_context first"))?;

    let helper_class_name = env
        .new_string("sharekit.clipboard.ClipboardHelper")
        .map_err(platform("new_string name"))?;

    let helper_class = env
        .call_method(
            class_loader.as_obj(),
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&helper_class_name)],
        )
        .and_then(|v| v.l())
        .map_err(platform("loadClass"))?;

    Ok(helper_class.into())
}

/// Read clipboard text through `context`.
///
/// # Errors
/// Returns an error if the helper call fails.
pub fn get_text_with_context(
    env: &mut JNIEnv,
    context: &JObject,
) -> Result<Option<String>, ClipboardError> {
    init_with_context(env, context)?;
    let helper_class = get_helper_class(env)?;

    let obj = env
        .call_static_method(
            helper_class,
            "getText",
            "(Landroid/content/Context;)Ljava/lang/String;",
            &[JValue::Object(context)],
        )
        .and_then(|v| v.l())
        .map_err(platform("getText"))?;

    if obj.is_null() {
        return Ok(None);
    }
    let text = env
        .get_string((&obj).into())
        .map_err(platform("get_string"))?;
    Ok(Some(text.into()))
}

/// Write a labeled plain-text clip through `context`.
///
/// # Errors
/// Returns an error if the helper call fails.
pub fn set_text_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    text: &str,
    label: Option<&str>,
) -> Result<(), ClipboardError> {
    init_with_context(env, context)?;
    let helper_class = get_helper_class(env)?;

    let jtext = env.new_string(text).map_err(platform("new_string"))?;
    let jlabel = env
        .new_string(label.unwrap_or_default())
        .map_err(platform("new_string label"))?;

    let written = env
        .call_static_method(
            helper_class,
            "setText",
            "(Landroid/content/Context;Ljava/lang/String;Ljava/lang/String;)Z",
            &[
                JValue::Object(context),
                JValue::Object(&jlabel),
                JValue::Object(&jtext),
            ],
        )
        .and_then(|v| v.z())
        .map_err(platform("setText"))?;

    if written {
        Ok(())
    } else {
        Err(ClipboardError::Platform("ClipboardManager rejected the clip".into()))
    }
}

fn with_runtime<T>(
    f: impl FnOnce(&mut JNIEnv, &JObject) -> Result<T, ClipboardError>,
) -> Result<T, ClipboardError> {
    let (vm, context) = RUNTIME
        .get()
        .ok_or(ClipboardError::NotInitialized("call init_with_context first"))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(platform("attach_current_thread"))?;
    f(&mut *env, context.as_obj())
}

/// Get text from the clipboard, using the context captured at initialization.
#[must_use]
pub fn get_text() -> Option<String> {
    match with_runtime(get_text_with_context) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Unable to read clipboard: {e}");
            None
        }
    }
}

/// Set text to the clipboard, using the context captured at initialization.
///
/// # Errors
/// Returns an error if the library was not initialized or the write fails.
pub fn set_text(text: &str, label: Option<&str>) -> Result<(), ClipboardError> {
    with_runtime(|env, context| set_text_with_context(env, context, text, label))
}

/// Whether this platform has a clipboard.
#[must_use]
pub const fn is_supported() -> bool {
    true
}
