//! Android platform build utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Configuration for Kotlin → DEX compilation.
#[derive(Debug, Clone)]
pub struct AndroidConfig {
    /// Kotlin source files to compile.
    pub kotlin_sources: Vec<PathBuf>,
    /// Name of the generated DEX file inside `OUT_DIR`.
    pub dex_name: String,
    /// Minimum API level passed to d8.
    pub min_api: u32,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            kotlin_sources: Vec::new(),
            dex_name: "classes.dex".to_string(),
            min_api: 24,
        }
    }
}

impl AndroidConfig {
    /// Add a Kotlin source file.
    #[must_use]
    pub fn kotlin_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.kotlin_sources.push(path.into());
        self
    }
}

fn sdk_root() -> Option<PathBuf> {
    env::var_os("ANDROID_HOME")
        .or_else(|| env::var_os("ANDROID_SDK_ROOT"))
        .map(PathBuf::from)
}

/// Pick the entry of `dir` with the highest version-like name.
fn newest_entry(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let mut entries: Vec<(Vec<u32>, PathBuf)> = fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let version = name.strip_prefix(prefix)?;
            let key = version
                .split(|c: char| !c.is_ascii_digit())
                .filter_map(|part| part.parse().ok())
                .collect();
            Some((key, entry.path()))
        })
        .collect();
    entries.sort();
    entries.pop().map(|(_, path)| path)
}

/// Locate `android.jar` for the newest installed platform.
#[must_use]
pub fn find_android_jar() -> Option<PathBuf> {
    let platforms = sdk_root()?.join("platforms");
    let jar = newest_entry(&platforms, "android-")?.join("android.jar");
    jar.exists().then_some(jar)
}

/// Locate `d8.jar` from the newest installed build-tools.
#[must_use]
pub fn find_d8_jar() -> Option<PathBuf> {
    let build_tools = sdk_root()?.join("build-tools");
    let jar = newest_entry(&build_tools, "")?.join("lib").join("d8.jar");
    jar.exists().then_some(jar)
}

/// Compile Kotlin helpers into `OUT_DIR/classes.dex`.
///
/// The crate embeds the result with
/// `include_bytes!(concat!(env!("OUT_DIR"), "/classes.dex"))`.
///
/// # Panics
/// Panics when the Android SDK, `kotlinc` or d8 cannot be found or fail.
pub fn build_kotlin(sources: &[&str]) {
    let config = sources
        .iter()
        .fold(AndroidConfig::default(), |config, source| config.kotlin_source(*source));
    build_kotlin_with(&config);
}

/// Like [`build_kotlin`] with explicit configuration.
///
/// # Panics
/// Panics when the Android SDK, `kotlinc` or d8 cannot be found or fail.
pub fn build_kotlin_with(config: &AndroidConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));

    println!("cargo:rerun-if-env-changed=ANDROID_HOME");
    println!("cargo:rerun-if-env-changed=ANDROID_SDK_ROOT");
    for source in &config.kotlin_sources {
        println!("cargo:rerun-if-changed={}", manifest_dir.join(source).display());
    }

    let android_jar =
        find_android_jar().expect("android.jar not found, set ANDROID_HOME or ANDROID_SDK_ROOT");
    let d8_jar = find_d8_jar().expect("d8.jar not found, install Android build-tools");

    // 1. Kotlin → JVM classes
    let classes_jar = out_dir.join("kotlin-classes.jar");
    let mut kotlinc = Command::new("kotlinc");
    kotlinc
        .arg("-classpath")
        .arg(&android_jar)
        .arg("-no-reflect")
        .arg("-d")
        .arg(&classes_jar);
    for source in &config.kotlin_sources {
        kotlinc.arg(manifest_dir.join(source));
    }
    let output = kotlinc.output().expect("Failed to run kotlinc");
    assert!(
        output.status.success(),
        "Kotlin compilation failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    // 2. Classes → DEX; the Kotlin stdlib ships with the host app
    let dex_dir = out_dir.join("dex");
    fs::create_dir_all(&dex_dir).expect("Failed to create dex output directory");
    let output = Command::new("java")
        .arg("-cp")
        .arg(&d8_jar)
        .arg("com.android.tools.r8.D8")
        .arg("--lib")
        .arg(&android_jar)
        .arg("--min-api")
        .arg(config.min_api.to_string())
        .arg("--output")
        .arg(&dex_dir)
        .arg(&classes_jar)
        .output()
        .expect("Failed to run d8");
    assert!(
        output.status.success(),
        "d8 failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    fs::copy(dex_dir.join("classes.dex"), out_dir.join(&config.dex_name))
        .expect("d8 produced no classes.dex");
}
