//! Apple platform build utilities.

use std::env;
use std::path::PathBuf;

/// Configuration for Swift compilation.
#[derive(Debug, Clone)]
pub struct AppleSwiftConfig {
    /// The crate/module name (e.g., "sharekit-share").
    pub pkg_name: String,
    /// Swift source files to compile.
    pub swift_sources: Vec<PathBuf>,
    /// Output library name (e.g., "ShareHelper").
    pub lib_name: String,
    /// Frameworks to link.
    pub frameworks: Vec<String>,
    /// Minimum iOS version passed to `swiftc -target`.
    pub ios_deployment_target: String,
    /// Minimum macOS version passed to `swiftc -target`.
    pub macos_deployment_target: String,
}

impl AppleSwiftConfig {
    /// Create a new config with required fields.
    #[must_use]
    pub fn new(pkg_name: impl Into<String>, lib_name: impl Into<String>) -> Self {
        Self {
            pkg_name: pkg_name.into(),
            swift_sources: Vec::new(),
            lib_name: lib_name.into(),
            frameworks: vec!["Foundation".to_string()],
            ios_deployment_target: "14.0".to_string(),
            macos_deployment_target: "12.0".to_string(),
        }
    }

    /// Add a Swift source file.
    #[must_use]
    pub fn swift_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.swift_sources.push(path.into());
        self
    }

    /// Add a framework to link.
    #[must_use]
    pub fn framework(mut self, name: impl Into<String>) -> Self {
        self.frameworks.push(name.into());
        self
    }
}

/// Generate Swift bridge code from bridge modules.
///
/// This is for crates that only need bridge generation, not full Swift compilation.
///
/// # Arguments
/// * `bridges` - Slice of paths to Rust bridge modules (e.g., "src/sys/apple/mod.rs")
///
/// # Panics
/// Panics if cargo did not provide `OUT_DIR` or `CARGO_PKG_NAME`.
pub fn build_apple_bridge(bridges: &[&str]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let pkg_name = env::var("CARGO_PKG_NAME").expect("CARGO_PKG_NAME not set");

    for bridge in bridges {
        println!("cargo:rerun-if-changed={bridge}");
    }

    swift_bridge_build::parse_bridges(bridges.to_vec()).write_all_concatenated(out_dir, &pkg_name);
}

fn xcrun(args: &[&str]) -> String {
    let output = std::process::Command::new("xcrun")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("xcrun {args:?} failed: {e}"));
    String::from_utf8(output.stdout)
        .expect("xcrun printed non UTF-8 output")
        .trim()
        .to_string()
}

/// Compile Swift code and link it into the crate.
///
/// This handles:
/// 1. Swift bridge generation
/// 2. Creating bridging headers
/// 3. Compiling Swift to object file
/// 4. Creating static library
/// 5. Linking frameworks
///
/// # Arguments
/// * `bridge_rs` - Path to the Rust bridge module
/// * `config` - Swift compilation configuration
///
/// # Panics
/// Panics when any toolchain step fails; the build cannot continue without the
/// Swift helper.
#[cfg(target_os = "macos")]
#[allow(clippy::too_many_lines)]
pub fn compile_swift(bridge_rs: &str, config: &AppleSwiftConfig) {
    use std::fs;
    use std::process::Command;

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let target = env::var("TARGET").expect("TARGET not set");

    // Track changes
    println!("cargo:rerun-if-changed={bridge_rs}");
    for source in &config.swift_sources {
        println!("cargo:rerun-if-changed={}", manifest_dir.join(source).display());
    }

    // 1. Generate Swift bridge code
    swift_bridge_build::parse_bridges(vec![bridge_rs])
        .write_all_concatenated(out_dir.clone(), &config.pkg_name);

    // 2. Create combined bridging header
    let core_h = out_dir.join("SwiftBridgeCore.h");
    let pkg_h = out_dir.join(format!("{0}/{0}.h", config.pkg_name));
    let bridging_h = out_dir.join("Bridging-Header.h");
    fs::write(
        &bridging_h,
        format!("#include \"{}\"\n#include \"{}\"\n", core_h.display(), pkg_h.display()),
    )
    .expect("Failed to write bridging header");

    // 3. Concatenate generated and hand-written Swift into one file
    let mut combined = fs::read_to_string(out_dir.join("SwiftBridgeCore.swift"))
        .expect("Failed to read SwiftBridgeCore.swift");
    combined.push('\n');
    combined.push_str(
        &fs::read_to_string(out_dir.join(format!("{0}/{0}.swift", config.pkg_name)))
            .expect("Failed to read generated swift"),
    );
    for source in &config.swift_sources {
        let full_path = manifest_dir.join(source);
        combined.push('\n');
        combined.push_str(
            &fs::read_to_string(&full_path)
                .unwrap_or_else(|_| panic!("Failed to read {}", full_path.display())),
        );
    }
    let combined_swift = out_dir.join(format!("Combined{}.swift", config.lib_name));
    fs::write(&combined_swift, combined).expect("Failed to write combined Swift file");

    // 4. Compile Swift to object file
    let is_ios = target.contains("ios");
    let is_simulator = target.ends_with("-sim") || target.starts_with("x86_64-apple-ios");
    let sdk = match (is_ios, is_simulator) {
        (true, true) => "iphonesimulator",
        (true, false) => "iphoneos",
        (false, _) => "macosx",
    };
    let arch = if target.starts_with("aarch64") { "arm64" } else { "x86_64" };
    let swift_target = if is_ios {
        let suffix = if is_simulator { "-simulator" } else { "" };
        format!("{arch}-apple-ios{}{suffix}", config.ios_deployment_target)
    } else {
        format!("{arch}-apple-macos{}", config.macos_deployment_target)
    };

    let sdk_path = xcrun(&["--sdk", sdk, "--show-sdk-path"]);
    let obj_file = out_dir.join(format!("{}.o", config.lib_name));

    let mut swiftc = Command::new("swiftc");
    swiftc
        .arg("-emit-object")
        .arg("-o")
        .arg(&obj_file)
        .arg("-sdk")
        .arg(&sdk_path)
        .arg("-target")
        .arg(&swift_target)
        .arg("-import-objc-header")
        .arg(&bridging_h)
        .arg("-parse-as-library")
        .arg("-module-name")
        .arg(&config.lib_name)
        .arg(&combined_swift);

    let output = swiftc.output().expect("Failed to run swiftc");
    assert!(
        output.status.success(),
        "Swift compilation failed ({:?}):\n{}",
        swiftc.get_args().collect::<Vec<_>>(),
        String::from_utf8_lossy(&output.stderr)
    );

    // 5. Create static library from object file
    let lib_file = out_dir.join(format!("lib{}.a", config.lib_name));
    let ar_status = Command::new("ar")
        .arg("rcs")
        .arg(&lib_file)
        .arg(&obj_file)
        .status()
        .expect("Failed to run ar");
    assert!(ar_status.success(), "ar failed");

    println!("cargo:rustc-link-search=native={}", out_dir.display());
    println!("cargo:rustc-link-lib=static={}", config.lib_name);

    // Link Swift runtime for the selected SDK
    let swiftc_path = PathBuf::from(xcrun(&["--find", "swiftc"]));
    if let Some(toolchain) = swiftc_path.parent().and_then(|bin| bin.parent()) {
        let runtime = toolchain.join("lib/swift").join(sdk);
        println!("cargo:rustc-link-search=native={}", runtime.display());
    }

    for framework in &config.frameworks {
        println!("cargo:rustc-link-lib=framework={framework}");
    }
}

/// No-op on hosts without the Apple toolchain.
#[cfg(not(target_os = "macos"))]
pub fn compile_swift(bridge_rs: &str, config: &AppleSwiftConfig) {
    println!(
        "cargo:warning=skipping Swift helper {} for {bridge_rs}: Apple targets must be built on macOS",
        config.lib_name
    );
}
