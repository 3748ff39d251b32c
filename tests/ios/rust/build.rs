use std::path::PathBuf;

fn main() {
    // The Xcode test app compiles these alongside its own sources.
    let out_dir = PathBuf::from("../app/ShareKitTest/Generated");
    std::fs::create_dir_all(&out_dir).expect("Failed to create Generated directory");

    let bridges = vec!["src/lib.rs"];
    sharekit_build::build_apple_bridge(&bridges);

    let pkg_name = env!("CARGO_PKG_NAME");
    swift_bridge_build::parse_bridges(bridges).write_all_concatenated(out_dir.clone(), pkg_name);

    let bridging_header =
        format!("#include \"SwiftBridgeCore.h\"\n#include \"{pkg_name}/{pkg_name}.h\"\n");
    std::fs::write(out_dir.join("Bridging-Header.h"), bridging_header)
        .expect("Failed to write Bridging-Header.h");

    println!("cargo:rerun-if-changed=build.rs");
}
