use std::{env, fmt::Write as _, fs, path::Path};

/// (generated constant, `[package]` key, fallback)
const PACKAGE_FIELDS: [(&str, &str, &str); 3] = [
    ("PKG_NAME", "name", "trip-planner-rs"),
    ("PKG_VERSION", "version", "0.0.0"),
    ("PKG_DESCRIPTION", "description", ""),
];

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let manifest_path = Path::new(&manifest_dir).join("Cargo.toml");
    println!("cargo:rerun-if-changed={}", manifest_path.display());

    let content = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|e| panic!("Failed to read Cargo.toml: {e}"));
    let manifest: toml::Table =
        toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse Cargo.toml: {e}"));
    let package = manifest
        .get("package")
        .and_then(|p| p.as_table())
        .expect("Cargo.toml missing [package]");

    let mut generated = String::new();
    for (constant, key, fallback) in PACKAGE_FIELDS {
        let value = package.get(key).and_then(|v| v.as_str()).unwrap_or(fallback);
        let _ = writeln!(generated, "pub const {constant}: &str = {value:?};");
    }

    // Settings live under the binary's name, not the package's.
    let app_dir = manifest
        .get("bin")
        .and_then(|bins| bins.as_array())
        .and_then(|bins| bins.first())
        .and_then(|bin| bin.get("name"))
        .and_then(|name| name.as_str())
        .unwrap_or("trip-planner");
    let _ = writeln!(generated, "pub const APP_DIR_NAME: &str = {app_dir:?};");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    fs::write(Path::new(&out_dir).join("pkg_info.rs"), generated)
        .expect("Failed to write pkg_info.rs");
}
