use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Read version from the VERSION file next to Cargo.toml, if present
    let fallback = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.1".to_string());
    let version = if let Ok(v) = env::var("TRANSCIPHER_VERSION") {
        v
    } else {
        let version_file = Path::new("VERSION");
        if version_file.exists() {
            fs::read_to_string(version_file)
                .map(|v| v.trim().to_string())
                .unwrap_or(fallback)
        } else {
            fallback
        }
    };

    println!("cargo:rustc-env=TRANSCIPHER_VERSION={}", version);
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=TRANSCIPHER_VERSION");
}
