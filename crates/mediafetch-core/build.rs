use std::env;
use std::fs;
use std::path::{Path, PathBuf};

include!("../build_common.rs");

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    process_readme_for_rustdoc(&manifest_dir);

    // CARGO_MANIFEST_DIR is crates/mediafetch-core, so the workspace root is two levels up.
    let crate_path = PathBuf::from(&manifest_dir);
    let repo_root = crate_path
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map_or_else(|| crate_path.clone(), Path::to_path_buf);

    // Used at runtime to decide between development and packaged tool locations
    println!(
        "cargo:rustc-env=MEDIAFETCH_REPO_ROOT={}",
        repo_root.to_string_lossy()
    );

    println!("cargo:rerun-if-changed=build.rs");
}
