use std::path::Path;
use std::{env, fs};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Sibling directories with a manifest are the workspace crates
    let workspace_root = Path::new(&manifest_dir).parent().unwrap();
    let mut workspace_crates = fs::read_dir(workspace_root)
        .unwrap()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            entry.path().join("Cargo.toml").exists().then(|| entry.file_name().into_string().ok())?
        })
        .collect::<Vec<_>>();
    workspace_crates.sort();

    println!("cargo:rustc-env=WORKSPACE_CRATES={}", workspace_crates.join(","));
}
