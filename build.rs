//! Cargo build script: generates the demonstration step tables.

// Re-export the core module from src/core.rs so build_core can reuse it
#[path = "src/core.rs"]
mod core;

mod build_core;
use crate::build_core::{
    conf::*, domain::Manifest, errors::BuildError, gen_demonstrations::run_demonstrations_gen,
};

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

// The demonstration sequences are declarative data (JSON). This script turns them
// into static `Step` tables plus the function that runs them all concurrently, so
// the `no_std` library never parses anything at runtime.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    // Tell Cargo to rerun this script whenever one of these files changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/core.rs");
    println!("cargo:rerun-if-changed={}", DEMO_MANIFEST_PATH);
    println!("cargo:rerun-if-env-changed={}", DEMO_MANIFEST_ENV);

    // 1. Locate the manifest.
    // Priority order:
    //   1. TICKSEQ_DEMO_MANIFEST_PATH environment variable (absolute or relative path)
    //   2. Default manifest shipped with the crate
    let default_manifest_path =
        PathBuf::from_str(DEMO_MANIFEST_PATH).map_err(|_| BuildError::ReadPath {
            path: DEMO_MANIFEST_PATH,
        })?;

    let user_manifest_path = std::env::var(DEMO_MANIFEST_ENV).ok().map(PathBuf::from);

    let manifest_path = match user_manifest_path {
        Some(path) if path.exists() => {
            println!("cargo:warning=Using custom demo manifest from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        }
        Some(path) => {
            println!(
                "cargo:warning=Custom manifest path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default demo manifest");
            default_manifest_path
        }
        None => default_manifest_path,
    };

    // 2. Parse it.
    let manifest_string = fs::read_to_string(&manifest_path).map_err(|e| BuildError::ReadFile {
        path: manifest_path.clone(),
        source: e,
    })?;
    let manifest: Manifest = serde_json::from_str(&manifest_string)?;

    // 3. Generate the step tables and the runner.
    let buffer_demo_code = run_demonstrations_gen(&manifest)?;

    // 4. Write the generated code into `OUT_DIR`.
    // The `include!` in `src/orchestrator/mod.rs` pulls it in at compile time.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let demo_file_path = PathBuf::from(out_dir_str).join(OUT_DIR_DEMO_FILE_NAME);

    fs::write(&demo_file_path, &buffer_demo_code).map_err(|e| BuildError::WriteFile {
        path: demo_file_path,
        source: e,
    })?;

    Ok(())
}
