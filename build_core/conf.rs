//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Default manifest describing the demonstration sequences.
pub(crate) const DEMO_MANIFEST_PATH: &str = "build_core/var/demo_manifest.json";
/// Environment variable pointing to a custom manifest.
pub(crate) const DEMO_MANIFEST_ENV: &str = "TICKSEQ_DEMO_MANIFEST_PATH";
/// Generated demonstration file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_DEMO_FILE_NAME: &str = "generated_demonstrations.rs";
