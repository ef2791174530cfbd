//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, validation, code generation).
pub(crate) enum BuildError {
    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the manifest.
    #[error("[MESSAGE]:Invalid JSON format [ERROR]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Provided path is invalid.
    #[error("[MESSAGE]:Failed to read path. [PATH]:{path}")]
    ReadPath { path: &'static str },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    /// The manifest does not describe any demonstration.
    #[error("[MESSAGE]:Manifest has no demonstration")]
    NoDemonstration,

    /// The shared countdown is empty.
    #[error("[MESSAGE]:Countdown has no label")]
    EmptyCountdown,

    /// A demonstration name is not a usable identifier.
    #[error("[MESSAGE]:Invalid demonstration name [NAME]:{name}")]
    InvalidName { name: String },

    /// Two demonstrations share the same name.
    #[error("[MESSAGE]:Duplicate demonstration [NAME]:{name}")]
    DuplicateName { name: String },
}
