//! Workspace for the build script: manifest structures and the code generator.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_demonstrations;
pub mod name_helpers;
