//! `tickseq` library: a `no_std` executor that runs an ordered list of timed
//! display steps one after another, plus the staggered "bomb countdown"
//! demonstration built on top of it. The display and the timer are provided
//! by the caller through small async traits.
#![no_std]
//==================================================================================
/// Data contract shared by the build script and the executor (steps, sequences, reports).
pub mod core;
/// Errors raised while running a sequence (all originate in the display sink).
pub mod error;
/// `defmt::Format` impls for the types of [`crate::core`].
#[cfg(feature = "defmt")]
mod format;
/// Staggered demonstration runs over a shared display.
pub mod orchestrator;
/// Execution cursor, executor, collaborator traits and the shared display adapter.
pub mod sequence;
//==================================================================================
