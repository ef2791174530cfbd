//! Abstraction traits for the executor's two collaborators (display sink and timer).
pub mod display_sink;
pub mod sequence_timer;
