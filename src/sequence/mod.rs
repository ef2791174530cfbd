//! Sequential delayed-step execution: the cursor, the executor, the
//! collaborator traits and the shared display adapter.
pub mod cursor;
pub mod executor;
pub mod shared_sink;
pub mod traits;
