//! Display sink shared by several concurrently running sequences.
//!
//! The firmware (or the demo program) owns the real sink inside an
//! [`embassy_sync::mutex::Mutex`]; every run gets its own [`SharedSink`] handle.
//! The lock is held for a single `write` or `clear` and never across a timer
//! wait, so runs interleave freely between steps. Keeping their output apart is
//! the job of the start offsets, not of this adapter.

use embassy_sync::{blocking_mutex::raw::RawMutex, mutex::Mutex};

use crate::sequence::traits::display_sink::DisplaySink;

/// Copyable handle onto a mutex-protected display sink.
pub struct SharedSink<'a, M: RawMutex, S> {
    display: &'a Mutex<M, S>,
}

impl<'a, M: RawMutex, S: DisplaySink> SharedSink<'a, M, S> {
    /// Wrap a reference to the shared display.
    pub fn new(display: &'a Mutex<M, S>) -> Self {
        Self { display }
    }
}

impl<M: RawMutex, S> Clone for SharedSink<'_, M, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, S> Copy for SharedSink<'_, M, S> {}

impl<M: RawMutex, S: DisplaySink> DisplaySink for SharedSink<'_, M, S> {
    type Error = S::Error;

    async fn write<'a>(&'a mut self, text: &'a str) -> Result<(), Self::Error> {
        let mut display = self.display.lock().await;
        display.write(text).await
    }

    async fn clear<'a>(&'a mut self) -> Result<(), Self::Error> {
        let mut display = self.display.lock().await;
        display.clear().await
    }
}
