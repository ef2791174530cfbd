//! Error definitions shared across library modules.
//! The executor has no failure of its own: every variant wraps an error raised
//! by the display sink it drives.
use thiserror_no_std::Error;

#[derive(Error, Debug)]
/// Errors that abort a running sequence.
pub enum SequenceError<E: core::fmt::Debug> {
    /// The display sink could not be cleared before the first step.
    #[error("Display clear error: {0:?}")]
    Clear(E),

    /// The display sink rejected the label of step `index`.
    /// Steps after `index` were not executed.
    #[error("Display write error at step {index}: {error:?}")]
    Write { index: usize, error: E },
}

impl<E: core::fmt::Debug> SequenceError<E> {
    /// Index of the step that failed, `None` when the initial clear failed.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            SequenceError::Clear(_) => None,
            SequenceError::Write { index, .. } => Some(*index),
        }
    }

    /// Error reported by the display sink.
    pub fn sink_error(&self) -> &E {
        match self {
            SequenceError::Clear(error) | SequenceError::Write { error, .. } => error,
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: core::fmt::Debug> defmt::Format for SequenceError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SequenceError::Clear(error) => {
                defmt::write!(f, "Clear({})", defmt::Debug2Format(error))
            }
            SequenceError::Write { index, error } => defmt::write!(
                f,
                "Write {{ index: {}, error: {} }}",
                index,
                defmt::Debug2Format(error)
            ),
        }
    }
}
