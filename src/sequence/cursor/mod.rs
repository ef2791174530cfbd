//! Execution cursor: the "next step index" of one in-flight run.
//!
//! The cursor walks a borrowed step list without mutating it. Each position
//! tells the executor whether a wait must follow the step.
use crate::core::Step;

/// Step handed out by [`ExecutionCursor`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition<'s, 'a> {
    /// Index of the step within its sequence.
    pub index: usize,
    /// The step itself.
    pub step: &'s Step<'a>,
    /// `true` for the final step: the sequence completes right after it.
    pub is_last: bool,
}

impl CursorPosition<'_, '_> {
    /// Delay to await after this step, `None` on the last step.
    #[inline]
    pub fn pending_delay_ms(&self) -> Option<u32> {
        if self.is_last {
            None
        } else {
            Some(self.step.delay_ms)
        }
    }
}

/// Index-based cursor over a fixed step list.
#[derive(Debug, Clone)]
pub struct ExecutionCursor<'s, 'a> {
    steps: &'s [Step<'a>],
    next: usize,
}

impl<'s, 'a> ExecutionCursor<'s, 'a> {
    /// Cursor positioned before the first step.
    pub fn new(steps: &'s [Step<'a>]) -> Self {
        Self { steps, next: 0 }
    }

    /// Index of the next step to execute.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Whether every step has been handed out.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    /// Steps not yet handed out.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.next)
    }
}

impl<'s, 'a> Iterator for ExecutionCursor<'s, 'a> {
    type Item = CursorPosition<'s, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        let step = self.steps.get(index)?;
        self.next += 1;
        Some(CursorPosition {
            index,
            step,
            is_last: index + 1 == self.steps.len(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ExecutionCursor<'_, '_> {}
