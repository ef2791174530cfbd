//! Defines the data contract shared by `build.rs` (which generates the
//! demonstration step tables) and the executor that runs them.
//!
//! Everything here is plain data: no timer, no display, no allocation.
//! This file is also compiled into the build script, so the `defmt::Format`
//! impls for these types live in `src/format.rs`.

// Some items are only used by generated code or by the build script.
#![allow(dead_code)]

/// Delay used between consecutive countdown steps (ms).
pub const DEFAULT_STEP_DELAY_MS: u32 = 1_000;

/// Callback invoked with a step's label right after it has been written.
pub type StepHook = fn(&str);

/// One unit of a sequence: an optional display write followed by a delay.
///
/// `delay_ms` is the wait *before the next step*; the last step of a sequence
/// never waits. No `PartialEq`: the hook is a function pointer.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// Text written to the display sink. `None` for pure-delay steps.
    pub label: Option<&'a str>,
    /// Wait before the following step starts.
    pub delay_ms: u32,
    /// Extra side effect run once the label has been written.
    pub on_complete: Option<StepHook>,
}

impl<'a> Step<'a> {
    /// Step writing `label`, followed by the default delay.
    pub const fn labelled(label: &'a str) -> Self {
        Self {
            label: Some(label),
            delay_ms: DEFAULT_STEP_DELAY_MS,
            on_complete: None,
        }
    }

    /// Step that only waits.
    pub const fn pause(delay_ms: u32) -> Self {
        Self {
            label: None,
            delay_ms,
            on_complete: None,
        }
    }

    /// Override the delay before the next step.
    pub const fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Attach a hook called with the label after the write.
    /// Ignored on steps without a label.
    pub const fn with_on_complete(mut self, hook: StepHook) -> Self {
        self.on_complete = Some(hook);
        self
    }
}

/// Ordered list of steps, plus the caller's clear policy.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<'a> {
    /// Steps, executed strictly in slice order.
    pub steps: &'a [Step<'a>],
    /// Clear the display sink before the first step.
    pub clear_on_start: bool,
}

impl<'a> Sequence<'a> {
    /// Sequence that clears the display before running `steps`.
    pub const fn new(steps: &'a [Step<'a>]) -> Self {
        Self {
            steps,
            clear_on_start: true,
        }
    }

    /// Keep whatever is already on the display.
    pub const fn without_clear(mut self) -> Self {
        self.clear_on_start = false;
        self
    }

    /// Number of steps.
    #[inline]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Checks whether the sequence has no steps.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total time a full run spends waiting (every delay except the last step's).
    pub fn total_delay_ms(&self) -> u64 {
        match self.steps.split_last() {
            Some((_, rest)) => rest.iter().map(|step| step.delay_ms as u64).sum(),
            None => 0,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceReport {
    /// Steps executed.
    pub steps_run: usize,
    /// Labels written to the display sink.
    pub writes: usize,
    /// Sum of the delays awaited (ms).
    pub waited_ms: u64,
}
