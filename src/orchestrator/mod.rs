//! Demonstration orchestrator: runs the configured countdown sequences
//! concurrently on one shared display, each after its own start offset.
//!
//! The demonstration table is generated at build time from
//! `build_core/var/demo_manifest.json` (see `build.rs`). It provides:
//!
//! * one static step table per demonstration;
//! * [`DEMONSTRATIONS`], in manifest order;
//! * [`run_demonstrations`], which starts every demonstration at once and
//!   returns one result per demonstration.

use embassy_sync::{blocking_mutex::raw::RawMutex, mutex::Mutex};

use crate::{
    core::{Sequence, SequenceReport, Step},
    error::SequenceError,
    sequence::{
        executor::run_sequence,
        shared_sink::SharedSink,
        traits::{display_sink::DisplaySink, sequence_timer::SequenceTimer},
    },
};

/// One countdown run of the demonstration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Demonstration {
    /// Identifier of the demonstration (snake_case).
    pub name: &'static str,
    /// Heading written as the first step.
    pub title: &'static str,
    /// Wait before the sequence starts, counted from the orchestrator start (ms).
    pub offset_ms: u32,
    /// Steps of the sequence.
    pub steps: &'static [Step<'static>],
}

impl Demonstration {
    /// Sequence run by this demonstration. Every demonstration clears the display first.
    pub fn sequence(&self) -> Sequence<'static> {
        Sequence::new(self.steps)
    }

    /// Time from the orchestrator start to this demonstration's last write (ms).
    pub fn finishes_at_ms(&self) -> u64 {
        self.offset_ms as u64 + self.sequence().total_delay_ms()
    }
}

/// Wait for the demonstration's offset, then run its sequence.
pub async fn run_demonstration<S: DisplaySink, T: SequenceTimer>(
    mut sink: S,
    mut timer: T,
    demonstration: &Demonstration,
) -> Result<SequenceReport, SequenceError<S::Error>> {
    if demonstration.offset_ms > 0 {
        timer.delay_ms(demonstration.offset_ms).await;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("Starting demonstration {=str}", demonstration.name);

    let result = run_sequence(&mut sink, &mut timer, &demonstration.sequence()).await;

    #[cfg(feature = "defmt")]
    match &result {
        Ok(_) => defmt::info!("Demonstration {=str} complete", demonstration.name),
        Err(_) => defmt::error!("Demonstration {=str} aborted", demonstration.name),
    }

    result
}

/// Hook attached to logging steps: emits the label on the diagnostic log.
pub fn log_label(label: &str) {
    #[cfg(feature = "defmt")]
    defmt::info!("{=str}", label);
    #[cfg(not(feature = "defmt"))]
    let _ = label;
}

/// Checks that no demonstration starts before the previous one wrote its last label.
pub fn offsets_are_staggered(demonstrations: &[Demonstration]) -> bool {
    demonstrations
        .windows(2)
        .all(|pair| pair[0].finishes_at_ms() < pair[1].offset_ms as u64)
}

include!(concat!(env!("OUT_DIR"), "/generated_demonstrations.rs"));
