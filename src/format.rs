//! `defmt::Format` impls for the data contract. Kept out of `core.rs`, which
//! the build script compiles without `defmt`.
use crate::core::{Sequence, SequenceReport, Step};

impl defmt::Format for Step<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Step {{ label: {}, delay_ms: {}, hooked: {} }}",
            self.label,
            self.delay_ms,
            self.on_complete.is_some()
        )
    }
}

impl defmt::Format for Sequence<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Sequence {{ steps: {}, clear_on_start: {} }}",
            self.steps,
            self.clear_on_start
        )
    }
}

impl defmt::Format for SequenceReport {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "SequenceReport {{ steps_run: {}, writes: {}, waited_ms: {} }}",
            self.steps_run,
            self.writes,
            self.waited_ms
        )
    }
}
