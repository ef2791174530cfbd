//! # Bomb countdown
//!
//! Runs the six staggered countdown demonstrations on the terminal:
//! - each demonstration clears the screen, then writes its title and the countdown;
//! - the first one has no delay, the others wait one second per step;
//! - start offsets (0, 1, 6, 11, 16, 21 s) keep their output apart.
//!
//! ```bash
//! cargo run --example countdown
//! ```

use std::io::{self, Write};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use tickseq::orchestrator::{run_demonstrations, DEMONSTRATIONS};
use tickseq::sequence::traits::{display_sink::DisplaySink, sequence_timer::SequenceTimer};
use tokio::time::{sleep, Duration};

/// Terminal display: one line per label, ANSI clear.
struct Terminal {
    out: io::Stdout,
}

impl DisplaySink for Terminal {
    type Error = io::Error;

    async fn write<'a>(&'a mut self, text: &'a str) -> Result<(), Self::Error> {
        let mut out = self.out.lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    async fn clear<'a>(&'a mut self) -> Result<(), Self::Error> {
        let mut out = self.out.lock();
        // Erase the screen and move the cursor home.
        write!(out, "\x1B[2J\x1B[H")?;
        out.flush()
    }
}

/// Timer driven by the tokio runtime.
#[derive(Clone, Copy)]
struct TokioTimer;

impl SequenceTimer for TokioTimer {
    async fn delay_ms<'a>(&'a mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let display = Mutex::<NoopRawMutex, _>::new(Terminal { out: io::stdout() });

    let results = run_demonstrations(&display, &TokioTimer).await;

    for (result, demonstration) in results.iter().zip(DEMONSTRATIONS.iter()) {
        match result {
            Ok(report) => eprintln!(
                "{}: {} steps, {} ms waited",
                demonstration.name, report.steps_run, report.waited_ms
            ),
            Err(e) => eprintln!("{}: aborted: {}", demonstration.name, e),
        }
    }
}
