//! Sequential step executor: writes each step's label to the display sink and
//! waits the step's delay before the next one, strictly in list order.
use crate::{
    core::{Sequence, SequenceReport},
    error::SequenceError,
    sequence::{
        cursor::ExecutionCursor,
        traits::{display_sink::DisplaySink, sequence_timer::SequenceTimer},
    },
};

/// Run `sequence` to completion and report what was done.
///
/// Behaviour:
/// 1. Clear the sink first when the sequence asks for it.
/// 2. For every step: write its label (if any), call its hook, then wait its
///    delay unless it is the last step.
/// 3. Resolve right after the last step, without a trailing wait.
///
/// # Errors
///
/// - [`SequenceError::Clear`] when the initial clear fails; no step runs.
/// - [`SequenceError::Write`] when a label cannot be written; later steps
///   do not run and their hooks are not called.
///
/// # Example
///
/// ```rust,ignore
/// use tickseq::core::{Sequence, Step};
/// use tickseq::sequence::executor::run_sequence;
///
/// const COUNTDOWN: [Step<'static>; 4] = [
///     Step::labelled("3..."),
///     Step::labelled("2..."),
///     Step::labelled("1..."),
///     Step::labelled("Boom!"),
/// ];
///
/// let report = run_sequence(&mut display, &mut timer, &Sequence::new(&COUNTDOWN)).await?;
/// assert_eq!(report.waited_ms, 3_000);
/// ```
pub async fn run_sequence<S: DisplaySink, T: SequenceTimer>(
    sink: &mut S,
    timer: &mut T,
    sequence: &Sequence<'_>,
) -> Result<SequenceReport, SequenceError<S::Error>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("Starting sequence of {} steps", sequence.len());

    if sequence.clear_on_start {
        if let Err(error) = sink.clear().await {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display clear failed, sequence aborted");
            return Err(SequenceError::Clear(error));
        }
    }

    let mut report = SequenceReport::default();

    for position in ExecutionCursor::new(sequence.steps) {
        let step = position.step;

        // Step a: display write, then the hook.
        if let Some(label) = step.label {
            if let Err(error) = sink.write(label).await {
                #[cfg(feature = "defmt")]
                defmt::warn!("Display write failed at step {}", position.index);
                return Err(SequenceError::Write {
                    index: position.index,
                    error,
                });
            }
            report.writes += 1;

            #[cfg(feature = "defmt")]
            defmt::trace!("Step {} wrote {=str}", position.index, label);

            if let Some(hook) = step.on_complete {
                hook(label);
            }
        }
        report.steps_run += 1;

        // Step b: wait before the next step. The last step never waits.
        if let Some(delay) = position.pending_delay_ms() {
            #[cfg(feature = "defmt")]
            defmt::trace!("Waiting {} ms after step {}", delay, position.index);

            timer.delay_ms(delay).await;
            report.waited_ms += delay as u64;
        }
    }

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "Sequence complete: {} steps, {} writes",
        report.steps_run,
        report.writes
    );

    Ok(report)
}
