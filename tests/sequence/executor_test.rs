//! Executor behaviour under tokio's paused clock: exact delays, ordering and
//! failure handling for a single sequence.
mod helpers {
    include!("../helpers/mod.rs");
}

use helpers::{DisplayError, MockTimer, RecordingDisplay};
use tickseq::core::{Sequence, Step};
use tickseq::error::SequenceError;
use tickseq::sequence::executor::run_sequence;
use tokio::time::{Duration, Instant};

const COUNTDOWN: [Step<'static>; 4] = [
    Step::labelled("3..."),
    Step::labelled("2..."),
    Step::labelled("1..."),
    Step::labelled("Boom!"),
];

#[tokio::test(start_paused = true)]
async fn test_countdown_writes_labels_one_second_apart() {
    let mut display = RecordingDisplay::default();
    let mut timer = MockTimer;
    let start = Instant::now();

    let report = run_sequence(&mut display, &mut timer, &Sequence::new(&COUNTDOWN))
        .await
        .expect("countdown must complete");

    assert_eq!(display.lines(), ["3...", "2...", "1...", "Boom!"]);
    assert_eq!(display.gaps_ms(), [1_000, 1_000, 1_000]);
    assert_eq!(display.clears, 1);
    assert_eq!(report.writes, 4);
    assert_eq!(report.waited_ms, 3_000);

    // Completion follows the last write with no trailing delay.
    let boom_at = display.time_of("Boom!").expect("Boom! must be written");
    assert_eq!(boom_at.duration_since(start), Duration::from_secs(3));
    assert_eq!(Instant::now(), boom_at);
}

#[tokio::test(start_paused = true)]
async fn test_empty_sequence_completes_immediately() {
    let mut display = RecordingDisplay::default();
    let start = Instant::now();

    let report = run_sequence(&mut display, &mut MockTimer, &Sequence::new(&[]))
        .await
        .expect("empty sequence cannot fail");

    assert!(display.transcript.is_empty());
    assert_eq!(report.steps_run, 0);
    assert_eq!(Instant::now(), start);
}

#[tokio::test(start_paused = true)]
async fn test_single_step_completes_without_delay() {
    let steps = [Step::labelled("Boom!")];
    let mut display = RecordingDisplay::default();
    let start = Instant::now();

    run_sequence(&mut display, &mut MockTimer, &Sequence::new(&steps))
        .await
        .expect("single step must complete");

    assert_eq!(display.lines(), ["Boom!"]);
    assert_eq!(Instant::now(), start);
}

#[tokio::test(start_paused = true)]
async fn test_gaps_follow_each_step_delay() {
    let steps = [
        Step::labelled("armed").with_delay_ms(250),
        Step::labelled("ticking").with_delay_ms(1_500),
        Step::pause(500),
        Step::labelled("Boom!").with_delay_ms(9_999),
    ];
    let mut display = RecordingDisplay::default();

    let report = run_sequence(&mut display, &mut MockTimer, &Sequence::new(&steps))
        .await
        .expect("sequence must complete");

    assert_eq!(display.lines(), ["armed", "ticking", "Boom!"]);
    // The pause step adds its delay to the gap before "Boom!".
    assert_eq!(display.gaps_ms(), [250, 2_000]);
    assert_eq!(report.steps_run, 4);
    assert_eq!(report.waited_ms, 2_250);
}

#[tokio::test(start_paused = true)]
async fn test_zero_delays_keep_order() {
    let steps = [
        Step::labelled("1st bomb").with_delay_ms(0),
        Step::labelled("3...").with_delay_ms(0),
        Step::labelled("Boom!").with_delay_ms(0),
    ];
    let mut display = RecordingDisplay::default();
    let start = Instant::now();

    run_sequence(&mut display, &mut MockTimer, &Sequence::new(&steps))
        .await
        .expect("sequence must complete");

    assert_eq!(display.lines(), ["1st bomb", "3...", "Boom!"]);
    assert_eq!(Instant::now(), start);
}

#[tokio::test(start_paused = true)]
async fn test_failing_write_aborts_the_rest_of_the_sequence() {
    let mut display = RecordingDisplay::failing_on("1...");
    let start = Instant::now();

    let err = run_sequence(&mut display, &mut MockTimer, &Sequence::new(&COUNTDOWN))
        .await
        .expect_err("write of 1... must fail");

    match err {
        SequenceError::Write { index, error } => {
            assert_eq!(index, 2);
            assert_eq!(error, DisplayError::Unplugged);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(display.lines(), ["3...", "2..."]);
    // No wait happens after the failed step.
    assert_eq!(Instant::now().duration_since(start), Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_without_clear_keeps_previous_output() {
    let mut display = RecordingDisplay::default();

    run_sequence(
        &mut display,
        &mut MockTimer,
        &Sequence::new(&COUNTDOWN[..1]).without_clear(),
    )
    .await
    .expect("sequence must complete");

    assert_eq!(display.clears, 0);
    assert_eq!(display.lines(), ["3..."]);
}

#[tokio::test(start_paused = true)]
async fn test_failing_clear_aborts_before_any_step() {
    let mut display = RecordingDisplay::failing_clear_at(0);
    let start = Instant::now();

    let err = run_sequence(&mut display, &mut MockTimer, &Sequence::new(&COUNTDOWN))
        .await
        .expect_err("clear must fail");

    assert!(matches!(err, SequenceError::Clear(DisplayError::Unplugged)));
    assert_eq!(err.step_index(), None);
    assert!(display.transcript.is_empty());
    // No timer wait was started.
    assert_eq!(Instant::now(), start);
}
