//! Several sequences writing to one mutex-protected display.
mod helpers {
    include!("../helpers/mod.rs");
}

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use helpers::{MockTimer, RecordingDisplay};
use tickseq::core::{Sequence, Step};
use tickseq::sequence::executor::run_sequence;
use tickseq::sequence::shared_sink::SharedSink;

const LEFT: [Step<'static>; 3] = [
    Step::labelled("L1").with_delay_ms(1_000),
    Step::labelled("L2").with_delay_ms(1_000),
    Step::labelled("L3"),
];

const RIGHT: [Step<'static>; 3] = [
    Step::labelled("R1").with_delay_ms(700),
    Step::labelled("R2").with_delay_ms(700),
    Step::labelled("R3"),
];

#[tokio::test(start_paused = true)]
async fn test_overlapping_sequences_keep_their_own_order() {
    let display = Mutex::<NoopRawMutex, _>::new(RecordingDisplay::default());

    let left = Sequence::new(&LEFT).without_clear();
    let right = Sequence::new(&RIGHT).without_clear();
    let (left_result, right_result) = {
        let mut left_sink = SharedSink::new(&display);
        let mut right_sink = SharedSink::new(&display);
        let (mut left_timer, mut right_timer) = (MockTimer, MockTimer);
        futures_util::join!(
            run_sequence(&mut left_sink, &mut left_timer, &left),
            run_sequence(&mut right_sink, &mut right_timer, &right),
        )
    };

    left_result.expect("left sequence must complete");
    right_result.expect("right sequence must complete");

    let display = display.into_inner();
    let lines = display.lines();
    assert_eq!(lines.len(), 6);

    // Writes interleave across sequences...
    assert_eq!(lines, ["L1", "R1", "R2", "L2", "R3", "L3"]);
    // ...but each sequence's own writes stay in list order.
    let left_only: Vec<_> = lines.iter().filter(|l| l.starts_with('L')).collect();
    let right_only: Vec<_> = lines.iter().filter(|l| l.starts_with('R')).collect();
    assert_eq!(left_only, [&"L1", &"L2", &"L3"]);
    assert_eq!(right_only, [&"R1", &"R2", &"R3"]);
}

#[tokio::test(start_paused = true)]
async fn test_failure_in_one_sequence_does_not_stop_the_other() {
    let display = Mutex::<NoopRawMutex, _>::new(RecordingDisplay::failing_on("R2"));

    let left = Sequence::new(&LEFT).without_clear();
    let right = Sequence::new(&RIGHT).without_clear();
    let (left_result, right_result) = {
        let mut left_sink = SharedSink::new(&display);
        let mut right_sink = SharedSink::new(&display);
        let (mut left_timer, mut right_timer) = (MockTimer, MockTimer);
        futures_util::join!(
            run_sequence(&mut left_sink, &mut left_timer, &left),
            run_sequence(&mut right_sink, &mut right_timer, &right),
        )
    };

    assert_eq!(left_result.expect("left must complete").writes, 3);
    assert_eq!(right_result.expect_err("R2 must fail").step_index(), Some(1));

    let display = display.into_inner();
    assert_eq!(display.lines(), ["L1", "R1", "L2", "L3"]);
}

#[tokio::test(start_paused = true)]
async fn test_every_shared_handle_clears_the_same_display() {
    let display = Mutex::<NoopRawMutex, _>::new(RecordingDisplay::default());
    let first_sequence = Sequence::new(&LEFT[2..]);
    let second_sequence = Sequence::new(&RIGHT[2..]);

    let (first, second) = {
        let handle = SharedSink::new(&display);
        let (mut first_sink, mut second_sink) = (handle, handle);
        let (mut first_timer, mut second_timer) = (MockTimer, MockTimer);
        futures_util::join!(
            run_sequence(&mut first_sink, &mut first_timer, &first_sequence),
            run_sequence(&mut second_sink, &mut second_timer, &second_sequence),
        )
    };
    first.expect("first must complete");
    second.expect("second must complete");

    let display = display.into_inner();
    assert_eq!(display.clears, 2);
    assert_eq!(display.lines(), ["L3", "R3"]);
}
