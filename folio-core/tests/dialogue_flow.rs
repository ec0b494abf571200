//! Dialogue sequencing tests.
//!
//! These tests drive the sequencer and the timer-backed typewriter through
//! the interaction contract of the dialogue box:
//! - one character per tick, exactly `len` ticks per line
//! - first advance skips to the full line, second moves on
//! - wraparound after the last line

use std::time::Duration;

use folio_core::testing::script_of;
use folio_core::{Advance, Portfolio, RevealState, Sequencer, Typewriter, DEFAULT_REVEAL_INTERVAL};

// =============================================================================
// PURE SEQUENCER
// =============================================================================

#[test]
fn test_two_n_advances_return_to_start() {
    for n in 1..=6 {
        let texts: Vec<String> = (0..n).map(|i| format!("line number {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut seq = Sequencer::new(script_of(&refs));

        for _ in 0..2 * n {
            seq.advance();
        }

        assert_eq!(seq.cursor(), 0, "script of {n} lines");
        assert_eq!(seq.revealed_len(), 0, "script of {n} lines");
    }
}

#[test]
fn test_tick_count_equals_line_length() {
    for text in ["", "a", "Hello there! I'm Josaiah.", "ünïcödé ▶"] {
        let mut seq = Sequencer::new(script_of(&[text]));
        let mut ticks = 0;
        while !seq.is_complete() {
            seq.tick();
            ticks += 1;
        }
        assert_eq!(ticks, text.chars().count(), "{text:?}");
    }
}

#[test]
fn test_advance_while_revealing_never_moves_cursor() {
    let mut seq = Sequencer::new(script_of(&["first line", "second"]));
    for partial in 0..10 {
        let mut seq_copy = seq.clone();
        for _ in 0..partial {
            seq_copy.tick();
        }
        assert_eq!(seq_copy.state(), RevealState::Revealing);
        assert_eq!(seq_copy.advance(), Advance::Completed);
        assert_eq!(seq_copy.cursor(), 0);
        assert_eq!(seq_copy.revealed_text(), "first line");
    }
    seq.advance();
    assert_eq!(seq.advance(), Advance::NextLine(1));
}

#[test]
fn test_hi_bye_walkthrough() {
    let mut seq = Sequencer::new(script_of(&["Hi", "Bye"]));

    seq.tick();
    seq.tick();
    assert_eq!(seq.revealed_text(), "Hi");
    assert!(seq.is_complete());

    seq.advance();
    assert_eq!((seq.cursor(), seq.revealed_text()), (1, ""));

    seq.tick();
    assert_eq!(seq.revealed_text(), "B");

    seq.advance();
    assert_eq!((seq.cursor(), seq.revealed_text()), (1, "Bye"));

    seq.advance();
    assert_eq!(seq.cursor(), 0);
}

// =============================================================================
// TIMER-DRIVEN TYPEWRITER
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_default_dialogue_reveals_at_forty_ms() {
    let script = Portfolio::default().script().unwrap();
    let first = script.lines()[0].text.clone();
    let mut tw = Typewriter::start(script, DEFAULT_REVEAL_INTERVAL);

    let started = tokio::time::Instant::now();
    while tw.next_tick().await {}
    let elapsed = started.elapsed();

    assert_eq!(tw.sequencer().revealed_text(), first);
    assert_eq!(
        elapsed,
        DEFAULT_REVEAL_INTERVAL * first.chars().count() as u32
    );
}

#[tokio::test(start_paused = true)]
async fn test_single_live_timer_across_lines() {
    let mut tw = Typewriter::start(script_of(&["abc", "defgh"]), Duration::from_millis(10));

    // Let the first line half-reveal, then skip and advance.
    tokio::time::sleep(Duration::from_millis(15)).await;
    tw.pump();
    tw.advance();
    tw.advance();
    assert_eq!(tw.sequencer().cursor(), 1);

    // Only the new line's timer is ticking: three periods, three characters.
    tokio::time::sleep(Duration::from_millis(35)).await;
    assert_eq!(tw.pump(), 3);
    assert_eq!(tw.sequencer().revealed_text(), "def");
}

#[tokio::test(start_paused = true)]
async fn test_full_cycle_with_timer() {
    let mut tw = Typewriter::start(script_of(&["ab", "c"]), Duration::from_millis(5));
    for _ in 0..4 {
        tw.advance();
    }
    assert_eq!(tw.sequencer().cursor(), 0);
    assert_eq!(tw.sequencer().revealed_len(), 0);
    assert!(tw.has_timer());
}
