//! Timer-driven reveal for the dialogue sequencer.
//!
//! [`RevealTimer`] is an owned repeating tokio task that pushes ticks into
//! a bounded channel. Dropping it aborts the task and discards any ticks
//! still buffered, so a stale timer can never touch a newer line.
//!
//! [`Typewriter`] pairs a [`Sequencer`] with at most one live timer and
//! swaps the timer whenever the active line changes.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

use crate::typewriter::{Advance, Script, Sequencer};

/// One character every 40ms.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(40);

const TICK_BUFFER: usize = 64;

/// A cancellable repeating tick source.
///
/// Must be spawned from within a tokio runtime.
#[derive(Debug)]
pub struct RevealTimer {
    handle: JoinHandle<()>,
    ticks: mpsc::Receiver<()>,
}

impl RevealTimer {
    /// Start ticking every `period`, first tick one period from now.
    pub fn spawn(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let (tx, ticks) = mpsc::channel(TICK_BUFFER);

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self { handle, ticks }
    }

    /// Take one buffered tick without waiting.
    pub fn try_tick(&mut self) -> bool {
        self.ticks.try_recv().is_ok()
    }

    /// Wait for the next tick. `None` if the task has stopped.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the task now. Equivalent to dropping the timer.
    pub fn cancel(self) {}
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A sequencer with its own reveal timer.
///
/// Dropping the typewriter cancels the timer.
#[derive(Debug)]
pub struct Typewriter {
    sequencer: Sequencer,
    period: Duration,
    timer: Option<RevealTimer>,
}

impl Typewriter {
    /// Start revealing `script` from line 0.
    pub fn start(script: Script, period: Duration) -> Self {
        let mut typewriter = Self {
            sequencer: Sequencer::new(script),
            period,
            timer: None,
        };
        typewriter.rearm();
        typewriter
    }

    /// Replace the script and restart from line 0.
    pub fn restart(&mut self, script: Script) {
        self.sequencer.start(script);
        self.rearm();
    }

    /// Apply every tick that is already due. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(timer) = self.timer.as_mut() {
            if !timer.try_tick() {
                break;
            }
            self.sequencer.tick();
            applied += 1;
            if self.sequencer.is_complete() {
                self.timer = None;
            }
        }
        applied
    }

    /// Wait for one tick and apply it. False if no reveal is running.
    pub async fn next_tick(&mut self) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.tick().await.is_none() {
            self.timer = None;
            return false;
        }
        self.sequencer.tick();
        if self.sequencer.is_complete() {
            self.timer = None;
        }
        true
    }

    /// Skip or advance, keeping the timer in step with the line.
    pub fn advance(&mut self) -> Advance {
        let outcome = self.sequencer.advance();
        match outcome {
            Advance::Completed => self.timer = None,
            Advance::NextLine(_) => self.rearm(),
        }
        outcome
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a reveal timer is currently live.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    fn rearm(&mut self) {
        // Drop the old timer before spawning so two never coexist.
        self.timer = None;
        if !self.sequencer.is_complete() {
            trace!(cursor = self.sequencer.cursor(), "arming reveal timer");
            self.timer = Some(RevealTimer::spawn(self.period));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::Line;

    fn script(texts: &[&str]) -> Script {
        Script::new(texts.iter().map(|t| Line::new("JOSAIAH", *t)).collect()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_reveal_then_timer_stops() {
        let mut tw = Typewriter::start(script(&["Hi", "Bye"]), DEFAULT_REVEAL_INTERVAL);
        assert!(tw.has_timer());

        assert!(tw.next_tick().await);
        assert_eq!(tw.sequencer().revealed_text(), "H");
        assert!(tw.next_tick().await);
        assert_eq!(tw.sequencer().revealed_text(), "Hi");

        assert!(!tw.has_timer());
        assert!(!tw.next_tick().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pump_applies_due_ticks() {
        let mut tw = Typewriter::start(script(&["Hello"]), DEFAULT_REVEAL_INTERVAL);
        tokio::time::sleep(Duration::from_millis(130)).await;
        assert_eq!(tw.pump(), 3);
        assert_eq!(tw.sequencer().revealed_text(), "Hel");
        assert_eq!(tw.pump(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_cancels_timer() {
        let mut tw = Typewriter::start(script(&["Hello", "World"]), DEFAULT_REVEAL_INTERVAL);
        assert_eq!(tw.advance(), Advance::Completed);
        assert!(!tw.has_timer());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(tw.pump(), 0);
        assert_eq!(tw.sequencer().revealed_text(), "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_line_rearms_from_zero() {
        let mut tw = Typewriter::start(script(&["Hi", "Bye"]), DEFAULT_REVEAL_INTERVAL);
        tw.advance();
        assert_eq!(tw.advance(), Advance::NextLine(1));
        assert!(tw.has_timer());
        assert_eq!(tw.sequencer().revealed_len(), 0);

        assert!(tw.next_tick().await);
        assert_eq!(tw.sequencer().revealed_text(), "B");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_script_and_timer() {
        let mut tw = Typewriter::start(script(&["Hello"]), DEFAULT_REVEAL_INTERVAL);
        tw.advance();
        assert!(!tw.has_timer());

        tw.restart(script(&["Ok", "Next"]));
        assert!(tw.has_timer());
        assert_eq!(tw.sequencer().cursor(), 0);
        assert!(tw.next_tick().await);
        assert_eq!(tw.sequencer().revealed_text(), "O");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_first_line_never_arms() {
        let tw = Typewriter::start(script(&["", "later"]), DEFAULT_REVEAL_INTERVAL);
        assert!(!tw.has_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_timer_aborts_task() {
        let timer = RevealTimer::spawn(DEFAULT_REVEAL_INTERVAL);
        assert!(timer.is_active());
        let handle_probe = timer.handle.abort_handle();
        timer.cancel();
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert!(handle_probe.is_finished());
    }
}
