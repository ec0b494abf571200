//! Character-by-character reveal of a fixed dialogue script.
//!
//! A [`Sequencer`] walks a [`Script`] one line at a time. Each line is
//! revealed one character per [`Sequencer::tick`]; [`Sequencer::advance`]
//! first skips to the full text of a line that is still revealing, and
//! only on a second call moves to the next line (wrapping after the last).
//!
//! The sequencer is pure state. Timing lives in [`crate::timer`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from building a script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequencerError {
    #[error("a dialogue script needs at least one line")]
    EmptyScript,
}

/// A single line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Name shown on the nametag.
    pub speaker: String,
    /// Text revealed one character at a time.
    pub text: String,
    /// Portrait shown next to the text box.
    #[serde(default)]
    pub image_ref: String,
}

impl Line {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            image_ref: String::new(),
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Length in characters, the unit the reveal counts in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered, non-empty, immutable list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<Line>,
}

impl Script {
    pub fn new(lines: Vec<Line>) -> Result<Self, SequencerError> {
        if lines.is_empty() {
            return Err(SequencerError::EmptyScript);
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl TryFrom<Vec<Line>> for Script {
    type Error = SequencerError;

    fn try_from(lines: Vec<Line>) -> Result<Self, Self::Error> {
        Self::new(lines)
    }
}

/// Reveal state of the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Characters are still being revealed by ticks.
    Revealing,
    /// The full text is shown; waiting for the user to advance.
    Complete,
}

/// What an `advance()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current line was still revealing and now shows its full text.
    Completed,
    /// Moved to the line at this index; its reveal starts from zero.
    NextLine(usize),
}

/// Drives the reveal of a [`Script`].
#[derive(Debug, Clone)]
pub struct Sequencer {
    script: Script,
    cursor: usize,
    revealed: usize,
}

impl Sequencer {
    /// Create a sequencer already started on the first line.
    pub fn new(script: Script) -> Self {
        Self {
            script,
            cursor: 0,
            revealed: 0,
        }
    }

    /// Restart on a (possibly different) script from line 0.
    pub fn start(&mut self, script: Script) {
        debug!(lines = script.len(), "starting dialogue script");
        self.script = script;
        self.cursor = 0;
        self.revealed = 0;
    }

    /// Reveal one more character. Returns false once the line is complete.
    pub fn tick(&mut self) -> bool {
        if self.revealed < self.current_line().char_len() {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    /// Skip to the full line, or move to the next line if already complete.
    pub fn advance(&mut self) -> Advance {
        let len = self.current_line().char_len();
        if self.revealed < len {
            self.revealed = len;
            debug!(cursor = self.cursor, "dialogue line skipped to end");
            Advance::Completed
        } else {
            self.cursor = (self.cursor + 1) % self.script.len();
            self.revealed = 0;
            debug!(cursor = self.cursor, "dialogue advanced");
            Advance::NextLine(self.cursor)
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_line(&self) -> &Line {
        &self.script.lines[self.cursor]
    }

    /// Number of characters of the current line shown so far.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// The revealed prefix of the current line.
    pub fn revealed_text(&self) -> &str {
        let text = &self.current_line().text;
        match text.char_indices().nth(self.revealed) {
            Some((byte_pos, _)) => &text[..byte_pos],
            None => text,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.current_line().char_len()
    }

    pub fn state(&self) -> RevealState {
        if self.is_complete() {
            RevealState::Complete
        } else {
            RevealState::Revealing
        }
    }
}
