//! Verdict Types for Threshold Evaluation
//!
//! ## Overview
//!
//! A [`Verdict`] is the outcome of checking one candidate value against a
//! declared limit pair. It is a transient value object: created fresh per
//! evaluation, handed to a style applicator, and discarded. Nothing here is
//! persisted and nothing carries identity.
//!
//! ## Design Philosophy
//!
//! 1. **Three-way outcome**: Valid and Warning are the two opinions the
//!    engine can hold; Neutral means "no opinion" - missing value, missing
//!    limits, or text with no numeric prefix. Neutral is not a failure.
//!
//! 2. **No Heap Allocation**: The human-readable message lives in a bounded
//!    `heapless` string. Messages longer than [`MESSAGE_CAP`] are truncated
//!    rather than allocated.
//!
//! 3. **Raw Echoes**: The verdict carries the inputs exactly as received
//!    (pre-parse) so downstream consumers can log or display what the
//!    operator actually typed.
//!
//! ## Memory Layout
//!
//! The message buffer dominates the struct:
//! ```text
//! Verdict size ≈ 184 bytes
//! ├── message: MESSAGE_CAP + length bookkeeping
//! ├── echoes: 3 × Option<&str> (16 bytes each)
//! └── status + flags: 4 bytes + padding
//! ```

use core::fmt::{self, Write};

/// Maximum length of a verdict message in bytes.
///
/// Long enough for both interpolated bounds; formatting past this cap
/// truncates the message.
pub const MESSAGE_CAP: usize = 128;

/// Bounded message buffer carried by a verdict.
pub type Message = heapless::String<MESSAGE_CAP>;

/// Three-way outcome of a threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Status {
    /// Every declared bound is satisfied.
    Valid = 0,
    /// Exactly one side of the limit pair is violated.
    Warning = 1,
    /// No numeric opinion: value or limits missing or non-numeric.
    Neutral = 2,
}

impl Status {
    /// Wire name used by host frameworks and styling layers.
    pub const fn name(&self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Warning => "warning",
            Status::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of evaluating one value against a limit pair.
///
/// Borrows the raw inputs it echoes; the verdict is consumed immediately
/// after evaluation, so the borrow never constrains callers in practice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict<'a> {
    /// Three-way outcome.
    pub status: Status,
    /// False only when a declared bound is violated. Neutral verdicts stay
    /// `true` - "no opinion" is not a failure.
    pub is_valid: bool,
    /// Value fell below the declared minimum.
    pub below_min: bool,
    /// Value exceeded the declared maximum.
    pub above_max: bool,
    /// Human-readable explanation, suitable as a tooltip.
    pub message: Message,
    /// Candidate value exactly as received, pre-parse.
    pub value: Option<&'a str>,
    /// Declared minimum exactly as received, pre-parse.
    pub min_value: Option<&'a str>,
    /// Declared maximum exactly as received, pre-parse.
    pub max_value: Option<&'a str>,
}

impl<'a> Verdict<'a> {
    /// Start from the "no opinion" state; evaluation upgrades from here.
    pub fn neutral(
        value: Option<&'a str>,
        min_value: Option<&'a str>,
        max_value: Option<&'a str>,
    ) -> Self {
        Self {
            status: Status::Neutral,
            is_valid: true,
            below_min: false,
            above_max: false,
            message: Message::new(),
            value,
            min_value,
            max_value,
        }
    }

    /// Replace the message with a fixed explanation.
    pub(crate) fn set_message(&mut self, text: &str) {
        self.message.clear();
        // Truncation on overflow is acceptable for a tooltip
        let _ = self.message.push_str(text);
    }

    /// Replace the message with formatted content.
    pub(crate) fn set_message_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.message.clear();
        let _ = self.message.write_fmt(args);
    }
}
