//! Pure display formatting and scoring for the countdown game
//!
//! Everything here is a function of a signed millisecond value; no engine
//! state is consulted, so the UI layer can render any snapshot it holds.

use serde::{Deserialize, Serialize};

/// Format signed milliseconds as a `SS:CC` readout (seconds and
/// centiseconds, both zero-padded to two digits).
///
/// Negative values round the seconds field toward zero, and values in the
/// open interval (-1000, 0) render the seconds field as the literal `-0`
/// to signal "just crossed zero going negative".
pub fn format_countdown(ms: i64) -> String {
    // Integer division truncates toward zero, which is floor for positive
    // values and ceil for negative ones - exactly the display rule.
    let seconds = ms / 1000;
    let centi = (ms % 1000).abs() / 10;

    if ms < 0 && ms > -1000 {
        format!("-0:{:02}", centi)
    } else {
        format!("{:02}:{:02}", seconds, centi)
    }
}

/// Precision tier for a completed run.
///
/// Tiers are evaluated on the raw signed final value in ascending order,
/// matching the shipped game: a run stopped early (negative final value)
/// lands in the same low buckets as a run stopped barely late. Kept as
/// observed rather than switching to absolute distance; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Perfect,
    Amazing,
    Great,
    Good,
    TimedOut,
    KeepTrying,
}

impl ScoreTier {
    /// Classify a frozen final value.
    pub fn for_final_ms(final_ms: i64) -> Self {
        if final_ms == 0 {
            Self::Perfect
        } else if final_ms <= 100 {
            Self::Amazing
        } else if final_ms <= 500 {
            Self::Great
        } else if final_ms <= 1000 {
            Self::Good
        } else if final_ms <= 5000 {
            Self::TimedOut
        } else {
            Self::KeepTrying
        }
    }

    /// Player-facing message for this tier.
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "PERFECT! You hit 00:00!",
            Self::Amazing => "Amazing, so close!",
            Self::Great => "Great job!",
            Self::Good => "Good attempt!",
            Self::TimedOut => "Timed Out. Better luck next time!",
            Self::KeepTrying => "Keep trying!",
        }
    }
}
