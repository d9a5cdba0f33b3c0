//! Reflex game engine
//!
//! Press the button as fast as you can once the light turns from red to
//! green. Arming schedules the green light at a randomized instant; pressing
//! before it is a false start, pressing after it records the reaction time.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Shortest randomized delay before the light turns green.
pub const MIN_ARM_DELAY: Duration = Duration::from_millis(1_500);
/// Longest randomized delay before the light turns green.
pub const MAX_ARM_DELAY: Duration = Duration::from_millis(4_000);

/// Phase of the reflex state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflexPhase {
    /// Not armed; waiting for the player to start a round.
    Waiting,
    /// Red light showing; the green flip is scheduled.
    Armed,
    /// Green light showing; the clock is running.
    Go,
    /// Pressed while still red.
    FalseStart,
    /// Pressed after green; a reaction time is recorded.
    Done,
}

/// The reflex game state machine.
#[derive(Debug, Clone)]
pub struct ReflexEngine {
    phase: ReflexPhase,
    go_at: Option<Instant>,
    went_green: Option<Instant>,
    reaction_ms: Option<i64>,
}

impl ReflexEngine {
    pub fn new() -> Self {
        Self {
            phase: ReflexPhase::Waiting,
            go_at: None,
            went_green: None,
            reaction_ms: None,
        }
    }

    /// Arm a round: red light on, green scheduled `delay` from `now`.
    /// Allowed from any phase except `Armed` and `Go` (a round in flight
    /// must finish or be reset first).
    pub fn arm_at(&mut self, now: Instant, delay: Duration) -> bool {
        if matches!(self.phase, ReflexPhase::Armed | ReflexPhase::Go) {
            return false;
        }
        self.go_at = Some(now + delay);
        self.went_green = None;
        self.reaction_ms = None;
        self.phase = ReflexPhase::Armed;
        true
    }

    /// Periodic re-evaluation: flips `Armed` to `Go` once the scheduled
    /// instant passes. The reaction clock is anchored to the scheduled
    /// instant itself, so tick granularity never inflates the measurement.
    pub fn tick_at(&mut self, now: Instant) -> ReflexPhase {
        if let (ReflexPhase::Armed, Some(go_at)) = (self.phase, self.go_at) {
            if now >= go_at {
                self.went_green = Some(go_at);
                self.phase = ReflexPhase::Go;
            }
        }
        self.phase
    }

    /// The player pressed the button.
    pub fn press_at(&mut self, now: Instant) -> bool {
        match self.phase {
            ReflexPhase::Armed => {
                self.go_at = None;
                self.phase = ReflexPhase::FalseStart;
                true
            }
            ReflexPhase::Go => {
                let since = match self.went_green {
                    Some(t) => t,
                    None => return false,
                };
                self.reaction_ms =
                    Some(now.saturating_duration_since(since).as_millis() as i64);
                self.phase = ReflexPhase::Done;
                true
            }
            _ => false,
        }
    }

    /// Back to `Waiting`, discarding any scheduled flip or recorded result.
    pub fn reset(&mut self) -> bool {
        self.go_at = None;
        self.went_green = None;
        self.reaction_ms = None;
        self.phase = ReflexPhase::Waiting;
        true
    }

    /// Wall-clock [`Self::tick_at`].
    pub fn tick(&mut self) -> ReflexPhase {
        self.tick_at(Instant::now())
    }

    /// Wall-clock [`Self::press_at`].
    pub fn press(&mut self) -> bool {
        self.press_at(Instant::now())
    }

    pub fn phase(&self) -> ReflexPhase {
        self.phase
    }

    pub fn reaction_ms(&self) -> Option<i64> {
        self.reaction_ms
    }

    /// Cloneable view of the current state for observers.
    pub fn snapshot(&self) -> ReflexSnapshot {
        ReflexSnapshot {
            phase: self.phase,
            reaction_ms: self.reaction_ms,
        }
    }
}

impl Default for ReflexEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the reflex game published to observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflexSnapshot {
    pub phase: ReflexPhase,
    pub reaction_ms: Option<i64>,
}
