//! Countdown game engine
//!
//! An explicit Idle/Running/Stopped state machine that derives the remaining
//! time from a fixed target instant instead of accumulating tick deltas, so
//! the readout stays accurate no matter how unevenly the tick fires. The
//! engine is framework-free: every time-sensitive operation takes the
//! deciding `Instant` as a parameter, with wall-clock wrappers on top.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::display::{format_countdown, ScoreTier};

/// Auto-stop boundary: once the countdown overshoots zero by this much,
/// the run ends regardless of player input.
pub const OVERSHOOT_LIMIT_MS: i64 = -5_000;

/// Smallest configurable duration in seconds.
pub const MIN_DURATION_SECS: u32 = 5;
/// Largest configurable duration in seconds.
pub const MAX_DURATION_SECS: u32 = 60;
/// Configurable durations step by this many seconds.
pub const DURATION_STEP_SECS: u32 = 5;

/// Check a duration against the allowed range {5, 10, ..., 60}.
pub fn is_valid_duration(seconds: u32) -> bool {
    (MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&seconds)
        && seconds % DURATION_STEP_SECS == 0
}

/// Phase of the countdown state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

/// The countdown game state machine.
///
/// Mutated only through the phase-gated operations below; a call in the
/// wrong phase is absorbed as a no-op and reported through the `bool`
/// return value.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    phase: Phase,
    duration_ms: i64,
    remaining_ms: i64,
    target: Option<Instant>,
    final_ms: Option<i64>,
    tick_mutations: u64,
}

impl CountdownEngine {
    /// Create a new engine in `Idle` with the given duration.
    ///
    /// The duration must already satisfy [`is_valid_duration`]; the
    /// configuration layer validates before construction.
    pub fn new(duration_secs: u32) -> Self {
        let duration_ms = i64::from(duration_secs) * 1000;
        Self {
            phase: Phase::Idle,
            duration_ms,
            remaining_ms: duration_ms,
            target: None,
            final_ms: None,
            tick_mutations: 0,
        }
    }

    /// Change the configured duration. Only allowed in `Idle`; also resets
    /// the remaining time and clears any previous result.
    pub fn configure(&mut self, seconds: u32) -> bool {
        if self.phase != Phase::Idle || !is_valid_duration(seconds) {
            return false;
        }
        self.duration_ms = i64::from(seconds) * 1000;
        self.remaining_ms = self.duration_ms;
        self.final_ms = None;
        true
    }

    /// Begin a run from `Idle` or `Stopped`.
    ///
    /// A remaining time of exactly zero is reseeded to the full duration.
    /// Restarting from an overshoot keeps the negative remaining time, so
    /// the target lies in the past and the next tick ends the run.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        if self.remaining_ms == 0 {
            self.remaining_ms = self.duration_ms;
        }
        self.target = Some(offset_by_ms(now, self.remaining_ms));
        self.final_ms = None;
        self.phase = Phase::Running;
        true
    }

    /// Stop a running countdown, freezing the remaining time as the final
    /// result. The remaining time is recomputed from the same `now` that
    /// decided the transition, never taken from a stale tick.
    pub fn stop_at(&mut self, now: Instant) -> bool {
        let target = match (self.phase, self.target) {
            (Phase::Running, Some(t)) => t,
            _ => return false,
        };
        self.remaining_ms = millis_until(target, now);
        self.final_ms = Some(self.remaining_ms);
        self.target = None;
        self.phase = Phase::Stopped;
        true
    }

    /// Return to `Idle` with a full duration and no result. Allowed in any
    /// phase and idempotent.
    pub fn reset(&mut self) -> bool {
        self.remaining_ms = self.duration_ms;
        self.target = None;
        self.final_ms = None;
        self.phase = Phase::Idle;
        true
    }

    /// Periodic re-evaluation, driven by the tick task.
    ///
    /// Effective only while `Running`: re-derives the remaining time from
    /// the target, and ends the run once the overshoot boundary is crossed.
    /// The final value is the overshoot as observed by this tick, not
    /// clamped to the boundary; the tick period bounds the imprecision.
    pub fn tick_at(&mut self, now: Instant) -> Phase {
        let target = match (self.phase, self.target) {
            (Phase::Running, Some(t)) => t,
            _ => return self.phase,
        };
        self.remaining_ms = millis_until(target, now);
        self.tick_mutations += 1;
        if self.remaining_ms <= OVERSHOOT_LIMIT_MS {
            self.final_ms = Some(self.remaining_ms);
            self.target = None;
            self.phase = Phase::Stopped;
        }
        self.phase
    }

    /// Wall-clock [`Self::start_at`].
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Wall-clock [`Self::stop_at`].
    pub fn stop(&mut self) -> bool {
        self.stop_at(Instant::now())
    }

    /// Wall-clock [`Self::tick_at`].
    pub fn tick(&mut self) -> Phase {
        self.tick_at(Instant::now())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn duration_secs(&self) -> u32 {
        (self.duration_ms / 1000) as u32
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn final_ms(&self) -> Option<i64> {
        self.final_ms
    }

    /// Number of autonomous tick mutations so far. Lets tests prove that
    /// exactly one tick source mutates the engine and that mutation stops
    /// once a run ends.
    pub fn tick_mutations(&self) -> u64 {
        self.tick_mutations
    }

    /// Cloneable view of the current state for observers.
    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot {
            phase: self.phase,
            duration_seconds: self.duration_secs(),
            remaining_ms: self.remaining_ms,
            display: format_countdown(self.remaining_ms),
            final_ms: self.final_ms,
            score: self
                .final_ms
                .map(|ms| ScoreTier::for_final_ms(ms).message().to_string()),
        }
    }
}

/// Snapshot of the countdown published to observers over the watch channel
/// and serialized on the status endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub phase: Phase,
    pub duration_seconds: u32,
    pub remaining_ms: i64,
    pub display: String,
    pub final_ms: Option<i64>,
    pub score: Option<String>,
}

/// Signed milliseconds from `now` until `target`; negative once `now` has
/// passed the target.
fn millis_until(target: Instant, now: Instant) -> i64 {
    match target.checked_duration_since(now) {
        Some(ahead) => ahead.as_millis() as i64,
        None => -(now.saturating_duration_since(target).as_millis() as i64),
    }
}

/// `now` shifted by a signed millisecond offset.
fn offset_by_ms(now: Instant, ms: i64) -> Instant {
    if ms >= 0 {
        now + Duration::from_millis(ms as u64)
    } else {
        now.checked_sub(Duration::from_millis(ms.unsigned_abs()))
            .unwrap_or(now)
    }
}
