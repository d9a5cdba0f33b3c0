//! Reflex game tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{AppState, ReflexPhase};

/// Period of the armed-round polling tick.
pub const ARM_POLL_PERIOD: Duration = Duration::from_millis(10);

/// Background task that flips an armed reflex round from red to green.
///
/// Waits on the reflex snapshot channel for a round to be armed, then polls
/// until the scheduled instant passes and the engine flips to `Go` (or the
/// player presses early / resets, leaving `Armed` some other way).
pub async fn reflex_tick_task(state: Arc<AppState>) {
    info!("Starting reflex tick task");

    let mut snapshot_rx = state.subscribe_reflex();

    loop {
        if snapshot_rx.borrow_and_update().phase != ReflexPhase::Armed {
            if snapshot_rx.changed().await.is_err() {
                error!("Reflex snapshot channel closed, stopping tick task");
                return;
            }
            continue;
        }

        debug!("Reflex round armed, polling for the green flip");

        let mut ticker = interval(ARM_POLL_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            match state.tick_reflex() {
                Ok(ReflexPhase::Armed) => {}
                Ok(phase) => {
                    debug!("Reflex round left Armed ({:?})", phase);
                    break;
                }
                Err(e) => {
                    error!("Reflex tick failed: {}", e);
                    break;
                }
            }
        }
    }
}
