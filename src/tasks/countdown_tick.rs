//! Countdown tick background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{AppState, Phase};

/// Period of the countdown re-evaluation tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Background task that owns the countdown's only tick source.
///
/// The task idles on the snapshot watch channel until the countdown enters
/// `Running`, then drives a short interval that re-derives the remaining
/// time on every firing. It releases the interval as soon as the phase
/// leaves `Running` - player stop, reset, or the auto-stop boundary - so at
/// most one tick source ever mutates the engine. A tick that fires after a
/// transition has committed is absorbed by the engine's phase gate.
pub async fn countdown_tick_task(state: Arc<AppState>) {
    info!("Starting countdown tick task");

    let mut snapshot_rx = state.subscribe_countdown();

    loop {
        // Engage immediately if the countdown is already Running,
        // otherwise wait for the next snapshot change.
        if snapshot_rx.borrow_and_update().phase != Phase::Running {
            if snapshot_rx.changed().await.is_err() {
                error!("Countdown snapshot channel closed, stopping tick task");
                return;
            }
            continue;
        }

        debug!("Countdown entered Running, tick source engaged");

        // The remaining time is derived from the target instant, so a
        // missed firing loses nothing; skip instead of bursting.
        let mut ticker = interval(TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            match state.tick_countdown() {
                Ok(Phase::Running) => {}
                Ok(phase) => {
                    debug!("Countdown left Running ({:?}), tick source released", phase);
                    break;
                }
                Err(e) => {
                    error!("Countdown tick failed: {}", e);
                    break;
                }
            }
        }
    }
}
