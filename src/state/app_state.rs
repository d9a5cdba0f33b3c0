//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{
    CountdownEngine, CountdownSnapshot, Phase, ReflexEngine, ReflexPhase, ReflexSnapshot,
};

/// Main application state holding both game engines and their observers.
///
/// Each engine lives behind its own mutex; every command runs to completion
/// under the lock, and each mutation publishes a fresh snapshot on a watch
/// channel so the tick tasks and status readers see state changes without
/// reaching into the engines.
#[derive(Debug)]
pub struct AppState {
    /// Countdown game engine
    pub countdown: Arc<Mutex<CountdownEngine>>,
    /// Reflex game engine
    pub reflex: Arc<Mutex<ReflexEngine>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Snapshot channels for the tick tasks and status readers
    pub countdown_tx: watch::Sender<CountdownSnapshot>,
    pub reflex_tx: watch::Sender<ReflexSnapshot>,
    /// Navigation destinations forwarded, uninterpreted, to the hosting shell
    pub navigation_tx: broadcast::Sender<String>,
    /// Keep the receivers alive to prevent channel closure
    _countdown_rx: watch::Receiver<CountdownSnapshot>,
    _reflex_rx: watch::Receiver<ReflexSnapshot>,
}

impl AppState {
    /// Create a new AppState with an idle countdown of `duration_secs`.
    pub fn new(port: u16, host: String, duration_secs: u32) -> Self {
        let countdown = CountdownEngine::new(duration_secs);
        let reflex = ReflexEngine::new();
        let (countdown_tx, countdown_rx) = watch::channel(countdown.snapshot());
        let (reflex_tx, reflex_rx) = watch::channel(reflex.snapshot());
        let (navigation_tx, _) = broadcast::channel(100);

        Self {
            countdown: Arc::new(Mutex::new(countdown)),
            reflex: Arc::new(Mutex::new(reflex)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            countdown_tx,
            reflex_tx,
            navigation_tx,
            _countdown_rx: countdown_rx,
            _reflex_rx: reflex_rx,
        }
    }

    /// Apply a countdown command and publish the resulting snapshot.
    ///
    /// Returns whether the engine accepted the command (a call in the wrong
    /// phase is absorbed as a no-op) along with the post-command snapshot.
    pub fn update_countdown<F>(
        &self,
        action: &str,
        op: F,
    ) -> Result<(bool, CountdownSnapshot), String>
    where
        F: FnOnce(&mut CountdownEngine) -> bool,
    {
        let mut engine = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown engine: {}", e))?;

        let applied = op(&mut engine);
        let snapshot = engine.snapshot();
        drop(engine); // Release the lock early

        if applied {
            self.record_action(action);
        } else {
            debug!("Countdown command '{}' ignored in phase {:?}", action, snapshot.phase);
        }

        if let Err(e) = self.countdown_tx.send(snapshot.clone()) {
            warn!("Failed to publish countdown snapshot: {}", e);
        }

        Ok((applied, snapshot))
    }

    /// Change the configured countdown duration (idle only).
    pub fn configure_countdown(&self, seconds: u32) -> Result<(bool, CountdownSnapshot), String> {
        info!("Configuring countdown duration to {} seconds", seconds);
        self.update_countdown("configure", |engine| engine.configure(seconds))
    }

    /// Start a countdown run.
    pub fn start_countdown(&self) -> Result<(bool, CountdownSnapshot), String> {
        self.update_countdown("start", |engine| engine.start())
    }

    /// Stop the running countdown, freezing the final value.
    pub fn stop_countdown(&self) -> Result<(bool, CountdownSnapshot), String> {
        self.update_countdown("stop", |engine| engine.stop())
    }

    /// Reset the countdown to idle.
    pub fn reset_countdown(&self) -> Result<(bool, CountdownSnapshot), String> {
        self.update_countdown("reset", |engine| engine.reset())
    }

    /// One autonomous tick, called only by the countdown tick task.
    /// Phase-gated inside the engine, so a tick that fires after a stop or
    /// reset has committed cannot overwrite the frozen final value.
    pub fn tick_countdown(&self) -> Result<Phase, String> {
        let mut engine = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown engine: {}", e))?;

        let phase = engine.tick();
        let snapshot = engine.snapshot();
        drop(engine);

        if let Err(e) = self.countdown_tx.send(snapshot) {
            warn!("Failed to publish countdown snapshot: {}", e);
        }

        Ok(phase)
    }

    /// Current countdown snapshot.
    pub fn countdown_snapshot(&self) -> Result<CountdownSnapshot, String> {
        self.countdown.lock()
            .map(|engine| engine.snapshot())
            .map_err(|e| format!("Failed to lock countdown engine: {}", e))
    }

    /// Subscribe to countdown snapshot updates.
    pub fn subscribe_countdown(&self) -> watch::Receiver<CountdownSnapshot> {
        self.countdown_tx.subscribe()
    }

    /// Apply a reflex command and publish the resulting snapshot.
    pub fn update_reflex<F>(&self, action: &str, op: F) -> Result<(bool, ReflexSnapshot), String>
    where
        F: FnOnce(&mut ReflexEngine) -> bool,
    {
        let mut engine = self.reflex.lock()
            .map_err(|e| format!("Failed to lock reflex engine: {}", e))?;

        let applied = op(&mut engine);
        let snapshot = engine.snapshot();
        drop(engine);

        if applied {
            self.record_action(action);
        } else {
            debug!("Reflex command '{}' ignored in phase {:?}", action, snapshot.phase);
        }

        if let Err(e) = self.reflex_tx.send(snapshot.clone()) {
            warn!("Failed to publish reflex snapshot: {}", e);
        }

        Ok((applied, snapshot))
    }

    /// Arm a reflex round with the green flip `delay` from now.
    pub fn arm_reflex(&self, delay: Duration) -> Result<(bool, ReflexSnapshot), String> {
        info!("Arming reflex round, green in {:?}", delay);
        self.update_reflex("reflex-arm", |engine| engine.arm_at(Instant::now(), delay))
    }

    /// The player pressed the reflex button.
    pub fn press_reflex(&self) -> Result<(bool, ReflexSnapshot), String> {
        self.update_reflex("reflex-press", |engine| engine.press())
    }

    /// Reset the reflex game.
    pub fn reset_reflex(&self) -> Result<(bool, ReflexSnapshot), String> {
        self.update_reflex("reflex-reset", |engine| engine.reset())
    }

    /// One autonomous reflex tick, called only by the reflex tick task.
    pub fn tick_reflex(&self) -> Result<ReflexPhase, String> {
        let mut engine = self.reflex.lock()
            .map_err(|e| format!("Failed to lock reflex engine: {}", e))?;

        let phase = engine.tick();
        let snapshot = engine.snapshot();
        drop(engine);

        if let Err(e) = self.reflex_tx.send(snapshot) {
            warn!("Failed to publish reflex snapshot: {}", e);
        }

        Ok(phase)
    }

    /// Current reflex snapshot.
    pub fn reflex_snapshot(&self) -> Result<ReflexSnapshot, String> {
        self.reflex.lock()
            .map(|engine| engine.snapshot())
            .map_err(|e| format!("Failed to lock reflex engine: {}", e))
    }

    /// Subscribe to reflex snapshot updates.
    pub fn subscribe_reflex(&self) -> watch::Receiver<ReflexSnapshot> {
        self.reflex_tx.subscribe()
    }

    /// Forward an opaque navigation destination to the hosting shell.
    /// The destination is never interpreted here, only recorded and relayed.
    pub fn navigate(&self, destination: &str) -> Result<(), String> {
        info!("Navigation requested: {}", destination);
        self.record_action(&format!("navigate:{}", destination));

        if self.navigation_tx.send(destination.to_string()).is_err() {
            debug!("No navigation listeners attached, destination dropped");
        }

        Ok(())
    }

    /// Subscribe to forwarded navigation destinations.
    pub fn subscribe_navigation(&self) -> broadcast::Receiver<String> {
        self.navigation_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string.
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information.
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
