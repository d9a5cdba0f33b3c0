//! Countdown Challenge - a state-managed HTTP server hosting two
//! reaction/timing mini-games
//!
//! The core is the countdown game engine: an explicit Idle/Running/Stopped
//! state machine that derives remaining time from a target instant under a
//! periodic tick and scores the player's precision. A reflex (red-to-green)
//! game and an informational page ride alongside; the HTTP layer is a thin
//! command surface over the engines.

pub mod config;
pub mod display;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
