//! State management module
//!
//! This module contains the two game engines and the shared application
//! state that exposes them to the HTTP layer and the tick tasks.

pub mod app_state;
pub mod countdown;
pub mod reflex;

// Re-export main types
pub use app_state::AppState;
pub use countdown::{CountdownEngine, CountdownSnapshot, Phase};
pub use reflex::{ReflexEngine, ReflexPhase, ReflexSnapshot};
