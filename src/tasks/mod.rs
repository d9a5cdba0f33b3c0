//! Background tasks module
//!
//! This module contains the periodic tick tasks that run alongside the
//! HTTP server and drive the game engines' autonomous transitions.

pub mod countdown_tick;
pub mod reflex_tick;

// Re-export main functions
pub use countdown_tick::countdown_tick_task;
pub use reflex_tick::reflex_tick_task;
