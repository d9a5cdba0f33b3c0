//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.
//! The router is the thin adapter between a presentation layer and the game
//! engines; it holds no game logic of its own.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/countdown", get(countdown_status_handler))
        .route("/countdown/configure", post(countdown_configure_handler))
        .route("/countdown/start", post(countdown_start_handler))
        .route("/countdown/stop", post(countdown_stop_handler))
        .route("/countdown/reset", post(countdown_reset_handler))
        .route("/reflex", get(reflex_status_handler))
        .route("/reflex/arm", post(reflex_arm_handler))
        .route("/reflex/press", post(reflex_press_handler))
        .route("/reflex/reset", post(reflex_reset_handler))
        .route("/navigate/:destination", post(navigate_handler))
        .route("/about", get(about_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
