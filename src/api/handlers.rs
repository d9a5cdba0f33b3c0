//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use rand::Rng;
use tracing::{error, info};

use crate::state::reflex::{MAX_ARM_DELAY, MIN_ARM_DELAY};
use crate::state::AppState;
use super::responses::{
    AboutResponse, ConfigureRequest, CountdownResponse, HealthResponse, NavigateResponse,
    ReflexResponse, StatusResponse,
};

/// Handle POST /countdown/configure - Change the countdown duration
pub async fn countdown_configure_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfigureRequest>,
) -> Result<Json<CountdownResponse>, StatusCode> {
    match state.configure_countdown(request.seconds) {
        Ok((true, snapshot)) => {
            info!("Countdown duration configured to {} seconds", request.seconds);
            Ok(Json(CountdownResponse::applied(
                format!("Duration set to {} seconds", request.seconds),
                snapshot,
            )))
        }
        Ok((false, snapshot)) => Ok(Json(CountdownResponse::ignored(
            "Duration unchanged: countdown not idle or value out of range".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to configure countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /countdown/start - Begin a countdown run
pub async fn countdown_start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CountdownResponse>, StatusCode> {
    match state.start_countdown() {
        Ok((true, snapshot)) => {
            info!("Countdown started");
            Ok(Json(CountdownResponse::applied(
                "Countdown started".to_string(),
                snapshot,
            )))
        }
        Ok((false, snapshot)) => Ok(Json(CountdownResponse::ignored(
            "Countdown already running".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /countdown/stop - Stop the running countdown
pub async fn countdown_stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CountdownResponse>, StatusCode> {
    match state.stop_countdown() {
        Ok((true, snapshot)) => {
            info!("Countdown stopped at {:?} ms", snapshot.final_ms);
            Ok(Json(CountdownResponse::applied(
                snapshot.score.clone().unwrap_or_else(|| "Stopped".to_string()),
                snapshot,
            )))
        }
        Ok((false, snapshot)) => Ok(Json(CountdownResponse::ignored(
            "Countdown is not running".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to stop countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /countdown/reset - Return the countdown to idle
pub async fn countdown_reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CountdownResponse>, StatusCode> {
    match state.reset_countdown() {
        Ok((_, snapshot)) => {
            info!("Countdown reset");
            Ok(Json(CountdownResponse::applied(
                "Countdown reset".to_string(),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to reset countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /countdown - Current countdown snapshot
pub async fn countdown_status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<crate::state::CountdownSnapshot>, StatusCode> {
    match state.countdown_snapshot() {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            error!("Failed to read countdown snapshot: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reflex/arm - Arm a reflex round with a randomized delay
pub async fn reflex_arm_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReflexResponse>, StatusCode> {
    let delay = rand::thread_rng().gen_range(MIN_ARM_DELAY..=MAX_ARM_DELAY);

    match state.arm_reflex(delay) {
        Ok((true, snapshot)) => {
            info!("Reflex round armed");
            Ok(Json(ReflexResponse::applied(
                "Round armed, wait for green".to_string(),
                snapshot,
            )))
        }
        Ok((false, snapshot)) => Ok(Json(ReflexResponse::ignored(
            "A round is already in flight".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to arm reflex round: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reflex/press - The player pressed the button
pub async fn reflex_press_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReflexResponse>, StatusCode> {
    match state.press_reflex() {
        Ok((true, snapshot)) => {
            let message = match snapshot.reaction_ms {
                Some(ms) => format!("Reaction time: {} ms", ms),
                None => "Too soon! That was a false start".to_string(),
            };
            info!("Reflex press: {}", message);
            Ok(Json(ReflexResponse::applied(message, snapshot)))
        }
        Ok((false, snapshot)) => Ok(Json(ReflexResponse::ignored(
            "No round in flight".to_string(),
            snapshot,
        ))),
        Err(e) => {
            error!("Failed to apply reflex press: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reflex/reset - Reset the reflex game
pub async fn reflex_reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReflexResponse>, StatusCode> {
    match state.reset_reflex() {
        Ok((_, snapshot)) => {
            info!("Reflex game reset");
            Ok(Json(ReflexResponse::applied(
                "Reflex game reset".to_string(),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to reset reflex game: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /reflex - Current reflex snapshot
pub async fn reflex_status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<crate::state::ReflexSnapshot>, StatusCode> {
    match state.reflex_snapshot() {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            error!("Failed to read reflex snapshot: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /navigate/:destination - Forward an opaque destination to
/// the hosting shell
pub async fn navigate_handler(
    State(state): State<Arc<AppState>>,
    Path(destination): Path<String>,
) -> Result<Json<NavigateResponse>, StatusCode> {
    match state.navigate(&destination) {
        Ok(()) => Ok(Json(NavigateResponse::forwarded(destination))),
        Err(e) => {
            error!("Failed to forward navigation: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /about - Informational page content
pub async fn about_handler() -> Json<AboutResponse> {
    Json(AboutResponse::page())
}

/// Handle GET /status - Return current status of both games
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let countdown = match state.countdown_snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get countdown snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let reflex = match state.reflex_snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get reflex snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        countdown,
        reflex,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
