//! Countdown Challenge - a state-managed HTTP server hosting two
//! reaction/timing mini-games
//!
//! This is the main entry point for the countdown-challenge application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_challenge::{
    api::create_router,
    config::Config,
    state::{countdown::is_valid_duration, AppState},
    tasks::{countdown_tick_task, reflex_tick_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "countdown_challenge={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting countdown-challenge server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, duration={}s",
        config.host, config.port, config.duration
    );

    if !is_valid_duration(config.duration) {
        tracing::error!(
            "Invalid duration {}: must be 5-60 seconds in steps of 5",
            config.duration
        );
        std::process::exit(1);
    }

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.duration));

    // Start the game tick background tasks
    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_tick_task(countdown_state).await;
    });
    let reflex_state = Arc::clone(&state);
    tokio::spawn(async move {
        reflex_tick_task(reflex_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /countdown/configure - Set duration (idle only)");
    info!("  POST /countdown/start     - Begin a countdown run");
    info!("  POST /countdown/stop      - Stop and score the run");
    info!("  POST /countdown/reset     - Back to idle");
    info!("  GET  /countdown           - Countdown snapshot");
    info!("  POST /reflex/arm          - Arm a reflex round");
    info!("  POST /reflex/press        - Press the button");
    info!("  POST /reflex/reset        - Reset the reflex game");
    info!("  GET  /reflex              - Reflex snapshot");
    info!("  POST /navigate/:dest      - Forward a navigation destination");
    info!("  GET  /about               - Informational page");
    info!("  GET  /status              - Full status");
    info!("  GET  /health              - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
