//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{CountdownSnapshot, ReflexSnapshot};

/// Response for countdown command endpoints.
///
/// `status` is "applied" when the engine accepted the command and "ignored"
/// when the command arrived in the wrong phase; either way the current
/// snapshot is attached so the caller can resynchronize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub countdown: CountdownSnapshot,
}

impl CountdownResponse {
    pub fn new(status: String, message: String, countdown: CountdownSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            countdown,
        }
    }

    /// Create an applied response
    pub fn applied(message: String, countdown: CountdownSnapshot) -> Self {
        Self::new("applied".to_string(), message, countdown)
    }

    /// Create an ignored response
    pub fn ignored(message: String, countdown: CountdownSnapshot) -> Self {
        Self::new("ignored".to_string(), message, countdown)
    }
}

/// Response for reflex command endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflexResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub reflex: ReflexSnapshot,
}

impl ReflexResponse {
    pub fn new(status: String, message: String, reflex: ReflexSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            reflex,
        }
    }

    pub fn applied(message: String, reflex: ReflexSnapshot) -> Self {
        Self::new("applied".to_string(), message, reflex)
    }

    pub fn ignored(message: String, reflex: ReflexSnapshot) -> Self {
        Self::new("ignored".to_string(), message, reflex)
    }
}

/// Request body for POST /countdown/configure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureRequest {
    pub seconds: u32,
}

/// Response for POST /navigate/:destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub status: String,
    pub destination: String,
    pub timestamp: DateTime<Utc>,
}

impl NavigateResponse {
    pub fn forwarded(destination: String) -> Self {
        Self {
            status: "forwarded".to_string(),
            destination,
            timestamp: Utc::now(),
        }
    }
}

/// Full status response with both games and server metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub countdown: CountdownSnapshot,
    pub reflex: ReflexSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// One entry on the informational page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfo {
    pub name: String,
    pub description: String,
}

/// Informational page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutResponse {
    pub title: String,
    pub games: Vec<GameInfo>,
}

impl AboutResponse {
    /// The static about-page content.
    pub fn page() -> Self {
        Self {
            title: "About".to_string(),
            games: vec![
                GameInfo {
                    name: "Countdown Timer Game".to_string(),
                    description: "How good is your timing? Try to stop the countdown \
                                  timer at exactly 00:00!"
                        .to_string(),
                },
                GameInfo {
                    name: "Reflex Test Game".to_string(),
                    description: "How quickly can you press the button when it turns \
                                  from red to green?"
                        .to_string(),
                },
            ],
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
