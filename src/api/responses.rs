//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{state::NotificationRecord, timer::Frame};

/// API response structure for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub frame: Frame,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, frame: Frame) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            frame,
        }
    }

    /// Create a successful response
    pub fn ok(message: String, frame: Frame) -> Self {
        Self::new("ok".to_string(), message, frame)
    }
}

/// Status response with session and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub frame: Frame,
    pub work_seconds: u64,
    pub rest_seconds: u64,
    pub intervals: usize,
    pub notifications: Vec<NotificationRecord>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
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
