//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, Command};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

async fn control(state: &AppState, command: Command) -> Result<Json<ApiResponse>, StatusCode> {
    match state.send_command(command).await {
        Ok(frame) => {
            info!("{} endpoint called - {}", command, frame.text);
            Ok(Json(ApiResponse::ok(
                format!("Pomodoro {} accepted", command),
                frame,
            )))
        }
        Err(e) => {
            error!("Failed to {} pomodoro: {}", command, e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle POST /start - Start or resume the current pomodoro
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, Command::Start).await
}

/// Handle POST /pause - Pause the current pomodoro
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, Command::Pause).await
}

/// Handle POST /reset - Rebuild the session from the configured durations
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, Command::Reset).await
}

/// Handle GET /status - Return the current frame and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let notifications = match state.recent_notifications() {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to get notifications: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        frame: state.current_frame(),
        work_seconds: state.settings.work_seconds,
        rest_seconds: state.settings.rest_seconds,
        intervals: state.settings.intervals,
        notifications,
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
