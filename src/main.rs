//! Pomodoro Server - A state-managed HTTP server running pomodoro sessions
//!
//! This is the main entry point for the pomodoro-server application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pomodoro_server::{
    config::Config,
    state::{AppState, Command},
    api::create_router,
    services::check_notify_send_available,
    tasks::session_driver_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_server={},tower_http=info", config.log_level()))
        .init();

    let settings = config.settings();
    info!("Starting pomodoro-server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}s, rest={}s, intervals={}",
          config.host, config.port, settings.work_seconds, settings.rest_seconds, settings.intervals);

    // Desktop notifications are optional, fall back to logging only
    let mut desktop_notify = config.desktop_notify;
    if desktop_notify {
        if let Err(e) = check_notify_send_available().await {
            warn!("{}", e);
            desktop_notify = false;
        }
    }

    // Create application state
    let (state, commands) = AppState::new(config.port, config.host.clone(), settings);
    let state = Arc::new(state);

    // Start the session driver background task
    let driver_state = Arc::clone(&state);
    let driver = tokio::spawn(async move {
        session_driver_task(driver_state, commands, desktop_notify).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or resume the current pomodoro");
    info!("  POST /pause  - Pause the current pomodoro");
    info!("  POST /reset  - Reset the session");
    info!("  GET  /status - Current timer text, phase and notifications");
    info!("  GET  /health - Health check");

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

    // Release every running timer before exiting
    if let Err(e) = state.send_command(Command::Dispose).await {
        warn!("Failed to dispose session: {}", e);
    }
    if let Err(e) = driver.await {
        warn!("Session driver ended abnormally: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
