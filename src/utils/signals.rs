//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{error, info};

/// Wait for a shutdown signal (SIGTERM, SIGINT, SIGHUP)
///
/// Returns the signal number, or `None` if handlers could not be installed,
/// in which case this future never resolves.
pub async fn shutdown_signal() -> Option<i32> {
    let mut signals = match Signals::new([SIGTERM, SIGINT, SIGHUP]) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Failed to install signal handlers: {}", e);
            return std::future::pending().await;
        }
    };
    let handle = signals.handle();

    let received = signals.next().await;
    if let Some(signal) = received {
        info!("Received signal: {}", signal);
    }

    handle.close();
    received
}
