//! Desktop notifications through notify-send

use tokio::process::Command;
use tracing::{debug, info};

/// Summary line shown above every desktop notification
const NOTIFICATION_TITLE: &str = "Pomodoro";

/// Show `message` as a desktop notification
pub async fn send_desktop_notification(message: &str) -> Result<(), String> {
    debug!("Sending desktop notification: {}", message);

    let output = Command::new("notify-send")
        .args(["--app-name", NOTIFICATION_TITLE, NOTIFICATION_TITLE, message])
        .output()
        .await
        .map_err(|e| format!("Failed to execute notify-send: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("notify-send failed: {}", stderr));
    }

    Ok(())
}

/// Check if notify-send is available on the system
pub async fn check_notify_send_available() -> Result<(), String> {
    Command::new("notify-send")
        .arg("--version")
        .output()
        .await
        .map_err(|_| "notify-send is not available, desktop notifications are disabled".to_string())?;

    info!("notify-send is available");
    Ok(())
}
