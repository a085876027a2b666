//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::{
    config::SessionSettings,
    timer::{Frame, Notification, Session},
};
use super::{Command, NotificationLog, NotificationRecord, SessionRequest};

/// Capacity of the control channel into the session driver
const COMMAND_BUFFER: usize = 32;

/// Shared state between the HTTP handlers and the session driver
///
/// The session itself lives in the driver task; everything here is either
/// a channel to it or a view of what it last rendered.
#[derive(Debug)]
pub struct AppState {
    /// Durations each session is built from
    pub settings: SessionSettings,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Notifications raised by the timer
    pub notifications: Arc<Mutex<NotificationLog>>,
    /// Control channel into the session driver
    pub command_tx: mpsc::Sender<SessionRequest>,
    /// Latest rendered frame
    pub frame_tx: watch::Sender<Frame>,
    /// Keep the receiver alive to prevent channel closure
    pub _frame_rx: watch::Receiver<Frame>,
}

impl AppState {
    /// Create a new AppState and the receiving end for the session driver
    pub fn new(
        port: u16,
        host: String,
        settings: SessionSettings,
    ) -> (Self, mpsc::Receiver<SessionRequest>) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let initial = Session::new(
            settings.work_seconds,
            settings.rest_seconds,
            settings.intervals,
        )
        .frame();
        let (frame_tx, frame_rx) = watch::channel(initial);

        let state = Self {
            settings,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            notifications: Arc::new(Mutex::new(NotificationLog::new())),
            command_tx,
            frame_tx,
            _frame_rx: frame_rx,
        };

        (state, command_rx)
    }

    /// Send a control command to the session driver and wait for its frame
    pub async fn send_command(&self, command: Command) -> Result<Frame, String> {
        info!("Sending {} command to session driver", command);

        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(SessionRequest { command, reply })
            .await
            .map_err(|_| format!("Session driver is not running, cannot {}", command))?;

        let frame = response
            .await
            .map_err(|_| format!("Session driver dropped the {} request", command))?;

        self.record_action(command);
        Ok(frame)
    }

    fn record_action(&self, command: Command) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(command.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Publish a freshly rendered frame
    pub fn publish_frame(&self, frame: Frame) {
        debug!("Render: {}", frame.text);
        if let Err(e) = self.frame_tx.send(frame) {
            warn!("Failed to publish frame: {}", e);
        }
    }

    /// Get the last published frame
    pub fn current_frame(&self) -> Frame {
        self.frame_tx.borrow().clone()
    }

    /// Append a notification to the recent log
    pub fn record_notification(&self, notification: Notification) -> Result<(), String> {
        let mut log = self.notifications.lock()
            .map_err(|e| format!("Failed to lock notification log: {}", e))?;

        log.push(notification);
        Ok(())
    }

    /// Get recent notifications, oldest first
    pub fn recent_notifications(&self) -> Result<Vec<NotificationRecord>, String> {
        self.notifications.lock()
            .map(|log| log.records())
            .map_err(|e| format!("Failed to lock notification log: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
