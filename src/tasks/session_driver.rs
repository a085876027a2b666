//! Session driver background task

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    services::send_desktop_notification,
    state::{AppState, Command, SessionRequest},
    timer::{Notification, Notifier, Session},
};

/// Notification sink handed to the session on every tick and control call
pub struct HostNotifier {
    state: Arc<AppState>,
    desktop: bool,
}

impl HostNotifier {
    pub fn new(state: Arc<AppState>, desktop: bool) -> Self {
        Self { state, desktop }
    }
}

impl Notifier for HostNotifier {
    fn notify(&mut self, notification: Notification) {
        info!("Notification: {}", notification);

        if let Err(e) = self.state.record_notification(notification) {
            warn!("Failed to record notification: {}", e);
        }

        if self.desktop {
            tokio::spawn(async move {
                if let Err(e) = send_desktop_notification(notification.message()).await {
                    warn!("Desktop notification failed: {}", e);
                }
            });
        }
    }
}

/// Background task that owns the session
///
/// Control requests and countdown ticks are handled one at a time; every
/// one of them ends with a fresh frame being published.
pub async fn session_driver_task(
    state: Arc<AppState>,
    mut commands: mpsc::Receiver<SessionRequest>,
    desktop_notify: bool,
) {
    info!("Starting session driver task");

    let settings = state.settings;
    let mut session = Session::new(
        settings.work_seconds,
        settings.rest_seconds,
        settings.intervals,
    );
    let mut notifier = HostNotifier::new(Arc::clone(&state), desktop_notify);
    state.publish_frame(session.frame());

    loop {
        tokio::select! {
            request = commands.recv() => {
                let Some(SessionRequest { command, reply }) = request else {
                    info!("Command channel closed, disposing session");
                    session.dispose();
                    break;
                };

                debug!("Session driver received {} command", command);
                match command {
                    Command::Start => {
                        if let Err(e) = session.start() {
                            warn!("Start ignored: {}", e);
                        }
                    }
                    Command::Pause => session.pause(&mut notifier),
                    Command::Reset => session.reset(
                        settings.work_seconds,
                        settings.rest_seconds,
                        settings.intervals,
                    ),
                    Command::Dispose => session.dispose(),
                }

                let frame = session.frame();
                state.publish_frame(frame.clone());
                if reply.send(frame).is_err() {
                    debug!("Requester went away before the {} reply", command);
                }

                if command == Command::Dispose {
                    info!("Session disposed, stopping session driver");
                    break;
                }
            }

            _ = session.wait_tick() => {
                session.on_tick(&mut notifier);
                state.publish_frame(session.frame());
            }
        }
    }
}
