//! Pomodoro timer core
//!
//! A `Countdown` ticks once per second, an `Interval` runs one work phase
//! followed by its rest phase on top of it, and a `Session` chains several
//! intervals back to back.

pub mod countdown;
pub mod error;
pub mod frame;
pub mod interval;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use countdown::{Countdown, TICK_INTERVAL};
pub use error::TimerError;
pub use frame::{format_clock, Controls, Frame};
pub use interval::{Expiry, Interval, Phase};
pub use session::Session;

/// Informational messages raised by the timer at its checkpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    /// Work phase ran out
    WorkDone,
    /// Rest phase ran out
    RestOver,
    /// Last interval of a multi-interval session finished
    LongBreak,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::WorkDone => "Work done! Take a break.",
            Notification::RestOver => "Pause is over.",
            Notification::LongBreak => "Well done! You should now take a longer break.",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<F> Notifier for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}
