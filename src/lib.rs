//! Pomodoro Server - A state-managed HTTP server running pomodoro sessions
//!
//! The `timer` module holds the work/rest state machine; the rest of the
//! crate drives it from a background task and exposes it over HTTP.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, SessionSettings};
pub use timer::{Countdown, Frame, Interval, Notification, Phase, Session, TimerError};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
