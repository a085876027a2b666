//! State management module
//!
//! This module contains the state shared between the HTTP layer and the
//! session driver task.

pub mod app_state;
pub mod command;
pub mod notifications;

// Re-export main types
pub use app_state::AppState;
pub use command::{Command, SessionRequest};
pub use notifications::{NotificationLog, NotificationRecord};
