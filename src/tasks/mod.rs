//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod session_driver;

// Re-export main functions
pub use session_driver::{session_driver_task, HostNotifier};
