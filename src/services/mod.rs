//! External service module
//!
//! This module contains the desktop notification bridge used by the
//! session driver.

pub mod notify;

// Re-export main functions
pub use notify::*;
