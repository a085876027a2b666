//! Timer errors

use thiserror::Error;

use super::Phase;

/// Non-fatal conditions raised by the timer state machine.
///
/// Neither variant changes any state; callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("A timer instance is already running")]
    AlreadyRunning,

    #[error("Start timer error: cannot start an interval in the {0} phase")]
    InvalidStartTarget(Phase),
}
