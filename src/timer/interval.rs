//! One work phase followed by its rest phase

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::{Countdown, Notification, Notifier, TimerError};

/// Status of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not started yet, or reset
    #[default]
    Idle,
    Working,
    Resting,
    Paused,
    /// Reserved; no transition leads here
    Break,
    /// Both phases ran out
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Working => "working",
            Phase::Resting => "resting",
            Phase::Paused => "paused",
            Phase::Break => "break",
            Phase::Finished => "finished",
        }
    }

    /// Whether the countdown runs in this phase
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Working | Phase::Resting)
    }

    /// Suffix appended to the clock in the status line
    pub fn suffix(&self) -> &'static str {
        match self {
            Phase::Working => " - work",
            Phase::Resting => " - rest",
            Phase::Paused => " - paused",
            _ => "",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to a phase whose countdown reached zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Work is over, re-enter the interval in its rest phase
    StartRest,
    /// Rest is over, the interval is done
    Finish,
}

impl Expiry {
    /// Transition for an expired countdown in `phase`
    ///
    /// Only the two running phases can expire.
    pub fn of(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Working => Some(Expiry::StartRest),
            Phase::Resting => Some(Expiry::Finish),
            _ => None,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            Expiry::StartRest => Notification::WorkDone,
            Expiry::Finish => Notification::RestOver,
        }
    }
}

/// Countdown value for a duration, saturating instead of wrapping
fn as_countdown(seconds: u64) -> i64 {
    i64::try_from(seconds).unwrap_or(i64::MAX)
}

/// A single pomodoro: work, then rest
#[derive(Debug)]
pub struct Interval {
    phase: Phase,
    work_duration: u64,
    rest_duration: u64,
    countdown: Countdown,
}

impl Interval {
    /// Create an idle interval showing its full work duration
    ///
    /// The countdown is preloaded with the work duration, so pausing an idle
    /// interval and starting it runs the full work phase.
    pub fn new(work_duration: u64, rest_duration: u64) -> Self {
        let mut countdown = Countdown::new();
        countdown.reset(as_countdown(work_duration));

        Self {
            phase: Phase::Idle,
            work_duration,
            rest_duration,
            countdown,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn work_duration(&self) -> u64 {
        self.work_duration
    }

    pub fn rest_duration(&self) -> u64 {
        self.rest_duration
    }

    /// Seconds left in the current phase
    pub fn remaining(&self) -> i64 {
        self.countdown.remaining()
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Enter `target`, which must be `Working` or `Resting`
    ///
    /// Coming out of `Paused` keeps the remaining time; any other phase loads
    /// the full duration of the target.
    pub fn start(&mut self, target: Phase) -> Result<(), TimerError> {
        let duration = match target {
            Phase::Working => self.work_duration,
            Phase::Resting => self.rest_duration,
            other => {
                let err = TimerError::InvalidStartTarget(other);
                error!("{}", err);
                return Err(err);
            }
        };

        if self.phase != Phase::Paused {
            self.countdown.reset(as_countdown(duration));
        }

        info!("Interval {} -> {} ({}s left)", self.phase, target, self.remaining());
        self.phase = target;
        self.countdown.start()
    }

    /// Wait for the next tick of the running countdown
    pub async fn wait_tick(&mut self) {
        self.countdown.wait_tick().await
    }

    /// Apply one tick
    ///
    /// The countdown is decremented first, then an expired phase moves on.
    /// Returns the phase after the tick.
    pub fn on_tick(&mut self, notifier: &mut dyn Notifier) -> Phase {
        let remaining = self.countdown.tick();
        debug!("Interval tick: {} with {}s left", self.phase, remaining);

        if remaining <= 0 {
            if let Some(expiry) = Expiry::of(self.phase) {
                notifier.notify(expiry.notification());
                match expiry {
                    Expiry::StartRest => {
                        if let Err(e) = self.start(Phase::Resting) {
                            error!("Failed to enter rest phase: {}", e);
                        }
                    }
                    Expiry::Finish => self.done(),
                }
            }
        }

        self.phase
    }

    /// Stop the countdown and keep what is left
    pub fn pause(&mut self) {
        self.countdown.stop();
        if !self.phase.is_active() {
            debug!("Pausing an interval that is {}", self.phase);
        }
        self.phase = Phase::Paused;
    }

    /// Back to idle with the full work duration loaded
    pub fn reset(&mut self) {
        self.countdown.stop();
        self.phase = Phase::Idle;
        self.countdown.reset(as_countdown(self.work_duration));
    }

    pub fn dispose(&mut self) {
        self.countdown.stop();
        self.phase = Phase::Idle;
    }

    fn done(&mut self) {
        self.countdown.stop();
        self.phase = Phase::Finished;
    }
}
