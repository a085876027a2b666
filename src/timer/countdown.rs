//! Countdown driven by a periodic tick source

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, error};

use super::TimerError;

/// Period between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Seconds removed from the countdown on every tick
const TICK_UNITS: i64 = 1;

/// Decrementing second counter
///
/// The tick source is an owned `tokio::time::Interval`; `running` is simply
/// whether one is held. Dropping the countdown drops the tick source.
#[derive(Debug)]
pub struct Countdown {
    remaining: i64,
    ticker: Option<Interval>,
}

impl Countdown {
    /// Create a stopped countdown with nothing left on it
    pub fn new() -> Self {
        Self {
            remaining: 0,
            ticker: None,
        }
    }

    /// Seconds left, possibly negative right after the last tick
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Whether a tick source is registered
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stop any tick source and load a new value
    pub fn reset(&mut self, value: i64) {
        self.stop();
        self.remaining = value;
    }

    /// Register the tick source
    ///
    /// The first tick fires one period after this call. A second start while
    /// running is rejected and leaves the existing tick source untouched.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.ticker.is_some() {
            error!("{}", TimerError::AlreadyRunning);
            return Err(TimerError::AlreadyRunning);
        }

        let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(ticker);

        debug!("Countdown started with {}s remaining", self.remaining);
        Ok(())
    }

    /// Unregister the tick source, if any
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Countdown stopped with {}s remaining", self.remaining);
        }
    }

    /// Wait for the next scheduled tick
    ///
    /// Never completes while stopped. Cancel safe.
    pub async fn wait_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Apply one tick and return the new remaining value
    pub fn tick(&mut self) -> i64 {
        self.remaining -= TICK_UNITS;
        self.remaining
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_countdown_is_stopped_at_zero() {
        let countdown = Countdown::new();
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_is_rejected() {
        let mut countdown = Countdown::new();
        countdown.reset(10);

        assert_eq!(countdown.start(), Ok(()));
        assert_eq!(countdown.start(), Err(TimerError::AlreadyRunning));
        assert!(countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_stops_and_reloads() {
        let mut countdown = Countdown::new();
        countdown.reset(10);
        countdown.start().unwrap();
        countdown.tick();

        countdown.reset(42);
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 42);

        countdown.reset(42);
        assert_eq!(countdown.remaining(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_fires_after_one_period() {
        let mut countdown = Countdown::new();
        countdown.reset(3);
        countdown.start().unwrap();

        let started = Instant::now();
        countdown.wait_tick().await;
        let elapsed = started.elapsed();
        assert!(elapsed >= TICK_INTERVAL);
        assert!(elapsed < TICK_INTERVAL + Duration::from_millis(10));
        assert_eq!(countdown.tick(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_countdown_never_ticks() {
        let mut countdown = Countdown::new();
        countdown.reset(3);

        let waited = tokio::time::timeout(Duration::from_secs(60), countdown.wait_tick()).await;
        assert!(waited.is_err());
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn tick_can_go_negative() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(), -1);
    }
}
