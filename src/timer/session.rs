//! A sequence of intervals run back to back

use tracing::{debug, error, info, warn};

use super::{Frame, Interval, Notification, Notifier, Phase, TimerError};

/// Ordered list of pomodori with a cursor on the current one
///
/// The cursor equals the number of intervals once the session is over.
#[derive(Debug)]
pub struct Session {
    intervals: Vec<Interval>,
    current: usize,
    work_time: u64,
    rest_time: u64,
}

impl Session {
    /// Create a session of `count` idle intervals
    pub fn new(work_time: u64, rest_time: u64, count: usize) -> Self {
        let mut session = Self {
            intervals: Vec::new(),
            current: 0,
            work_time,
            rest_time,
        };
        session.reset(work_time, rest_time, count);
        session
    }

    /// Rebuild the interval list from scratch without starting anything
    ///
    /// Dropping the old intervals stops whatever was still ticking.
    pub fn reset(&mut self, work_time: u64, rest_time: u64, count: usize) {
        let count = if count == 0 {
            warn!("A session needs at least one interval, using 1");
            1
        } else {
            count
        };

        self.work_time = work_time;
        self.rest_time = rest_time;
        self.current = 0;
        self.intervals = (0..count)
            .map(|_| Interval::new(work_time, rest_time))
            .collect();

        info!(
            "Session reset: {} interval(s) of {}s work / {}s rest",
            count, work_time, rest_time
        );
    }

    /// Start or resume the current interval's work phase
    ///
    /// A finished session starts over from its first interval.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.is_finished() {
            info!("Session finished, starting over");
            self.current = 0;
        }

        let index = self.current;
        let total = self.intervals.len();
        match self.intervals.get_mut(index) {
            Some(interval) => {
                info!("Starting interval {} of {}", index + 1, total);
                interval.start(Phase::Working)
            }
            None => Ok(()),
        }
    }

    /// Pause the current interval
    pub fn pause(&mut self, notifier: &mut dyn Notifier) {
        match self.current_interval_mut() {
            Some(interval) => interval.pause(),
            None => {
                debug!("Nothing to pause, session is finished");
                return;
            }
        }

        self.advance(notifier);
    }

    /// Wait for the current interval's next tick
    ///
    /// Never completes while nothing is running.
    pub async fn wait_tick(&mut self) {
        match self.intervals.get_mut(self.current) {
            Some(interval) => interval.wait_tick().await,
            None => std::future::pending::<()>().await,
        }
    }

    /// Apply one tick to the current interval and move on if it finished
    pub fn on_tick(&mut self, notifier: &mut dyn Notifier) {
        match self.current_interval_mut() {
            Some(interval) => {
                interval.on_tick(notifier);
            }
            None => return,
        }

        self.advance(notifier);
    }

    fn advance(&mut self, notifier: &mut dyn Notifier) {
        let finished = self
            .current_interval()
            .map(|interval| interval.phase() == Phase::Finished)
            .unwrap_or(false);
        if !finished {
            return;
        }

        self.current += 1;
        if self.is_finished() {
            info!("Session finished after {} interval(s)", self.intervals.len());
            if self.intervals.len() > 1 {
                notifier.notify(Notification::LongBreak);
            }
        } else if let Err(e) = self.start() {
            error!("Failed to start next interval: {}", e);
        }
    }

    pub fn current_interval(&self) -> Option<&Interval> {
        self.intervals.get(self.current)
    }

    fn current_interval_mut(&mut self) -> Option<&mut Interval> {
        self.intervals.get_mut(self.current)
    }

    /// 0-based cursor; equals `len()` once finished
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.intervals.len()
    }

    pub fn work_time(&self) -> u64 {
        self.work_time
    }

    pub fn rest_time(&self) -> u64 {
        self.rest_time
    }

    /// Snapshot for the render callback
    pub fn frame(&self) -> Frame {
        match self.current_interval() {
            Some(interval) => Frame::running(
                interval.phase(),
                interval.remaining(),
                self.current,
                self.intervals.len(),
            ),
            None => Frame::finished(self.intervals.len()),
        }
    }

    /// Stop the current interval
    pub fn dispose(&mut self) {
        if let Some(interval) = self.current_interval_mut() {
            interval.dispose();
        }
        debug!("Session disposed");
    }
}
