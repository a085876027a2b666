//! What the host renders after every tick and control call

use serde::{Deserialize, Serialize};

use super::Phase;

/// Text shown once every interval of the session is over
pub const RESTART_PROMPT: &str = "Restart session?";

/// Format seconds as zero-padded `MM:SS`
///
/// Negative values (seen on the last tick of a phase) render as zero.
pub fn format_clock(remaining: i64) -> String {
    let remaining = remaining.max(0);
    format!("{:02}:{:02}", remaining / 60, remaining % 60)
}

/// Which of the three control affordances should be offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
}

impl Controls {
    /// Visibility is a function of the phase only
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Working | Phase::Resting => Self {
                start: false,
                pause: true,
                reset: false,
            },
            Phase::Paused => Self {
                start: true,
                pause: false,
                reset: true,
            },
            _ => Self {
                start: true,
                pause: false,
                reset: false,
            },
        }
    }
}

/// Snapshot handed to the render callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Status line, e.g. `24:59 - work (1 of 4)`
    pub text: String,
    pub phase: Phase,
    pub remaining_seconds: i64,
    /// 1-based position of the current interval, absent once finished
    pub interval: Option<usize>,
    pub total_intervals: usize,
    pub finished: bool,
    pub controls: Controls,
}

impl Frame {
    /// Frame for an interval that is still part of the session
    pub fn running(phase: Phase, remaining: i64, index: usize, total: usize) -> Self {
        let mut text = format_clock(remaining);
        text.push_str(phase.suffix());
        if total > 1 {
            text.push_str(&format!(" ({} of {})", index + 1, total));
        }

        Self {
            text,
            phase,
            remaining_seconds: remaining.max(0),
            interval: Some(index + 1),
            total_intervals: total,
            finished: false,
            controls: Controls::for_phase(phase),
        }
    }

    /// Frame once the whole session is over
    pub fn finished(total: usize) -> Self {
        Self {
            text: RESTART_PROMPT.to_string(),
            phase: Phase::Finished,
            remaining_seconds: 0,
            interval: None,
            total_intervals: total,
            finished: true,
            controls: Controls::for_phase(Phase::Finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(-1), "00:00");
    }

    #[test]
    fn single_interval_has_no_progress_suffix() {
        let frame = Frame::running(Phase::Working, 1499, 0, 1);
        assert_eq!(frame.text, "24:59 - work");
        assert_eq!(frame.interval, Some(1));
    }

    #[test]
    fn multi_interval_shows_progress() {
        let frame = Frame::running(Phase::Resting, 65, 2, 4);
        assert_eq!(frame.text, "01:05 - rest (3 of 4)");
    }

    #[test]
    fn idle_frame_has_bare_clock() {
        let frame = Frame::running(Phase::Idle, 300, 0, 1);
        assert_eq!(frame.text, "05:00");
        assert_eq!(frame.controls, Controls::for_phase(Phase::Idle));
    }

    #[test]
    fn reset_is_offered_while_paused() {
        let controls = Controls::for_phase(Phase::Paused);
        assert!(controls.start);
        assert!(!controls.pause);
        assert!(controls.reset);
    }

    #[test]
    fn running_phases_only_offer_pause() {
        for phase in [Phase::Working, Phase::Resting] {
            let controls = Controls::for_phase(phase);
            assert!(!controls.start);
            assert!(controls.pause);
            assert!(!controls.reset);
        }
    }

    #[test]
    fn finished_frame_prompts_restart() {
        let frame = Frame::finished(4);
        assert_eq!(frame.text, RESTART_PROMPT);
        assert!(frame.finished);
        assert!(frame.controls.start);
        assert_eq!(frame.interval, None);
    }
}
