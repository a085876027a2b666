//! Property-based tests for the interval and session state machines.

use pomodoro_server::timer::{format_clock, Interval, Notification, Phase, Session};
use proptest::prelude::*;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("failed to build test runtime")
}

fn tick(interval: &mut Interval, ticks: u64) -> Vec<Notification> {
    let mut seen = Vec::new();
    for _ in 0..ticks {
        interval.on_tick(&mut |n: Notification| seen.push(n));
    }
    seen
}

proptest! {
    #[test]
    fn work_expires_after_exactly_w_ticks(w in 1u64..200, r in 1u64..200) {
        let (before, after, remaining) = paused_runtime().block_on(async {
            let mut interval = Interval::new(w, r);
            interval.start(Phase::Working).unwrap();
            tick(&mut interval, w - 1);
            let before = interval.phase();
            tick(&mut interval, 1);
            (before, interval.phase(), interval.remaining())
        });

        prop_assert_eq!(before, Phase::Working);
        prop_assert_eq!(after, Phase::Resting);
        prop_assert_eq!(remaining, r as i64);
    }

    #[test]
    fn interval_finishes_after_w_plus_r_ticks(w in 1u64..200, r in 1u64..200, extra in 0u64..20) {
        let (phase, running, seen) = paused_runtime().block_on(async {
            let mut interval = Interval::new(w, r);
            interval.start(Phase::Working).unwrap();
            let seen = tick(&mut interval, w + r);
            (interval.phase(), interval.is_running(), seen)
        });

        prop_assert_eq!(phase, Phase::Finished);
        prop_assert!(!running);
        prop_assert_eq!(seen, vec![Notification::WorkDone, Notification::RestOver]);

        // A stopped countdown never fires again, so the finished session
        // does not move however long the driver waits
        let waited = paused_runtime().block_on(async {
            let mut session = Session::new(w, r, 1);
            session.start().unwrap();
            for _ in 0..(w + r) {
                session.on_tick(&mut |_: Notification| {});
            }
            let waited = tokio::time::timeout(
                std::time::Duration::from_secs(extra + 1),
                session.wait_tick(),
            )
            .await;
            (waited.is_err(), session.is_finished())
        });
        prop_assert_eq!(waited, (true, true));
    }

    #[test]
    fn pause_and_resume_preserve_remaining(w in 2u64..200, r in 1u64..50, k in 1u64..199) {
        prop_assume!(k < w);

        let (paused, resumed, phase) = paused_runtime().block_on(async {
            let mut interval = Interval::new(w, r);
            interval.start(Phase::Working).unwrap();
            tick(&mut interval, k);
            interval.pause();
            let paused = interval.remaining();
            interval.start(Phase::Working).unwrap();
            (paused, interval.remaining(), interval.phase())
        });

        prop_assert_eq!(paused, (w - k) as i64);
        prop_assert_eq!(resumed, (w - k) as i64);
        prop_assert_eq!(phase, Phase::Working);
    }

    #[test]
    fn reset_always_restores_work_duration(w in 1u64..100, r in 1u64..100, ticks in 0u64..250, pause in any::<bool>()) {
        let (phase, remaining) = paused_runtime().block_on(async {
            let mut interval = Interval::new(w, r);
            interval.start(Phase::Working).unwrap();
            tick(&mut interval, ticks);
            if pause {
                interval.pause();
            }
            interval.reset();
            (interval.phase(), interval.remaining())
        });

        prop_assert_eq!(phase, Phase::Idle);
        prop_assert_eq!(remaining, w as i64);
    }

    #[test]
    fn session_advances_one_interval_at_a_time(w in 1u64..30, r in 1u64..30, n in 2usize..6) {
        let steps = paused_runtime().block_on(async {
            let mut session = Session::new(w, r, n);
            session.start().unwrap();

            let mut steps = Vec::new();
            for _ in 0..n {
                for _ in 0..(w + r) {
                    session.on_tick(&mut |_: Notification| {});
                }
                let phase = session.current_interval().map(|i| i.phase());
                steps.push((session.current_index(), phase, session.is_finished()));
            }
            steps
        });

        for (i, (index, phase, finished)) in steps.iter().enumerate() {
            prop_assert_eq!(*index, i + 1);
            if i + 1 < n {
                prop_assert_eq!(*phase, Some(Phase::Working));
                prop_assert!(!*finished);
            } else {
                prop_assert_eq!(*phase, None);
                prop_assert!(*finished);
            }
        }
    }

    #[test]
    fn clock_is_always_zero_padded(seconds in 0i64..6000) {
        let text = format_clock(seconds);
        let (minutes, secs) = text.split_once(':').unwrap();
        prop_assert!(minutes.len() >= 2);
        prop_assert_eq!(secs.len(), 2);
        prop_assert_eq!(minutes.parse::<i64>().unwrap() * 60 + secs.parse::<i64>().unwrap(), seconds);
    }
}
