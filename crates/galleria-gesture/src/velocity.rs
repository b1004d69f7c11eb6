//! Velocity tracking over a sliding time window.

use std::collections::VecDeque;

/// Only samples within this window of the newest one count toward velocity.
const HISTORY_WINDOW_MS: u64 = 100;

/// If the pointer barely moved for this long, treat it as stopped.
const ASSUME_STOPPED_MS: u64 = 40;

/// Total movement below this over `ASSUME_STOPPED_MS` reads as zero velocity.
const MIN_MOVEMENT_PX: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
struct TrackedPoint {
    time_ms: u64,
    position: f32,
}

/// 1D pointer velocity estimator.
///
/// Keeps a short history of absolute positions and reports the average
/// velocity across the window, in px/ms. Holding the pointer still before
/// release correctly reads as zero, so a slow drag-and-hold never counts as
/// a flick.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    history: VecDeque<TrackedPoint>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            history: VecDeque::new(),
        }
    }

    /// Records the pointer position at `time_ms`.
    ///
    /// Timestamps must not go backwards; a non-monotonic sample is dropped.
    pub fn push(&mut self, time_ms: u64, position: f32) {
        if let Some(last) = self.history.back() {
            if time_ms < last.time_ms {
                log::trace!(
                    "ignoring velocity sample at {}ms earlier than last {}ms",
                    time_ms,
                    last.time_ms
                );
                return;
            }
        }
        self.history.push_back(TrackedPoint { time_ms, position });
        self.trim(time_ms);
    }

    /// Signed velocity across the current window, in px/ms.
    ///
    /// Zero with fewer than two samples, a zero time span, or a pointer that
    /// has effectively stopped.
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };
        let span_ms = last.time_ms.saturating_sub(first.time_ms);
        if span_ms == 0 {
            return 0.0;
        }
        let delta = last.position - first.position;
        if span_ms > ASSUME_STOPPED_MS && delta.abs() < MIN_MOVEMENT_PX {
            return 0.0;
        }
        delta / span_ms as f32
    }

    /// Clears all tracked history.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    fn trim(&mut self, newest_ms: u64) {
        while let Some(first) = self.history.front() {
            if first.time_ms + HISTORY_WINDOW_MS >= newest_ms {
                break;
            }
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reads_zero() {
        assert_eq!(VelocityTracker::new().velocity(), 0.0);
    }

    #[test]
    fn single_sample_reads_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn constant_motion_reads_its_slope() {
        let mut tracker = VelocityTracker::new();
        // 100px every 10ms: 10 px/ms.
        tracker.push(0, 0.0);
        tracker.push(10, 100.0);
        tracker.push(20, 200.0);
        tracker.push(30, 300.0);
        assert!((tracker.velocity() - 10.0).abs() < 0.01);
    }

    #[test]
    fn backwards_motion_reads_negative() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 300.0);
        tracker.push(10, 200.0);
        tracker.push(20, 100.0);
        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn stale_samples_fall_out_of_the_window() {
        let mut tracker = VelocityTracker::new();
        // An early fast burst followed by slow recent motion: the burst must
        // not inflate the reading.
        tracker.push(0, 0.0);
        tracker.push(150, 500.0);
        tracker.push(200, 510.0);
        tracker.push(250, 520.0);
        // Window holds [150, 250]: 20px over 100ms.
        assert!((tracker.velocity() - 0.2).abs() < 0.01);
    }

    #[test]
    fn held_pointer_reads_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 100.0);
        tracker.push(30, 100.5);
        tracker.push(60, 101.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn out_of_order_sample_is_dropped() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(20, 100.0);
        tracker.push(10, 500.0);
        assert!((tracker.velocity() - 5.0).abs() < 0.01);
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(10, 100.0);
        tracker.reset();
        assert_eq!(tracker.velocity(), 0.0);
    }
}
