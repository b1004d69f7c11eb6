//! Raw pointer stream to swipe samples.

use crate::constants::MAX_SWIPE_VELOCITY;
use crate::swipe::SwipeSample;
use crate::velocity::VelocityTracker;
use galleria_core::{Axis, SwipeDirection};
use web_time::Instant;

/// Turns raw pointer positions into cumulative [`SwipeSample`]s.
///
/// One tracker lives per gesture: created on pointer-down at the anchor
/// position, fed every subsequent position, discarded on release. Velocity
/// runs per axis so the sample always carries the reading matching its
/// dominant direction.
///
/// Two feeding modes: [`PointerTracker::sample_at`] with explicit
/// milliseconds since pointer-down (embedders with their own event
/// timestamps, tests), or [`PointerTracker::sample`] stamping elapsed time
/// itself.
#[derive(Debug)]
pub struct PointerTracker {
    origin_x: f32,
    origin_y: f32,
    started: Instant,
    velocity_x: VelocityTracker,
    velocity_y: VelocityTracker,
}

impl PointerTracker {
    /// Anchors a new gesture at the pointer-down position.
    pub fn begin(x: f32, y: f32) -> Self {
        let mut velocity_x = VelocityTracker::new();
        let mut velocity_y = VelocityTracker::new();
        velocity_x.push(0, x);
        velocity_y.push(0, y);
        Self {
            origin_x: x,
            origin_y: y,
            started: Instant::now(),
            velocity_x,
            velocity_y,
        }
    }

    /// Feeds a pointer position stamped `time_ms` after pointer-down.
    pub fn sample_at(&mut self, time_ms: u64, x: f32, y: f32) -> SwipeSample {
        self.velocity_x.push(time_ms, x);
        self.velocity_y.push(time_ms, y);

        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        let abs_x = dx.abs();
        let abs_y = dy.abs();

        let direction = if abs_x >= abs_y {
            if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            }
        } else if dy < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        };

        let raw_velocity = match direction.axis() {
            Axis::Horizontal => self.velocity_x.velocity(),
            Axis::Vertical => self.velocity_y.velocity(),
        };
        let velocity = raw_velocity.abs().min(MAX_SWIPE_VELOCITY);

        SwipeSample {
            direction,
            abs_x,
            abs_y,
            velocity,
        }
    }

    /// Feeds a pointer position, stamping it with real elapsed time.
    pub fn sample(&mut self, x: f32, y: f32) -> SwipeSample {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.sample_at(elapsed_ms, x, y)
    }
}
