//! Gesture interpretation for the galleria carousel engine.
//!
//! Turns pointer input into navigation decisions:
//! - [`pointer`]: raw positions to cumulative [`SwipeSample`]s
//! - [`velocity`]: time-windowed px/ms velocity estimation
//! - [`swipe`]: live offset math, axis locking, release classification
//!
//! Everything takes explicit timestamps, so gesture logic is as table-
//! testable as the rest of the engine; the only wall-clock touchpoint is
//! the optional real-time stamping in [`PointerTracker::sample`].

pub mod constants;
pub mod pointer;
pub mod swipe;
pub mod velocity;

pub use pointer::PointerTracker;
pub use swipe::{
    calculate_swipe_offset, is_flick_swipe, is_sufficient_swipe, swipe_direction_sign,
    SwipeSample, SwipeSession, SwipeVerdict,
};
pub use velocity::VelocityTracker;
