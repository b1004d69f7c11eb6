//! Timing and momentum math for the galleria carousel engine.
//!
//! - [`easing`]: transition easing descriptors and curve evaluation
//! - [`duration`]: velocity-shaped slide transition durations
//! - [`momentum`]: thumbnail-track fling targets

pub mod duration;
pub mod easing;
pub mod momentum;

pub use duration::{compute_velocity_duration, MIN_SWIPE_DURATION_MS};
pub use easing::{Easing, TransitionSpec};
pub use momentum::{
    calculate_momentum, MomentumInput, MomentumResult, DEFAULT_MOMENTUM_MULTIPLIER,
    MAX_MOMENTUM_DURATION_MS,
};
