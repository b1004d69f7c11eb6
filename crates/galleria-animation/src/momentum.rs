//! Thumbnail-track fling momentum.
//!
//! The thumbnail strip scrolls independently of the main slide: releasing a
//! drag with velocity carries the track onward a bit before easing to a
//! halt. This module computes where it lands and how long the deceleration
//! takes. Everything here is physical: a fling to the right moves the track
//! right whatever the reading order, so the main gallery's RTL flag plays
//! no part.

use crate::easing::{Easing, TransitionSpec};
use galleria_core::{Axis, SwipeDirection};

/// Cap on the deceleration duration in milliseconds.
pub const MAX_MOMENTUM_DURATION_MS: u64 = 700;

/// Track travel in pixels per unit of release velocity.
pub const DEFAULT_MOMENTUM_MULTIPLIER: f32 = 150.0;

/// Inputs to one momentum computation, gathered at gesture release.
#[derive(Debug, Clone, Copy)]
pub struct MomentumInput {
    /// Release velocity magnitude in px/ms.
    pub velocity: f32,
    /// Release direction; must lie on the track's axis to move it.
    pub direction: SwipeDirection,
    /// Whether the track scrolls vertically.
    pub is_vertical: bool,
    /// Track translate at release, in pixels (0 or negative).
    pub current_translate: f32,
    /// Full content size of the track along its axis.
    pub scroll_size: f32,
    /// Visible wrapper size along the track's axis.
    pub wrapper_size: f32,
    /// Base deceleration duration, before the velocity bonus.
    pub slide_duration_ms: u64,
    /// Extra slack allowed past either end of the track.
    pub empty_space_margin: f32,
    /// Pixels of travel per unit of velocity.
    pub momentum_multiplier: f32,
}

impl MomentumInput {
    /// Input with the stock margin and multiplier.
    pub fn new(
        velocity: f32,
        direction: SwipeDirection,
        is_vertical: bool,
        current_translate: f32,
        scroll_size: f32,
        wrapper_size: f32,
        slide_duration_ms: u64,
    ) -> Self {
        Self {
            velocity,
            direction,
            is_vertical,
            current_translate,
            scroll_size,
            wrapper_size,
            slide_duration_ms,
            empty_space_margin: 0.0,
            momentum_multiplier: DEFAULT_MOMENTUM_MULTIPLIER,
        }
    }

    pub fn with_margin(mut self, empty_space_margin: f32) -> Self {
        self.empty_space_margin = empty_space_margin;
        self
    }

    pub fn with_multiplier(mut self, momentum_multiplier: f32) -> Self {
        self.momentum_multiplier = momentum_multiplier;
        self
    }
}

/// Where a fling lands and how it decelerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumResult {
    /// Post-release track translate in pixels, clamped to scrollable bounds.
    pub target_translate: f32,
    /// Deceleration duration in milliseconds.
    pub transition_duration_ms: u64,
    /// Easing descriptor for the deceleration.
    pub transition_style: TransitionSpec,
}

/// Computes the post-release fling target for the thumbnail track.
///
/// Travel is `velocity * momentum_multiplier` in the physical direction of
/// the release. The target clamps to the scrollable range
/// `[-(scroll_size - wrapper_size + margin), margin]`; when the content
/// already fits the wrapper there is no range to clamp into and only the
/// start bound is enforced. Faster flicks earn a slightly longer, smoother
/// deceleration, capped at [`MAX_MOMENTUM_DURATION_MS`].
pub fn calculate_momentum(input: &MomentumInput) -> MomentumResult {
    let track_axis = if input.is_vertical {
        Axis::Vertical
    } else {
        Axis::Horizontal
    };
    let sign = if input.direction.axis() == track_axis {
        input.direction.physical_sign()
    } else {
        0.0
    };

    let distance = input.velocity * input.momentum_multiplier;
    let mut target = input.current_translate + distance * sign;

    let upper_bound = input.empty_space_margin;
    if input.scroll_size > input.wrapper_size {
        let lower_bound = -(input.scroll_size - input.wrapper_size + input.empty_space_margin);
        target = target.clamp(lower_bound, upper_bound);
    } else if target > upper_bound {
        target = upper_bound;
    }

    let duration_ms = input
        .slide_duration_ms
        .saturating_add((input.velocity * 100.0) as u64)
        .min(MAX_MOMENTUM_DURATION_MS);

    MomentumResult {
        target_translate: target,
        transition_duration_ms: duration_ms,
        transition_style: TransitionSpec::new(duration_ms, Easing::EaseOutCubic),
    }
}
