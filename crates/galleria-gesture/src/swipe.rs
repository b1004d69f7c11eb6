//! Swipe interpretation.
//!
//! Converts a stream of gesture samples into a live slide offset while the
//! finger is down and a classified outcome on release. The pure math lives
//! in free functions; [`SwipeSession`] carries the per-gesture state (axis
//! lock, accumulated offset, final sample).

use crate::constants::SWIPE_DEAD_ZONE;
use galleria_core::{Axis, GalleryConfig, SwipeDirection};

/// One gesture-update tick from the pointer layer.
///
/// Displacements are cumulative since the gesture began; velocity is the
/// current reading along the sample's axis, in px/ms. Produced per tick,
/// consumed immediately, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSample {
    /// Dominant direction of the gesture so far.
    pub direction: SwipeDirection,
    /// Cumulative horizontal displacement, non-negative.
    pub abs_x: f32,
    /// Cumulative vertical displacement, non-negative.
    pub abs_y: f32,
    /// Velocity magnitude along the sample's axis, px/ms.
    pub velocity: f32,
}

/// Live swipe displacement as a signed percentage of the viewport.
///
/// Picks the magnitude along the configured slide axis, converts it to a
/// 0..100 percentage of the matching viewport dimension (clamped at 100)
/// and applies the direction's physical sign. Zero-sized viewports yield
/// zero rather than dividing by nothing.
pub fn calculate_swipe_offset(
    abs_x: f32,
    abs_y: f32,
    gallery_width: f32,
    gallery_height: f32,
    direction: SwipeDirection,
    slide_vertically: bool,
) -> f32 {
    let fraction = if slide_vertically {
        if gallery_height <= 0.0 {
            0.0
        } else {
            abs_y / gallery_height
        }
    } else if gallery_width <= 0.0 {
        0.0
    } else {
        abs_x / gallery_width
    };
    (fraction * 100.0).min(100.0) * direction.physical_sign()
}

/// Index delta implied by a release in `direction`: +1 advances, -1
/// retreats.
///
/// Vertical galleries advance upward regardless of reading order.
/// Horizontal galleries advance leftward, mirrored under RTL. A direction
/// off the configured slide axis moves nothing and returns 0.
pub fn swipe_direction_sign(
    direction: SwipeDirection,
    is_rtl: bool,
    slide_vertically: bool,
) -> isize {
    if slide_vertically {
        match direction {
            SwipeDirection::Up => 1,
            SwipeDirection::Down => -1,
            SwipeDirection::Left | SwipeDirection::Right => 0,
        }
    } else {
        let sign = match direction {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => -1,
            SwipeDirection::Up | SwipeDirection::Down => return 0,
        };
        if is_rtl {
            -sign
        } else {
            sign
        }
    }
}

/// Whether the accumulated offset clears the distance threshold (strict).
pub fn is_sufficient_swipe(offset_percent: f32, threshold_percent: f32) -> bool {
    offset_percent.abs() > threshold_percent
}

/// Whether the release reads as a flick: fast enough, and on the slide
/// axis. A vertical flick never advances a horizontal gallery and vice
/// versa.
pub fn is_flick_swipe(
    velocity: f32,
    flick_threshold: f32,
    direction: SwipeDirection,
    slide_vertically: bool,
) -> bool {
    let slide_axis = if slide_vertically {
        Axis::Vertical
    } else {
        Axis::Horizontal
    };
    velocity > flick_threshold && direction.axis() == slide_axis
}

/// Classified outcome of a released gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeVerdict {
    /// Index delta of the gesture: +1 advances, -1 retreats, 0 for a
    /// gesture that never left the dead zone or ran off-axis.
    pub direction_sign: isize,
    /// The offset cleared the distance threshold.
    pub is_sufficient_swipe: bool,
    /// The release velocity cleared the flick threshold on the slide axis.
    pub is_flick: bool,
    /// Final accumulated offset in percent, for duration shaping.
    pub offset_percent: f32,
    /// Final velocity reading in px/ms, for duration shaping.
    pub velocity: f32,
}

impl SwipeVerdict {
    /// Verdict of a gesture that produced nothing to act on.
    fn still() -> Self {
        Self {
            direction_sign: 0,
            is_sufficient_swipe: false,
            is_flick: false,
            offset_percent: 0.0,
            velocity: 0.0,
        }
    }

    /// Whether this verdict should move the slide at all.
    pub fn triggers_move(&self) -> bool {
        self.direction_sign != 0 && (self.is_sufficient_swipe || self.is_flick)
    }
}

/// Per-gesture interpreter state.
///
/// The first sample whose displacement leaves the dead zone locks the
/// gesture to its axis; from then on cross-axis samples are ignored, which
/// keeps diagonal jitter from fighting the committed direction. A gesture
/// locked to the non-slide axis produces no offset (it belongs to whatever
/// scrolls that way), but still runs to completion so its samples don't
/// leak into the next gesture.
#[derive(Debug, Default)]
pub struct SwipeSession {
    locked_axis: Option<Axis>,
    offset_percent: f32,
    last_sample: Option<SwipeSample>,
}

impl SwipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one gesture tick. Returns the new live offset when the sample
    /// moved it, `None` when the sample was ignored (dead zone, cross-axis,
    /// or locked to the non-slide axis).
    ///
    /// Samples must arrive in gesture order: each offset supersedes the
    /// previous one.
    pub fn update(
        &mut self,
        sample: SwipeSample,
        gallery_width: f32,
        gallery_height: f32,
        config: &GalleryConfig,
    ) -> Option<f32> {
        let locked = match self.locked_axis {
            Some(axis) => axis,
            None => {
                if sample.abs_x.max(sample.abs_y) <= SWIPE_DEAD_ZONE {
                    return None;
                }
                let axis = if sample.abs_x >= sample.abs_y {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                };
                log::trace!("gesture locked to {:?}", axis);
                self.locked_axis = Some(axis);
                axis
            }
        };
        if sample.direction.axis() != locked {
            return None;
        }
        self.last_sample = Some(sample);

        let slide_axis = if config.slide_vertically {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        if locked != slide_axis {
            return None;
        }

        let offset = calculate_swipe_offset(
            sample.abs_x,
            sample.abs_y,
            gallery_width,
            gallery_height,
            sample.direction,
            config.slide_vertically,
        );
        self.offset_percent = offset;
        Some(offset)
    }

    /// Current live offset in percent.
    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    /// Concludes the gesture, classifying the final accumulated sample.
    pub fn release(self, config: &GalleryConfig) -> SwipeVerdict {
        let Some(sample) = self.last_sample else {
            return SwipeVerdict::still();
        };
        SwipeVerdict {
            direction_sign: swipe_direction_sign(
                sample.direction,
                config.is_rtl,
                config.slide_vertically,
            ),
            is_sufficient_swipe: is_sufficient_swipe(self.offset_percent, config.swipe_threshold),
            is_flick: is_flick_swipe(
                sample.velocity,
                config.flick_threshold,
                sample.direction,
                config.slide_vertically,
            ),
            offset_percent: self.offset_percent,
            velocity: sample.velocity,
        }
    }
}

#[cfg(test)]
#[path = "tests/swipe_tests.rs"]
mod tests;
