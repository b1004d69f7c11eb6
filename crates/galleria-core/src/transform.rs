//! Slide transform calculator.
//!
//! Pure functions from `(slide_index, GalleryState, GalleryConfig)` to a
//! transform descriptor. Positions are expressed in percent of the viewport
//! along the slide axis; the rendering layer turns them into CSS transforms,
//! canvas offsets or whatever else it paints with.

use crate::config::GalleryConfig;
use crate::direction::SwipeDirection;
use crate::state::GalleryState;

/// Position and visibility of one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    /// Signed offset from the viewport origin, in percent of the viewport.
    pub offset_percent: f32,
    /// Whether the slide should be painted at all.
    pub visible: bool,
}

/// Computes the transform for the slide at `slide_index`.
pub fn slide_transform(
    slide_index: usize,
    state: &GalleryState,
    config: &GalleryConfig,
) -> SlideTransform {
    let offset_percent = if config.infinite && state.total_slides == 2 {
        two_slide_offset(slide_index, state)
    } else {
        base_offset(slide_index, state, config)
    };
    SlideTransform {
        offset_percent,
        visible: is_slide_visible(slide_index, state),
    }
}

/// General-case slide position.
///
/// Each slide sits 100% per index step from the current one, mirrored for
/// RTL, shifted by the live gesture offset. With wraparound enabled the
/// first and last slides are pulled adjacent to each other so the seam
/// never shows a gap.
fn base_offset(slide_index: usize, state: &GalleryState, config: &GalleryConfig) -> f32 {
    let rtl_sign = if config.is_rtl { -1.0 } else { 1.0 };
    let offset = state.current_slide_offset;
    let last = state.last_index();

    if config.infinite && state.total_slides > 2 {
        if state.current_index == 0 && slide_index == last {
            // Last slide waits immediately left of the first.
            return -100.0 * rtl_sign + offset;
        }
        if state.current_index == last && slide_index == 0 {
            // First slide waits immediately right of the last.
            return 100.0 * rtl_sign + offset;
        }
    }

    let steps = slide_index as f32 - state.current_index as f32;
    100.0 * steps * rtl_sign + offset
}

/// Dedicated position function for a two-slide wraparound gallery.
///
/// With only two slides there is no third slide to wrap through, so plain
/// modular positioning would teleport the off-screen slide across the
/// viewport mid-animation. While a gesture is live the off-screen slide
/// follows the side implied by the offset sign; once the offset settles the
/// recorded swipe side decides the resting position, which keeps the
/// snap-back animation from flashing the wrong slide.
fn two_slide_offset(slide_index: usize, state: &GalleryState) -> f32 {
    let offset = state.current_slide_offset;
    let current = state.current_index;
    let previous = state.previous_index;
    let index_changed = current != previous;
    let first_is_next = slide_index == 0 && current == 1;
    let second_is_next = slide_index == 1 && current == 0;
    let settled = offset == 0.0;

    let mut translate = -100.0 * current as f32 + 100.0 * slide_index as f32 + offset;

    // Mid-gesture: the revealed slide tracks the finger's side.
    if offset > 0.0 && first_is_next {
        translate = -100.0 + offset;
    } else if offset < 0.0 && second_is_next {
        translate = 100.0 + offset;
    }

    if index_changed {
        // The slide that just became previous rests on the side it was
        // approached from.
        if previous == 0
            && slide_index == 0
            && settled
            && state.last_swipe_direction == Some(SwipeDirection::Left)
        {
            translate = 100.0;
        } else if previous == 1
            && slide_index == 1
            && settled
            && state.last_swipe_direction == Some(SwipeDirection::Right)
        {
            translate = -100.0;
        }
    } else {
        // Cancelled gesture: the hidden slide stays on the side it was
        // revealed from.
        if settled && first_is_next && state.last_swipe_direction == Some(SwipeDirection::Right) {
            translate = 100.0;
        } else if settled
            && second_is_next
            && state.last_swipe_direction == Some(SwipeDirection::Left)
        {
            translate = -100.0;
        }
    }

    translate
}

/// Whether the slide at `slide_index` should be painted.
///
/// During a transition only the outgoing and incoming slides show, except
/// for multi-index jumps (thumbnail clicks) where the slides crossed in
/// between stay visible so the jump reads as movement; the absolute first
/// and last slides still hide there to avoid a wraparound flash.
pub fn is_slide_visible(slide_index: usize, state: &GalleryState) -> bool {
    !slide_is_transitioning(slide_index, state)
        || (ignore_is_transitioning(state) && !is_first_or_last(slide_index, state))
}

fn slide_is_transitioning(slide_index: usize, state: &GalleryState) -> bool {
    state.is_transitioning
        && !(slide_index == state.previous_index || slide_index == state.current_index)
}

/// A transition spanning more than one step, other than a first↔last
/// wraparound, wants the in-between slides visible.
fn ignore_is_transitioning(state: &GalleryState) -> bool {
    let last = state.last_index();
    let multi_step = state.previous_index.abs_diff(state.current_index) > 1;
    let first_to_last = state.previous_index == 0 && state.current_index == last;
    let last_to_first = state.previous_index == last && state.current_index == 0;
    multi_step && !first_to_last && !last_to_first
}

fn is_first_or_last(slide_index: usize, state: &GalleryState) -> bool {
    slide_index == 0 || slide_index == state.last_index()
}

/// Thumbnail-bar translate keeping the current slide's thumbnail in view.
///
/// The track moves a constant fraction of its scrollable range per index
/// step. Returns 0.0 when there is nothing to scroll: a single-item gallery
/// (the per-index fraction would divide by zero) or content that already
/// fits the wrapper.
pub fn thumbs_translate(
    current_index: usize,
    total_slides: usize,
    scroll_size: f32,
    wrapper_size: f32,
) -> f32 {
    if total_slides <= 1 || scroll_size <= wrapper_size {
        return 0.0;
    }
    let total_scroll = scroll_size - wrapper_size;
    let per_index = total_scroll / (total_slides - 1) as f32;
    -(current_index as f32 * per_index)
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
