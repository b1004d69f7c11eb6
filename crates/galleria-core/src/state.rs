//! Gallery state snapshot.

use crate::direction::SwipeDirection;

/// Snapshot of the gallery's navigation state.
///
/// This is a pure data struct. It is owned and mutated exclusively by
/// [`SlideNavigator`](crate::navigation::SlideNavigator); everything else
/// (transform math, render layers) reads copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryState {
    /// Index of the slide currently shown (or being transitioned to).
    pub current_index: usize,
    /// Index held immediately before the last committed transition.
    pub previous_index: usize,
    /// Whether a slide transition is in flight. Moves requested while this
    /// is set are dropped, not queued.
    pub is_transitioning: bool,
    /// Live gesture displacement as a signed percentage of the viewport.
    /// Zero outside of an active gesture.
    pub current_slide_offset: f32,
    /// Number of real (non-clone) slides.
    pub total_slides: usize,
    /// Side the last nonzero gesture offset pointed at. Read by the
    /// two-slide transform to decide which side the off-screen slide rests
    /// on once the offset settles back to zero.
    pub last_swipe_direction: Option<SwipeDirection>,
}

impl GalleryState {
    /// Fresh state at the given start index.
    ///
    /// The index is expected to be already validated by the navigator.
    pub(crate) fn new(total_slides: usize, start_index: usize) -> Self {
        Self {
            current_index: start_index,
            previous_index: start_index,
            is_transitioning: false,
            current_slide_offset: 0.0,
            total_slides,
            last_swipe_direction: None,
        }
    }

    /// Index of the last real slide, or 0 for an empty gallery.
    pub fn last_index(&self) -> usize {
        self.total_slides.saturating_sub(1)
    }
}
