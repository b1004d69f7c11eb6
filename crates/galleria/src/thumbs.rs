//! Thumbnail track state.

use galleria_animation::{calculate_momentum, MomentumInput, MomentumResult};
use galleria_core::{thumbs_translate, SwipeDirection};

/// Scroll state of the thumbnail strip.
///
/// The track follows the current slide by default and scrolls freely under
/// its own gestures; both paths land in the same clamped translate. Sizes
/// are measured by the embedder and pushed in whenever they change.
#[derive(Debug)]
pub struct ThumbnailTrack {
    translate: f32,
    scroll_size: f32,
    wrapper_size: f32,
    total_slides: usize,
    vertical: bool,
}

impl ThumbnailTrack {
    pub fn new(total_slides: usize, vertical: bool) -> Self {
        Self {
            translate: 0.0,
            scroll_size: 0.0,
            wrapper_size: 0.0,
            total_slides,
            vertical,
        }
    }

    /// Current translate along the track axis, in pixels.
    pub fn translate(&self) -> f32 {
        self.translate
    }

    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Updates the measured content and wrapper sizes.
    pub fn set_metrics(&mut self, scroll_size: f32, wrapper_size: f32) {
        self.scroll_size = scroll_size;
        self.wrapper_size = wrapper_size;
        self.translate = self.clamp(self.translate);
    }

    /// Updates the slide count the sync fraction is computed over.
    pub fn set_total_slides(&mut self, total_slides: usize) {
        self.total_slides = total_slides;
    }

    /// Scrolls the track so the given slide's thumbnail stays in view.
    pub fn sync_to_index(&mut self, index: usize) {
        self.translate = thumbs_translate(
            index,
            self.total_slides,
            self.scroll_size,
            self.wrapper_size,
        );
    }

    /// Applies a live drag delta, clamped to the scrollable range.
    /// Returns the amount actually applied.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let target = self.clamp(self.translate + delta);
        let applied = target - self.translate;
        self.translate = target;
        applied
    }

    /// Concludes a drag with a fling: computes the momentum target, adopts
    /// it as the new translate and returns the full result for the
    /// rendering layer's deceleration animation.
    pub fn fling(
        &mut self,
        velocity: f32,
        direction: SwipeDirection,
        slide_duration_ms: u64,
        momentum_multiplier: f32,
    ) -> MomentumResult {
        let input = MomentumInput::new(
            velocity,
            direction,
            self.vertical,
            self.translate,
            self.scroll_size,
            self.wrapper_size,
            slide_duration_ms,
        )
        .with_multiplier(momentum_multiplier);
        let result = calculate_momentum(&input);
        self.translate = result.target_translate;
        result
    }

    fn clamp(&self, translate: f32) -> f32 {
        if self.scroll_size <= self.wrapper_size {
            return translate.min(0.0);
        }
        translate.clamp(-(self.scroll_size - self.wrapper_size), 0.0)
    }
}
