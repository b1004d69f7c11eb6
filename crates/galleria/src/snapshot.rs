//! Immutable render snapshot.

use galleria_animation::TransitionSpec;
use galleria_core::SlideTransform;

/// Everything the rendering layer needs to paint one frame of the gallery.
///
/// Rebuilt on demand from the engine's state; a retained-mode UI diffs
/// consecutive snapshots, an immediate-mode UI just draws the latest one.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySnapshot {
    /// Index of the slide to present as current.
    pub current_index: usize,
    /// Index held before the last committed move.
    pub previous_index: usize,
    /// Whether a slide transition is in flight.
    pub is_transitioning: bool,
    /// Transform for each real slide, by logical index.
    pub slides: Vec<SlideTransform>,
    /// Thumbnail track translate along its axis, in pixels.
    pub thumbs_translate_px: f32,
    /// Duration and easing of the most recent visual move.
    pub transition: TransitionSpec,
}

impl GallerySnapshot {
    /// Transform of the current slide.
    pub fn current_slide(&self) -> Option<&SlideTransform> {
        self.slides.get(self.current_index)
    }
}
