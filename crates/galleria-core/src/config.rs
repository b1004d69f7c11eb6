//! Per-gallery configuration.

/// Immutable configuration for one gallery instance.
///
/// Thresholds are fixed at construction; changing behavior at runtime means
/// rebuilding the gallery around a new config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryConfig {
    /// Swipe distance, as a percentage of the viewport, that a gesture must
    /// exceed (strictly) for the release to count as a full swipe.
    pub swipe_threshold: f32,
    /// Release velocity in px/ms above which a short gesture still advances
    /// the slide (a flick).
    pub flick_threshold: f32,
    /// Duration of the slide transition animation in milliseconds. Also the
    /// width of the user-move cooldown window.
    pub slide_duration_ms: u64,
    /// Wraparound navigation past the first/last slide.
    pub infinite: bool,
    /// Right-to-left reading order. Mirrors slide positions and swaps which
    /// boundary blocks a horizontal move.
    pub is_rtl: bool,
    /// Slide along the vertical axis instead of the horizontal one.
    pub slide_vertically: bool,
    /// Pixels of thumbnail-track travel per unit of release velocity.
    pub momentum_multiplier: f32,
    /// Cap on the thumbnail fling deceleration duration in milliseconds.
    pub max_momentum_duration_ms: u64,
}

impl GalleryConfig {
    /// Stock configuration: 30% swipe threshold, 0.4 px/ms flick threshold,
    /// 450ms slides, infinite wraparound, horizontal LTR.
    pub fn new() -> Self {
        Self {
            swipe_threshold: 30.0,
            flick_threshold: 0.4,
            slide_duration_ms: 450,
            infinite: true,
            is_rtl: false,
            slide_vertically: false,
            momentum_multiplier: 150.0,
            max_momentum_duration_ms: 700,
        }
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn with_vertical(mut self, slide_vertically: bool) -> Self {
        self.slide_vertically = slide_vertically;
        self
    }

    pub fn with_slide_duration(mut self, duration_ms: u64) -> Self {
        self.slide_duration_ms = duration_ms;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_flick_threshold(mut self, threshold: f32) -> Self {
        self.flick_threshold = threshold;
        self
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new()
    }
}
