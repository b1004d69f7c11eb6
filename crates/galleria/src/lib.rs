//! galleria: a framework-independent carousel computation engine.
//!
//! Given gesture input (direction, distance, velocity) and gallery state
//! (current index, item count, reading order, wraparound mode), the engine
//! computes the next slide index, a transform offset for every slide, and
//! the thumbnail-track scroll/momentum offset. No rendering, no DOM, no
//! windowing: any UI layer feeds measured sizes and pointer input in and
//! paints the computed values out.
//!
//! The [`Gallery`] controller is the everyday entry point:
//!
//! ```
//! use galleria::{Gallery, GalleryConfig};
//!
//! let mut gallery = Gallery::new(GalleryConfig::new(), 5);
//! gallery.set_viewport(800.0, 600.0);
//!
//! // A leftward drag past the 30% threshold, released at 400ms.
//! gallery.pointer_down(700.0, 300.0);
//! gallery.pointer_move_at(200, 500.0, 300.0);
//! let release = gallery.pointer_up_at(400, 380.0, 300.0).unwrap();
//! assert!(release.outcome.moved);
//!
//! // Drive the timeline; the transition commits after its grace period.
//! gallery.advance_to(1_000);
//! assert_eq!(gallery.current_index(), 1);
//! ```
//!
//! The layered crates underneath remain usable on their own:
//! `galleria-core` (navigation and transform math), `galleria-gesture`
//! (swipe interpretation), `galleria-animation` (easing, durations,
//! momentum).

pub mod gallery;
pub mod snapshot;
pub mod thumbs;

pub use gallery::{Gallery, ReleaseSummary, DEFAULT_SLIDE_INTERVAL_MS};
pub use snapshot::GallerySnapshot;
pub use thumbs::ThumbnailTrack;

pub use galleria_animation::{
    calculate_momentum, compute_velocity_duration, Easing, MomentumInput, MomentumResult,
    TransitionSpec,
};
pub use galleria_core::{
    compute_slide_target, compute_target_display_index, display_sequence, slide_transform,
    thumbs_translate, DisplaySlide, GalleryConfig, GalleryState, ListenerId, SlideCommitted,
    SlideTransform, SwipeDirection, TransitionClock,
};
pub use galleria_gesture::{PointerTracker, SwipeSample, SwipeSession, SwipeVerdict};
