//! Core of the galleria carousel engine.
//!
//! Pure slide-position math plus the one stateful piece of the system, the
//! navigation state machine:
//! - [`navigation`]: target/display-index computation and [`SlideNavigator`],
//!   the sole owner and mutator of [`GalleryState`]
//! - [`transform`]: per-slide position and visibility, thumbnail-bar sync
//! - [`clock`]: deadline scheduling on an explicit millisecond timeline
//! - [`slideshow`]: interval-driven auto-advance
//!
//! Nothing in this crate touches a window, a DOM or wall-clock time; the
//! embedder feeds gesture results in and paints the computed offsets out.

pub mod clock;
pub mod config;
pub mod direction;
pub mod events;
pub mod navigation;
pub mod slideshow;
pub mod state;
pub mod transform;

pub use clock::{TimerRegistration, TransitionClock};
pub use config::GalleryConfig;
pub use direction::{Axis, SwipeDirection};
pub use events::{ListenerId, SlideCommitted};
pub use navigation::{
    can_slide, can_slide_left, can_slide_right, compute_slide_target,
    compute_target_display_index, display_sequence, has_next, has_previous, total_display_slides,
    DisplaySlide, ReleaseOutcome, SlideNavigator, TRANSITION_GRACE_MS,
};
pub use slideshow::Slideshow;
pub use state::GalleryState;
pub use transform::{is_slide_visible, slide_transform, thumbs_translate, SlideTransform};
