//! Shared gesture constants.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor; the fixed values here work
//! well for typical desktop/mobile displays.

/// Dead zone in logical pixels.
///
/// Cumulative displacement below this leaves the gesture uncommitted: no
/// axis lock and no slide offset. Keeps finger jitter from starting a swipe
/// or locking the wrong axis.
///
/// 8.0 matches common platform touch-slop conventions (Android uses ~8dp
/// for ViewConfiguration.TOUCH_SLOP).
pub const SWIPE_DEAD_ZONE: f32 = 8.0;

/// Ceiling on reported swipe velocity, in logical pixels per millisecond.
///
/// Matches the common platform maximum fling velocity (8000 px/sec) on a
/// baseline density. Touch drivers occasionally report a wild last sample;
/// the cap keeps one bad reading from producing an absurd flick.
pub const MAX_SWIPE_VELOCITY: f32 = 8.0;
