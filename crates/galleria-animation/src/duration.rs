//! Velocity-shaped transition durations.

/// Floor for swipe-driven transitions; anything shorter reads as a teleport.
pub const MIN_SWIPE_DURATION_MS: u64 = 80;

/// Duration for the slide animation following a released gesture, in ms.
///
/// The slide still has to cover the remaining distance: the rest of the
/// viewport when the move changes index, or the accumulated offset when it
/// snaps back. Dividing that distance (in pixels, via
/// `gallery_dimension_px`) by the release velocity gives a duration that
/// continues at the finger's speed, clamped into
/// [`MIN_SWIPE_DURATION_MS`, `base_duration_ms`]. A still release falls
/// back to the base duration.
pub fn compute_velocity_duration(
    final_offset_percent: f32,
    target_index: usize,
    current_index: usize,
    velocity: f32,
    base_duration_ms: u64,
    gallery_dimension_px: f32,
) -> u64 {
    if velocity <= 0.0 {
        return base_duration_ms;
    }
    let remaining_percent = if target_index != current_index {
        100.0 - final_offset_percent.abs()
    } else {
        final_offset_percent.abs()
    };
    let remaining_px = remaining_percent.clamp(0.0, 100.0) / 100.0 * gallery_dimension_px;
    let natural_ms = (remaining_px / velocity).round() as u64;
    natural_ms.clamp(MIN_SWIPE_DURATION_MS.min(base_duration_ms), base_duration_ms)
}
