//! Easing curves for slide and thumbnail transitions.

/// Easing descriptors emitted by the engine.
///
/// The rendering layer maps these onto whatever its animation system
/// understands (CSS timing functions, interpolators); [`Easing::transform`]
/// evaluates the curve directly for layers that animate by sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Standard ease-out, gentle stop.
    EaseOut,
    /// Cubic ease-out, pronounced deceleration for momentum flings.
    EaseOutCubic,
}

impl Easing {
    /// Applies the curve to a linear fraction in [0, 1].
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseOutCubic => cubic_bezier(0.33, 1.0, 0.68, 1.0, fraction),
        }
    }
}

/// Cubic bezier evaluation for easing curves.
///
/// Solves for the parametric value matching the x fraction with a few
/// Newton-Raphson steps, falling back to bisection when the derivative
/// degenerates, then samples the y polynomial at that parameter.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = curve(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let derivative = slope(ax, bx, cx, t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    if !solved {
        let mut low = 0.0;
        let mut high = 1.0;
        t = fraction;
        for _ in 0..16 {
            let error = curve(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    curve(ay, by, cy, t)
}

/// Duration plus easing for one visual transition. Consumed once by the
/// rendering layer, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TransitionSpec {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// An instant, no-animation spec.
    pub fn none() -> Self {
        Self {
            duration_ms: 0,
            easing: Easing::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.0), 0.0);
        assert_eq!(Easing::Linear.transform(0.5), 0.5);
        assert_eq!(Easing::Linear.transform(1.0), 1.0);
    }

    #[test]
    fn curves_hit_their_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseOutCubic] {
            assert!(easing.transform(0.0).abs() < 0.01, "{:?} start", easing);
            assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "{:?} end", easing);
        }
    }

    #[test]
    fn ease_out_front_loads_the_motion() {
        // An ease-out curve covers more than half the distance by halftime.
        assert!(Easing::EaseOut.transform(0.5) > 0.5);
        assert!(Easing::EaseOutCubic.transform(0.5) > 0.5);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::EaseOut, Easing::EaseOutCubic] {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = easing.transform(step as f32 / 100.0);
                assert!(
                    value >= previous - 1e-4,
                    "{:?} dipped at step {}",
                    easing,
                    step
                );
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(Easing::EaseOut.transform(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.transform(1.5), 1.0);
    }
}
