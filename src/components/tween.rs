//! Scalar tweens for UI animation.
//!
//! A [`Tween`] interpolates a single `f32` from `from` to `to` over
//! `duration` seconds using an [`Easing`] curve. Menu animations (title
//! fade-in, title scale-in) are built from these.
//!
//! Tweens play once and stop at their end value.

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Slow start and end (quadratic).
    QuadInOut,
}

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One-shot interpolation of an `f32`.
#[derive(Clone, Debug)]
pub struct Tween {
    /// Starting value.
    pub from: f32,
    /// Ending value.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Current time within the tween.
    pub time: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Tween {
            from,
            to,
            duration,
            easing: Easing::Linear,
            time: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by `dt` seconds, saturating at `duration`.
    pub fn advance(&mut self, dt: f32) {
        self.time = (self.time + dt).min(self.duration);
    }

    /// Normalized time in [0, 1]. A zero-length tween is always complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        lerp_f32(self.from, self.to, ease(self.easing, self.progress()))
    }

    pub fn finished(&self) -> bool {
        self.time >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== EASE TESTS ====================

    #[test]
    fn test_ease_endpoints() {
        for e in [Easing::Linear, Easing::QuadInOut] {
            assert!(approx_eq(ease(e, 0.0), 0.0));
            assert!(approx_eq(ease(e, 1.0), 1.0));
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        assert!(approx_eq(ease(Easing::Linear, -1.0), 0.0));
        assert!(approx_eq(ease(Easing::Linear, 2.0), 1.0));
    }

    #[test]
    fn test_quad_in_out_midpoint_and_quarters() {
        assert!(approx_eq(ease(Easing::QuadInOut, 0.5), 0.5));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.25), 0.125));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.75), 0.875));
    }

    #[test]
    fn test_lerp_f32() {
        assert!(approx_eq(lerp_f32(0.5, 1.0, 0.5), 0.75));
    }

    // ==================== TWEEN TESTS ====================

    #[test]
    fn test_tween_starts_at_from() {
        let tween = Tween::new(0.5, 1.0, 2.0).with_easing(Easing::QuadInOut);
        assert!(approx_eq(tween.value(), 0.5));
        assert!(!tween.finished());
    }

    #[test]
    fn test_tween_advance_saturates() {
        let mut tween = Tween::new(0.0, 1.0, 2.0).with_easing(Easing::QuadInOut);
        tween.advance(1.0);
        assert!(approx_eq(tween.value(), 0.5));
        tween.advance(5.0);
        assert!(tween.finished());
        assert!(approx_eq(tween.time, 2.0));
        assert!(approx_eq(tween.value(), 1.0));
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let tween = Tween::new(3.0, 7.0, 0.0);
        assert!(tween.finished());
        assert!(approx_eq(tween.value(), 7.0));
    }
}
