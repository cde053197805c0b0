//! Timing functions (easing curves) for animations.
//!
//! Timing functions control the rate of change during an animation, allowing
//! for natural-feeling motion rather than linear interpolation.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//!
//! ## Advanced Options
//!
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Spring`] - Physics-based spring (can overshoot)
//!
//! ## Example
//!
//! ```
//! use gallery_header::animation::{TimingFunction, Transition};
//!
//! let page = Transition::new(300.0, TimingFunction::EaseInOut);
//! assert_eq!(page.duration_ms, 300.0);
//! ```

use super::spring::SpringConfig;
use super::{Animatable, Simulation};

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Spring physics simulation (can overshoot)
    Spring(SpringConfig),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor (can exceed [0, 1] for overshoot)
    ///
    /// Note: Spring animations are solved by [`super::SpringSimulation`] in
    /// real elapsed time. This method returns t as fallback for springs.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Spring(_) => t,
        }
    }
}

/// Step used to differentiate easing curves numerically.
const VELOCITY_PROBE: f32 = 1e-3;

/// Duration-based animation from `from` to `to` along an easing curve.
#[derive(Clone, Debug)]
pub struct TweenSimulation {
    from: f32,
    to: f32,
    duration_secs: f32,
    timing: TimingFunction,
}

impl TweenSimulation {
    pub fn new(from: f32, to: f32, duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            from,
            to,
            duration_secs: (duration_ms / 1000.0).max(0.0),
            timing,
        }
    }

    fn progress(&self, time: f32) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (time / self.duration_secs).clamp(0.0, 1.0)
    }
}

impl Simulation for TweenSimulation {
    fn position(&self, time: f32) -> f32 {
        if self.is_done(time) {
            return self.to;
        }
        let eased = self.timing.evaluate(self.progress(time));
        f32::lerp(&self.from, &self.to, eased)
    }

    fn velocity(&self, time: f32) -> f32 {
        if self.is_done(time) {
            return 0.0;
        }
        let u = self.progress(time);
        let lo = (u - VELOCITY_PROBE).max(0.0);
        let hi = (u + VELOCITY_PROBE).min(1.0);
        let slope = (self.timing.evaluate(hi) - self.timing.evaluate(lo)) / (hi - lo);
        (self.to - self.from) * slope / self.duration_secs
    }

    fn is_done(&self, time: f32) -> bool {
        time >= self.duration_secs
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic bezier curve evaluation
/// Simplified implementation assuming x1, x2 are in [0, 1]
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Use Newton-Raphson to solve for t given x
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = cubic_bezier_x(current_t, x1, x2);
        let current_slope = cubic_bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-6 {
            break;
        }
        current_t -= (current_x - t) / current_slope;
    }
    cubic_bezier_y(current_t, y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_tween_endpoints() {
        let tween = TweenSimulation::new(0.0, 3.0, 300.0, TimingFunction::EaseInOut);
        assert_eq!(tween.position(0.0), 0.0);
        assert!(!tween.is_done(0.299));
        assert!(tween.is_done(0.3));
        assert_eq!(tween.position(0.3), 3.0);
        assert_eq!(tween.velocity(1.0), 0.0);
    }

    #[test]
    fn test_tween_linear_velocity() {
        let tween = TweenSimulation::new(1.0, 2.0, 500.0, TimingFunction::Linear);
        assert!((tween.position(0.25) - 1.5).abs() < 1e-5);
        assert!((tween.velocity(0.25) - 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_zero_duration_tween_is_done() {
        let tween = TweenSimulation::new(1.0, 2.0, 0.0, TimingFunction::Linear);
        assert!(tween.is_done(0.0));
        assert_eq!(tween.position(0.0), 2.0);
    }
}
