//! Closed-form damped spring simulation.
//!
//! A spring is solved analytically for one of three regimes chosen from the
//! sign of `damping² - 4·mass·stiffness`, so `position(t)` can be sampled at
//! any elapsed time without integrating frame by frame.

use crate::error::{Error, Result};

use super::Simulation;

/// Physical parameters of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (must be positive)
    pub mass: f32,
    /// Stiffness of the spring (must be positive)
    pub stiffness: f32,
    /// Damping coefficient (must not be negative)
    pub damping: f32,
}

impl SpringConfig {
    pub const fn new(mass: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Derive the damping coefficient from a damping ratio.
    ///
    /// A ratio of 1.0 is critically damped, below 1.0 oscillates and above
    /// 1.0 approaches the target without overshoot.
    pub fn with_damping_ratio(mass: f32, stiffness: f32, ratio: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping: ratio * 2.0 * (mass * stiffness).sqrt(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = self.mass.is_finite()
            && self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass > 0.0
            && self.stiffness > 0.0
            && self.damping >= 0.0;
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidSpring {
                mass: self.mass,
                stiffness: self.stiffness,
                damping: self.damping,
            })
        }
    }

    pub fn regime(&self) -> DampingRegime {
        let cmk = self.damping * self.damping - 4.0 * self.mass * self.stiffness;
        if cmk == 0.0 {
            DampingRegime::Critical
        } else if cmk > 0.0 {
            DampingRegime::Overdamped
        } else {
            DampingRegime::Underdamped
        }
    }
}

impl Default for SpringConfig {
    /// Slightly overdamped spring used for header and page settling
    fn default() -> Self {
        Self::with_damping_ratio(0.5, 500.0, 1.1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    Critical,
    Overdamped,
    Underdamped,
}

/// Thresholds under which a simulation counts as settled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub distance: f32,
    /// Not consulted by the settle check; kept for simulations that need it.
    pub time: f32,
    pub velocity: f32,
}

impl Tolerance {
    pub const DEFAULT: Self = Self {
        distance: 0.001,
        time: 0.001,
        velocity: 0.001,
    };
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Displacement-from-target solution of the spring equation.
#[derive(Clone, Copy, Debug)]
enum Solution {
    Critical { r: f32, c1: f32, c2: f32 },
    Overdamped { r1: f32, r2: f32, c1: f32, c2: f32 },
    Underdamped { w: f32, r: f32, c1: f32, c2: f32 },
}

impl Solution {
    fn new(spring: &SpringConfig, displacement: f32, velocity: f32) -> Self {
        let SpringConfig {
            mass,
            stiffness,
            damping,
        } = *spring;
        let cmk = damping * damping - 4.0 * mass * stiffness;
        match spring.regime() {
            DampingRegime::Critical => {
                let r = -damping / (2.0 * mass);
                let denominator = r * displacement;
                let c2 = if denominator == 0.0 {
                    0.0
                } else {
                    velocity / denominator
                };
                Solution::Critical {
                    r,
                    c1: displacement,
                    c2,
                }
            }
            DampingRegime::Overdamped => {
                let root = cmk.sqrt();
                let r1 = (-damping - root) / (2.0 * mass);
                let r2 = (-damping + root) / (2.0 * mass);
                let c2 = (velocity - r1 * displacement) / (r2 - r1);
                Solution::Overdamped {
                    r1,
                    r2,
                    c1: displacement - c2,
                    c2,
                }
            }
            DampingRegime::Underdamped => {
                let w = (4.0 * mass * stiffness - damping * damping).sqrt() / (2.0 * mass);
                let r = -damping / (2.0 * mass);
                Solution::Underdamped {
                    w,
                    r,
                    c1: displacement,
                    c2: (velocity - r * displacement) / w,
                }
            }
        }
    }

    fn x(&self, time: f32) -> f32 {
        match *self {
            Solution::Critical { r, c1, c2 } => (c1 + c2 * time) * (r * time).exp(),
            Solution::Overdamped { r1, r2, c1, c2 } => {
                c1 * (r1 * time).exp() + c2 * (r2 * time).exp()
            }
            Solution::Underdamped { w, r, c1, c2 } => {
                (r * time).exp() * (c1 * (w * time).cos() + c2 * (w * time).sin())
            }
        }
    }

    fn dx(&self, time: f32) -> f32 {
        match *self {
            Solution::Critical { r, c1, c2 } => {
                let power = (r * time).exp();
                r * (c1 + c2 * time) * power + c2 * power
            }
            Solution::Overdamped { r1, r2, c1, c2 } => {
                c1 * r1 * (r1 * time).exp() + c2 * r2 * (r2 * time).exp()
            }
            Solution::Underdamped { w, r, c1, c2 } => {
                let power = (r * time).exp();
                let cosine = (w * time).cos();
                let sine = (w * time).sin();
                power * (c2 * w * cosine - c1 * w * sine) + r * power * (c2 * sine + c1 * cosine)
            }
        }
    }

    /// Time after which `|x|` and `|dx|` stay below the tolerance, derived from
    /// bounds of the form `amplitude * e^(-rate * t)`. Infinite for an undamped
    /// spring.
    fn envelope_settle_time(&self, tolerance: &Tolerance) -> f32 {
        let (x_amplitude, v_amplitude, rate) = match *self {
            Solution::Critical { r, c1, c2 } => {
                // t * e^(r t / 2) peaks at 2 / (e |r|)
                let peak = 2.0 / (std::f32::consts::E * r.abs());
                (
                    c1.abs() + c2.abs() * peak,
                    (c2 + r * c1).abs() + (r * c2).abs() * peak,
                    -r / 2.0,
                )
            }
            Solution::Overdamped { r1, r2, c1, c2 } => (
                c1.abs() + c2.abs(),
                (c1 * r1).abs() + (c2 * r2).abs(),
                -(r1.max(r2)),
            ),
            Solution::Underdamped { w, r, c1, c2 } => {
                let amplitude = c1.hypot(c2);
                (amplitude, amplitude * r.hypot(w), -r)
            }
        };
        if !(rate > 0.0 && rate.is_finite()) {
            return f32::INFINITY;
        }
        let crossing = |amplitude: f32, limit: f32| {
            if amplitude < limit {
                0.0
            } else {
                (amplitude / limit).ln() / rate
            }
        };
        let time = crossing(x_amplitude, tolerance.distance)
            .max(crossing(v_amplitude, tolerance.velocity));
        if time.is_finite() {
            time + SETTLE_SCAN_STEP
        } else {
            f32::INFINITY
        }
    }
}

/// Resolution of the settle-time scan, in seconds.
const SETTLE_SCAN_STEP: f32 = 0.001;
/// Length of the settle-time scan. Slower springs settle at the time their
/// decay envelope guarantees.
const MAX_SETTLE_SECS: f32 = 10.0;

/// Spring moving from `start` towards `end`.
///
/// Times are seconds elapsed since the simulation was created; velocities are
/// in units per second. Once the spring first comes within tolerance it is
/// reported as done for every later time.
#[derive(Clone, Debug)]
pub struct SpringSimulation {
    spring: SpringConfig,
    start: f32,
    end: f32,
    initial_velocity: f32,
    tolerance: Tolerance,
    solution: Solution,
    settle_time: f32,
}

impl SpringSimulation {
    pub fn new(
        spring: SpringConfig,
        start: f32,
        end: f32,
        velocity: f32,
        tolerance: Tolerance,
    ) -> Self {
        let solution = Solution::new(&spring, start - end, velocity);
        let mut simulation = Self {
            spring,
            start,
            end,
            initial_velocity: velocity,
            tolerance,
            solution,
            settle_time: f32::INFINITY,
        };
        simulation.settle_time = simulation.first_settled_time();
        simulation
    }

    pub fn spring(&self) -> &SpringConfig {
        &self.spring
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }

    /// Time from which the spring counts as settled, or `None` for a spring
    /// that never settles (no damping).
    pub fn settle_time(&self) -> Option<f32> {
        self.settle_time.is_finite().then_some(self.settle_time)
    }

    fn within_tolerance(&self, time: f32) -> bool {
        self.solution.x(time).abs() < self.tolerance.distance
            && self.solution.dx(time).abs() < self.tolerance.velocity
    }

    fn first_settled_time(&self) -> f32 {
        let steps = (MAX_SETTLE_SECS / SETTLE_SCAN_STEP) as u32;
        (0..=steps)
            .map(|i| i as f32 * SETTLE_SCAN_STEP)
            .find(|&t| self.within_tolerance(t))
            .unwrap_or_else(|| self.solution.envelope_settle_time(&self.tolerance))
    }
}

impl Simulation for SpringSimulation {
    fn position(&self, time: f32) -> f32 {
        self.end + self.solution.x(time)
    }

    fn velocity(&self, time: f32) -> f32 {
        self.solution.dx(time)
    }

    fn is_done(&self, time: f32) -> bool {
        time >= self.settle_time
    }
}

/// Spring that pins its output to `end` once settled.
///
/// Without the clamp, a settled spring still drifts by sub-tolerance amounts,
/// which shows up as jitter on pixel-snapped output.
#[derive(Clone, Debug)]
pub struct ScrollSpringSimulation {
    inner: SpringSimulation,
}

impl ScrollSpringSimulation {
    pub fn new(
        spring: SpringConfig,
        start: f32,
        end: f32,
        velocity: f32,
        tolerance: Tolerance,
    ) -> Self {
        Self {
            inner: SpringSimulation::new(spring, start, end, velocity, tolerance),
        }
    }

    pub fn settle_time(&self) -> Option<f32> {
        self.inner.settle_time()
    }
}

impl Simulation for ScrollSpringSimulation {
    fn position(&self, time: f32) -> f32 {
        if self.inner.is_done(time) {
            self.inner.end()
        } else {
            self.inner.position(time)
        }
    }

    fn velocity(&self, time: f32) -> f32 {
        if self.inner.is_done(time) {
            0.0
        } else {
            self.inner.velocity(time)
        }
    }

    fn is_done(&self, time: f32) -> bool {
        self.inner.is_done(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRITICAL: SpringConfig = SpringConfig::new(1.0, 100.0, 20.0);
    const UNDERDAMPED: SpringConfig = SpringConfig::new(1.0, 100.0, 10.0);

    fn overdamped() -> SpringConfig {
        SpringConfig::default()
    }

    fn assert_monotonic_settling(sim: &dyn Simulation) {
        let mut settled = false;
        for i in 0..4000 {
            let t = i as f32 * 0.001;
            let done = sim.is_done(t);
            assert!(!(settled && !done), "settling reverted at t = {}", t);
            settled |= done;
        }
        assert!(settled, "spring never settled");
    }

    #[test]
    fn test_default_spring_parameters() {
        let spring = SpringConfig::default();
        assert_eq!(spring.mass, 0.5);
        assert_eq!(spring.stiffness, 500.0);
        let expected = 1.1 * 2.0 * (0.5f32 * 500.0).sqrt();
        assert!((spring.damping - expected).abs() < 1e-4);
        assert_eq!(spring.regime(), DampingRegime::Overdamped);
    }

    #[test]
    fn test_regimes() {
        assert_eq!(CRITICAL.regime(), DampingRegime::Critical);
        assert_eq!(UNDERDAMPED.regime(), DampingRegime::Underdamped);
    }

    #[test]
    fn test_validate() {
        assert!(SpringConfig::default().validate().is_ok());
        assert!(SpringConfig::new(0.0, 100.0, 1.0).validate().is_err());
        assert!(SpringConfig::new(1.0, -1.0, 1.0).validate().is_err());
        assert!(SpringConfig::new(1.0, 100.0, -0.5).validate().is_err());
        assert!(SpringConfig::new(1.0, 100.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_starts_at_start() {
        for spring in [CRITICAL, UNDERDAMPED, overdamped()] {
            let sim = SpringSimulation::new(spring, 812.0, 256.0, 0.0, Tolerance::DEFAULT);
            assert!((sim.position(0.0) - 812.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_overdamped_honours_initial_velocity() {
        let sim = SpringSimulation::new(overdamped(), 0.0, 1.0, 3.0, Tolerance::DEFAULT);
        assert!((sim.velocity(0.0) - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_underdamped_overshoots() {
        let sim = SpringSimulation::new(UNDERDAMPED, 0.0, 1.0, 0.0, Tolerance::DEFAULT);
        let max = (0..1000)
            .map(|i| sim.position(i as f32 * 0.001))
            .fold(f32::MIN, f32::max);
        assert!(max > 1.0, "underdamped spring should overshoot, max was {}", max);
    }

    #[test]
    fn test_overdamped_does_not_overshoot() {
        let sim = SpringSimulation::new(overdamped(), 812.0, 256.0, 0.0, Tolerance::DEFAULT);
        for i in 0..2000 {
            let x = sim.position(i as f32 * 0.001);
            assert!(x >= 256.0 - 1e-3 && x <= 812.0 + 1e-3, "x = {}", x);
        }
    }

    #[test]
    fn test_settling_is_monotonic() {
        for spring in [CRITICAL, UNDERDAMPED, overdamped()] {
            let sim = SpringSimulation::new(spring, 0.0, 1.0, 0.0, Tolerance::DEFAULT);
            assert_monotonic_settling(&sim);
            let clamped = ScrollSpringSimulation::new(spring, 0.0, 1.0, 0.0, Tolerance::DEFAULT);
            assert_monotonic_settling(&clamped);
        }
    }

    #[test]
    fn test_clamped_returns_exact_end_once_settled() {
        let sim = ScrollSpringSimulation::new(overdamped(), 812.0, 256.0, 0.0, Tolerance::DEFAULT);
        let settle = sim.settle_time().expect("spring settles");
        assert_eq!(sim.position(settle), 256.0);
        assert_eq!(sim.position(settle + 1.0), 256.0);
        assert_eq!(sim.velocity(settle + 1.0), 0.0);
        assert!(sim.position(0.0) > 256.0);
    }

    #[test]
    fn test_already_at_rest_settles_immediately() {
        let sim = ScrollSpringSimulation::new(CRITICAL, 3.0, 3.0, 0.0, Tolerance::DEFAULT);
        assert_eq!(sim.settle_time(), Some(0.0));
        assert!(sim.is_done(0.0));
        assert_eq!(sim.position(0.0), 3.0);
    }

    #[test]
    fn test_slow_spring_settles_past_scan_window() {
        let soft = SpringConfig::with_damping_ratio(1.0, 1.0, 1.1);
        assert!(soft.validate().is_ok());
        let sim = SpringSimulation::new(soft, 0.0, 1.0, 0.0, Tolerance::DEFAULT);
        let settle = sim.settle_time().expect("damped spring settles");
        assert!(settle > MAX_SETTLE_SECS && settle < 40.0, "settle = {}", settle);
        assert!(!sim.is_done(5.0));
        assert!(sim.is_done(40.0));
        assert!((sim.position(settle) - 1.0).abs() < Tolerance::DEFAULT.distance);
        assert!(sim.velocity(settle).abs() < Tolerance::DEFAULT.velocity);

        let clamped = ScrollSpringSimulation::new(soft, 0.0, 1.0, 0.0, Tolerance::DEFAULT);
        assert_eq!(clamped.position(40.0), 1.0);
        assert_eq!(clamped.velocity(40.0), 0.0);
    }

    #[test]
    fn test_slow_underdamped_and_critical_springs_settle() {
        for soft in [
            SpringConfig::with_damping_ratio(1.0, 1.0, 0.3),
            SpringConfig::new(1.0, 1.0, 2.0),
        ] {
            let sim = ScrollSpringSimulation::new(soft, 10.0, 0.0, 0.0, Tolerance::DEFAULT);
            let settle = sim.settle_time().expect("damped spring settles");
            assert!(sim.is_done(settle));
            assert!(sim.is_done(settle + 100.0));
            assert_eq!(sim.position(settle + 100.0), 0.0);
        }
    }

    #[test]
    fn test_undamped_spring_never_settles() {
        let sim = SpringSimulation::new(
            SpringConfig::new(1.0, 100.0, 0.0),
            0.0,
            1.0,
            0.0,
            Tolerance::DEFAULT,
        );
        assert_eq!(sim.settle_time(), None);
        assert!(!sim.is_done(1000.0));
    }

    #[test]
    fn test_critical_with_zero_displacement_stays_finite() {
        let sim = SpringSimulation::new(CRITICAL, 1.0, 1.0, 5.0, Tolerance::DEFAULT);
        for i in 0..100 {
            let t = i as f32 * 0.01;
            assert!(sim.position(t).is_finite());
            assert!(sim.velocity(t).is_finite());
        }
    }
}
