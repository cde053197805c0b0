mod animatable;
mod spring;
mod ticker;
mod timing;

pub use animatable::Animatable;
pub use spring::{DampingRegime, ScrollSpringSimulation, SpringConfig, SpringSimulation, Tolerance};
pub use ticker::{AdvanceResult, CancelToken, Ticker};
pub use timing::{TimingFunction, TweenSimulation};

/// A value that evolves over elapsed time.
///
/// Implementations are immutable: every method is a pure function of
/// `time`, the number of seconds since the simulation started.
pub trait Simulation: std::fmt::Debug {
    /// Value at `time`
    fn position(&self, time: f32) -> f32;
    /// Rate of change of the value at `time`, in units per second
    fn velocity(&self, time: f32) -> f32;
    /// Whether the simulation has come to rest at `time`
    fn is_done(&self, time: f32) -> bool;
}

/// Configuration for how a value should animate towards a new target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds (ignored by springs)
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Create a spring-based transition with the given configuration
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            duration_ms: 0.0,
            timing: TimingFunction::Spring(config),
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn is_spring(&self) -> bool {
        matches!(self.timing, TimingFunction::Spring(_))
    }

    /// Build the simulation that carries a value from `from` to `to`.
    ///
    /// Springs start with `velocity` (units per second) and pin to `to` once
    /// settled; duration-based curves ignore the velocity.
    pub fn simulation(
        &self,
        from: f32,
        to: f32,
        velocity: f32,
        tolerance: Tolerance,
    ) -> Box<dyn Simulation> {
        match self.timing {
            TimingFunction::Spring(config) => Box::new(ScrollSpringSimulation::new(
                config, from, to, velocity, tolerance,
            )),
            timing => Box::new(TweenSimulation::new(from, to, self.duration_ms, timing)),
        }
    }
}

impl Default for Transition {
    /// Default transition uses the settling spring
    fn default() -> Self {
        Self::spring(SpringConfig::default())
    }
}
