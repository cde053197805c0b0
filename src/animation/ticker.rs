use std::cell::Cell;
use std::rc::Rc;

use super::Simulation;

/// Result of advancing a ticker, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change since the previous frame
    NoChange,
    /// Value changed to a new value
    Changed(T),
    /// Simulation came to rest; this is the final value
    Settled(T),
    /// Ticker was cancelled and produces no further values
    Cancelled,
}

impl<T> AdvanceResult<T> {
    /// Returns true if the frame produced a value to apply
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_) | AdvanceResult::Settled(_))
    }

    /// Returns true if the ticker will not produce further values
    pub fn is_finished(&self) -> bool {
        matches!(self, AdvanceResult::Settled(_) | AdvanceResult::Cancelled)
    }

    pub fn value(self) -> Option<T> {
        match self {
            AdvanceResult::Changed(v) | AdvanceResult::Settled(v) => Some(v),
            AdvanceResult::NoChange | AdvanceResult::Cancelled => None,
        }
    }
}

/// Shared cancellation flag for a running ticker.
///
/// Clones observe the same flag, so a host can hold a token and stop an
/// animation the controller started.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Drives one [`Simulation`] from an external frame clock.
///
/// Timestamps are host milliseconds (the same clock pointer events use); the
/// simulation is sampled at the seconds elapsed since `start_ms`.
#[derive(Debug)]
pub struct Ticker {
    simulation: Box<dyn Simulation>,
    start_ms: f64,
    token: CancelToken,
    last_value: Option<f32>,
}

impl Ticker {
    pub fn new(simulation: Box<dyn Simulation>, start_ms: f64) -> Self {
        Self {
            simulation,
            start_ms,
            token: CancelToken::new(),
            last_value: None,
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Seconds elapsed at `now_ms`; frames from before the start count as 0.
    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        (((now_ms - self.start_ms) / 1000.0).max(0.0)) as f32
    }

    /// Velocity of the animated value at `now_ms`, in units per second
    pub fn velocity(&self, now_ms: f64) -> f32 {
        self.simulation.velocity(self.elapsed_secs(now_ms))
    }

    /// Sample the simulation for the frame at `now_ms`
    pub fn advance(&mut self, now_ms: f64) -> AdvanceResult<f32> {
        if self.token.is_cancelled() {
            return AdvanceResult::Cancelled;
        }

        let elapsed = self.elapsed_secs(now_ms);
        let value = self.simulation.position(elapsed);
        if self.simulation.is_done(elapsed) {
            self.last_value = Some(value);
            return AdvanceResult::Settled(value);
        }

        let changed = self.last_value != Some(value);
        self.last_value = Some(value);
        if changed {
            AdvanceResult::Changed(value)
        } else {
            AdvanceResult::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{SpringConfig, TimingFunction, Tolerance, Transition};

    fn linear_ticker(start_ms: f64) -> Ticker {
        let sim = Transition::new(100.0, TimingFunction::Linear).simulation(
            0.0,
            10.0,
            0.0,
            Tolerance::DEFAULT,
        );
        Ticker::new(sim, start_ms)
    }

    #[test]
    fn test_ticker_samples_elapsed_time() {
        let mut ticker = linear_ticker(1000.0);
        assert_eq!(ticker.advance(1050.0), AdvanceResult::Changed(5.0));
        assert_eq!(ticker.advance(1050.0), AdvanceResult::NoChange);
        assert_eq!(ticker.advance(1100.0), AdvanceResult::Settled(10.0));
    }

    #[test]
    fn test_frames_before_start_clamp_to_zero() {
        let ticker = linear_ticker(1000.0);
        assert_eq!(ticker.elapsed_secs(900.0), 0.0);
    }

    #[test]
    fn test_cancel_through_token() {
        let mut ticker = linear_ticker(0.0);
        let token = ticker.token();
        assert!(ticker.advance(10.0).is_changed());
        token.cancel();
        assert!(ticker.is_cancelled());
        assert_eq!(ticker.advance(20.0), AdvanceResult::Cancelled);
        assert!(ticker.advance(200.0).is_finished());
    }

    #[test]
    fn test_spring_ticker_settles_on_target() {
        let sim = Transition::spring(SpringConfig::default()).simulation(
            812.0,
            256.0,
            0.0,
            Tolerance::DEFAULT,
        );
        let mut ticker = Ticker::new(sim, 0.0);
        let mut last = None;
        for frame in 0..240 {
            let result = ticker.advance(frame as f64 * 1000.0 / 60.0);
            if let AdvanceResult::Settled(v) = result {
                last = Some(v);
                break;
            }
        }
        assert_eq!(last, Some(256.0));
    }

    #[test]
    fn test_advance_result_value() {
        assert_eq!(AdvanceResult::Changed(1.0).value(), Some(1.0));
        assert_eq!(AdvanceResult::Settled(2.0).value(), Some(2.0));
        assert_eq!(AdvanceResult::<f32>::NoChange.value(), None);
        assert!(!AdvanceResult::<f32>::NoChange.is_finished());
    }
}
