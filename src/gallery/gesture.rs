//! Pointer gesture analysis.
//!
//! Moves are classified per sample from the raw movement deltas; releases are
//! measured against the press sample and turned into a [`ReleasePlan`] that the
//! controller animates.

use crate::layout::{self, Offset};
use crate::widgets::PointerSample;

use super::config::GalleryConfig;
use super::state::{next_tier, DragDirection, GalleryState, ViewTier};

/// Axis that dominates a sample or a whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAxis {
    Horizontal,
    Vertical,
}

impl GestureAxis {
    /// Dominant axis of one move sample. Equal movement on both axes (including
    /// no movement at all) is undecided and the sample is skipped.
    pub fn of_movement(movement_x: f32, movement_y: f32) -> Option<Self> {
        let (mx, my) = (movement_x.abs(), movement_y.abs());
        if mx > my {
            Some(GestureAxis::Horizontal)
        } else if my > mx {
            Some(GestureAxis::Vertical)
        } else {
            None
        }
    }

    /// Dominant axis of a release velocity; a tie goes to the vertical axis.
    pub fn of_velocity(velocity: Offset) -> Self {
        if velocity.dx.abs() > velocity.dy.abs() {
            GestureAxis::Horizontal
        } else {
            GestureAxis::Vertical
        }
    }
}

/// A pressed pointer, from its down sample up to the latest move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    pub origin: PointerSample,
    pub last: PointerSample,
}

impl PointerSession {
    pub fn begin(origin: PointerSample) -> Self {
        Self {
            origin,
            last: origin,
        }
    }

    pub fn update(&mut self, sample: PointerSample) {
        self.last = sample;
    }

    /// Horizontal travel since the press, positive when the pointer moved left
    /// (towards the next page).
    pub fn page_delta(&self) -> f32 {
        self.origin.x - self.last.x
    }

    /// Vertical travel since the press, positive when the pointer moved up
    /// (growing the header).
    pub fn height_delta(&self) -> f32 {
        self.origin.y - self.last.y
    }
}

/// Displacement and speed of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Travel from the press position, in pixels
    pub dx: f32,
    pub dy: f32,
    /// Gesture duration in milliseconds
    pub dt: f64,
    /// Average speed in px/ms; zero when `dt` is not positive
    pub velocity: Offset,
}

impl Release {
    pub fn is_stationary(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    pub fn axis(&self) -> GestureAxis {
        GestureAxis::of_velocity(self.velocity)
    }
}

pub fn measure_release(session: &PointerSession, up: &PointerSample) -> Release {
    let dx = up.x - session.origin.x;
    let dy = up.y - session.origin.y;
    let dt = up.time_stamp - session.origin.time_stamp;
    let velocity = if dt > 0.0 {
        Offset::new(dx / dt as f32, dy / dt as f32)
    } else {
        Offset::ZERO
    };
    Release {
        dx,
        dy,
        dt,
        velocity,
    }
}

/// The animation a release settles into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleasePlan {
    /// Settle the selected index on a page while the header holds `height`
    Page {
        from: f32,
        to: f32,
        /// Initial index velocity in pages per second
        velocity: f32,
        height: f32,
    },
    /// Settle the header on the height of `view`
    Tier {
        view: ViewTier,
        from_height: f32,
        to_height: f32,
        /// Selected index rounded to its page
        selected_index: f32,
    },
}

/// Page the release commits to before rounding.
fn target_index(state: &GalleryState, config: &GalleryConfig, release: &Release) -> f32 {
    let index = state.selected_index;
    let vx = release.velocity.dx;
    let target = if release.dx.abs() >= state.width / 2.0 && state.current_view != ViewTier::Max {
        if release.dx < 0.0 {
            index.ceil()
        } else {
            index.floor()
        }
    } else if vx.abs() >= config.fling_threshold() {
        if vx > 0.0 {
            index.floor()
        } else {
            index.ceil()
        }
    } else {
        state.start_index
    };
    layout::clamp(target, 0.0, config.max_index())
}

/// Decide how the gallery settles after `release`, or `None` for a tap.
pub fn plan_release(
    state: &GalleryState,
    config: &GalleryConfig,
    release: &Release,
) -> Option<ReleasePlan> {
    if release.is_stationary() {
        return None;
    }

    let target = target_index(state, config, release);
    let snapped_height = config.snap_height(state.header_height);

    let plan = match release.axis() {
        GestureAxis::Horizontal => {
            let velocity = if state.width > 0.0 {
                // px/ms to pages/s, index grows as the pointer moves left
                -release.velocity.dx * 1000.0 / state.width
            } else {
                0.0
            };
            ReleasePlan::Page {
                from: state.selected_index,
                to: target.round(),
                velocity,
                height: snapped_height,
            }
        }
        GestureAxis::Vertical => {
            let view = next_tier(state.current_view, DragDirection::from_delta(release.dy));
            ReleasePlan::Tier {
                view,
                from_height: snapped_height,
                to_height: view.height(config),
                selected_index: layout::clamp(
                    state.selected_index.round(),
                    0.0,
                    config.max_index(),
                ),
            }
        }
    };
    log::debug!("release {:?} -> {:?}", release, plan);
    Some(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Color, SectionSpec};

    fn config() -> GalleryConfig {
        let sections = (0..4)
            .map(|i| SectionSpec::new(format!("S{}", i), Color::BLACK, Color::WHITE, "bg.png"))
            .collect();
        GalleryConfig::default().sections(sections)
    }

    fn session(x: f32, y: f32, t: f64) -> PointerSession {
        PointerSession::begin(PointerSample::new(x, y, t))
    }

    fn row_state(config: &GalleryConfig, index: f32) -> GalleryState {
        GalleryState::new(config, 400.0)
            .with_view(ViewTier::Mid)
            .with_layout(config, 256.0, index)
            .pressed()
    }

    #[test]
    fn test_movement_axis() {
        assert_eq!(GestureAxis::of_movement(3.0, -1.0), Some(GestureAxis::Horizontal));
        assert_eq!(GestureAxis::of_movement(0.5, -2.0), Some(GestureAxis::Vertical));
        assert_eq!(GestureAxis::of_movement(2.0, -2.0), None);
        assert_eq!(GestureAxis::of_movement(0.0, 0.0), None);
    }

    #[test]
    fn test_release_tie_is_vertical() {
        assert_eq!(
            GestureAxis::of_velocity(Offset::new(1.0, -1.0)),
            GestureAxis::Vertical
        );
    }

    #[test]
    fn test_session_deltas() {
        let mut session = session(200.0, 300.0, 0.0);
        session.update(PointerSample::new(150.0, 320.0, 16.0));
        assert_eq!(session.page_delta(), 50.0);
        assert_eq!(session.height_delta(), -20.0);
    }

    #[test]
    fn test_zero_duration_release_has_no_velocity() {
        let release = measure_release(&session(10.0, 10.0, 5.0), &PointerSample::new(60.0, 10.0, 5.0));
        assert_eq!(release.dx, 50.0);
        assert_eq!(release.velocity, Offset::ZERO);
    }

    #[test]
    fn test_zero_duration_horizontal_release_expands_one_tier() {
        let config = config();
        let state = row_state(&config, 1.0).dragged_horizontally(&config, 50.0);
        let release = measure_release(&session(300.0, 50.0, 5.0), &PointerSample::new(250.0, 50.0, 5.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Tier { view, to_height, .. }) => {
                assert_eq!(view, ViewTier::Max);
                assert_eq!(to_height, 812.0);
            }
            other => panic!("expected a tier plan, got {:?}", other),
        }
    }

    #[test]
    fn test_tap_plans_nothing() {
        let config = config();
        let state = row_state(&config, 1.0);
        let release = measure_release(&session(10.0, 10.0, 0.0), &PointerSample::new(10.0, 10.0, 80.0));
        assert_eq!(plan_release(&state, &config, &release), None);
    }

    #[test]
    fn test_half_width_drag_commits_to_neighbour() {
        let config = config();
        // Dragged left by half of the 400px container
        let state = row_state(&config, 0.0).dragged_horizontally(&config, 200.0);
        let release = measure_release(&session(300.0, 50.0, 0.0), &PointerSample::new(100.0, 50.0, 1000.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Page { from, to, height, .. }) => {
                assert_eq!(from, 0.5);
                assert_eq!(to, 1.0);
                assert_eq!(height, 256.0);
            }
            other => panic!("expected a page plan, got {:?}", other),
        }
    }

    #[test]
    fn test_half_width_drag_right_floors() {
        let config = config();
        let state = row_state(&config, 2.0).dragged_horizontally(&config, -200.0);
        let release = measure_release(&session(100.0, 50.0, 0.0), &PointerSample::new(300.0, 50.0, 1000.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Page { to, .. }) => assert_eq!(to, 1.0),
            other => panic!("expected a page plan, got {:?}", other),
        }
    }

    #[test]
    fn test_short_slow_drag_returns_to_start() {
        let config = config();
        let state = row_state(&config, 1.0).dragged_horizontally(&config, 60.0);
        let release = measure_release(&session(300.0, 50.0, 0.0), &PointerSample::new(240.0, 50.0, 600.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Page { from, to, .. }) => {
                assert!((from - 1.15).abs() < 1e-6);
                assert_eq!(to, 1.0);
            }
            other => panic!("expected a page plan, got {:?}", other),
        }
    }

    #[test]
    fn test_fling_commits_by_velocity() {
        let config = config();
        let state = row_state(&config, 1.0).dragged_horizontally(&config, 60.0);
        // 60px in 1ms, far above the 40px/ms threshold
        let release = measure_release(&session(300.0, 50.0, 0.0), &PointerSample::new(240.0, 50.0, 1.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Page { to, velocity, .. }) => {
                assert_eq!(to, 2.0);
                assert!(velocity > 0.0);
            }
            other => panic!("expected a page plan, got {:?}", other),
        }
    }

    #[test]
    fn test_target_index_is_clamped() {
        let config = config();
        let state = row_state(&config, 3.0);
        let release = measure_release(&session(300.0, 50.0, 0.0), &PointerSample::new(0.0, 50.0, 1.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Page { to, .. }) => assert_eq!(to, 3.0),
            other => panic!("expected a page plan, got {:?}", other),
        }
    }

    #[test]
    fn test_vertical_release_moves_one_tier() {
        let config = config();
        let state = GalleryState::new(&config, 400.0).pressed().dragged_vertically(&config, -100.0);
        let release = measure_release(&session(200.0, 100.0, 0.0), &PointerSample::new(200.0, 200.0, 100.0));
        assert_eq!(
            plan_release(&state, &config, &release),
            Some(ReleasePlan::Tier {
                view: ViewTier::Mid,
                from_height: 812.0,
                to_height: 256.0,
                selected_index: 0.0,
            })
        );
    }

    #[test]
    fn test_diagonal_release_changes_tier() {
        let config = config();
        let state = row_state(&config, 1.4);
        let release = measure_release(&session(200.0, 100.0, 0.0), &PointerSample::new(150.0, 150.0, 100.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Tier { view, selected_index, .. }) => {
                assert_eq!(view, ViewTier::Min);
                assert_eq!(selected_index, 1.0);
            }
            other => panic!("expected a tier plan, got {:?}", other),
        }
    }

    #[test]
    fn test_upward_release_at_max_stays() {
        let config = config();
        let state = GalleryState::new(&config, 400.0).pressed();
        let release = measure_release(&session(200.0, 300.0, 0.0), &PointerSample::new(200.0, 100.0, 100.0));
        match plan_release(&state, &config, &release) {
            Some(ReleasePlan::Tier { view, to_height, .. }) => {
                assert_eq!(view, ViewTier::Max);
                assert_eq!(to_height, 812.0);
            }
            other => panic!("expected a tier plan, got {:?}", other),
        }
    }
}
