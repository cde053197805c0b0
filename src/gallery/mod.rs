//! The gallery header controller.
//!
//! [`Gallery`] owns the committed [`GalleryState`], the pointer session of an
//! in-progress drag and up to two running animations (header height and
//! selected index). Hosts feed it pointer events and frame timestamps, then
//! call [`Gallery::layout`] whenever [`Gallery::take_changes`] reports that the
//! geometry moved.
//!
//! ```
//! use gallery_header::prelude::*;
//!
//! let config = GalleryConfig::default()
//!     .section(SectionSpec::parse("EYEGLASSES", "#8266D4", "#3B5F8F", "sunnies.png").unwrap())
//!     .section(SectionSpec::parse("SEATING", "#F95B57", "#8266D4", "lawn_chair.png").unwrap());
//! let mut gallery = Gallery::new(config, 375.0).unwrap();
//!
//! gallery.event(&PointerEvent::Down(PointerSample::new(100.0, 100.0, 0.0)));
//! gallery.event(&PointerEvent::Move(
//!     PointerSample::new(100.0, 160.0, 16.0).with_movement(0.0, 60.0),
//! ));
//! gallery.event(&PointerEvent::Up(PointerSample::new(100.0, 160.0, 32.0)));
//!
//! let mut now = 32.0;
//! while gallery.is_animating() {
//!     now += 16.0;
//!     gallery.advance(now);
//! }
//! assert_eq!(gallery.state().header_height, 256.0);
//! ```

pub mod config;
pub mod gesture;
pub mod state;

use crate::animation::{AdvanceResult, CancelToken, Ticker};
use crate::error::Result;
use crate::invalidation::ChangeFlags;
use crate::layout::{layout_section, SectionLayoutInput};
use crate::widgets::{EventResponse, Measure, PointerEvent, PointerSample, SectionFrame};

pub use config::GalleryConfig;
pub use gesture::{
    measure_release, plan_release, GestureAxis, PointerSession, Release, ReleasePlan,
};
pub use state::{next_tier, DragDirection, GalleryState, ViewTier};

/// Everything a host needs to render one frame of the header.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFrame<'a> {
    pub header_height: f32,
    /// Offset of the section strip; hosts translate the row by `-translate_x`
    pub translate_x: f32,
    pub t_column_to_row: f32,
    pub t_collapsed: f32,
    pub sections: Vec<SectionFrame<'a>>,
}

#[derive(Debug)]
pub struct Gallery {
    config: GalleryConfig,
    state: GalleryState,
    session: Option<PointerSession>,
    height_anim: Option<Ticker>,
    index_anim: Option<Ticker>,
    changes: ChangeFlags,
}

impl Gallery {
    /// Create a fully expanded gallery showing the first section.
    pub fn new(config: GalleryConfig, viewport_width: f32) -> Result<Self> {
        config.validate()?;
        if viewport_width <= 0.0 {
            log::warn!("gallery created with empty viewport width {}", viewport_width);
        }
        let state = GalleryState::new(&config, viewport_width);
        log::debug!(
            "gallery created: {} sections, heights {}/{}/{}",
            config.card_count(),
            config.min_height,
            config.mid_height,
            config.max_height
        );
        Ok(Self {
            config,
            state,
            session: None,
            height_anim: None,
            index_anim: None,
            changes: ChangeFlags::relayout(),
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.height_anim.is_some() || self.index_anim.is_some()
    }

    /// Token that stops the running height animation.
    pub fn height_animation_token(&self) -> Option<CancelToken> {
        self.height_anim.as_ref().map(Ticker::token)
    }

    /// Token that stops the running page animation.
    pub fn index_animation_token(&self) -> Option<CancelToken> {
        self.index_anim.as_ref().map(Ticker::token)
    }

    /// Drain the changes recorded since the previous call.
    pub fn take_changes(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.changes)
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        if width <= 0.0 {
            log::warn!("viewport width {} leaves no room for sections", width);
        }
        let next = self.state.with_width(width);
        self.commit(next);
    }

    pub fn event(&mut self, event: &PointerEvent) -> EventResponse {
        match *event {
            PointerEvent::Down(sample) => self.press(sample),
            PointerEvent::Move(sample) => self.drag(sample),
            PointerEvent::Up(sample) => self.release(sample),
        }
    }

    /// Animate to section `index` the way a completed page drag would.
    pub fn select_index(&mut self, index: usize, now_ms: f64) {
        let to = (index as f32).min(self.config.max_index());
        log::debug!("select index {} (requested {})", to, index);
        self.start(
            ReleasePlan::Page {
                from: self.state.selected_index,
                to,
                velocity: 0.0,
                height: self.config.snap_height(self.state.header_height),
            },
            now_ms,
        );
    }

    /// Apply the animation frame at `now_ms`. Returns true if the state moved.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let mut changed = false;
        if let Some(height) = tick(&mut self.height_anim, now_ms, "height") {
            let next = self
                .state
                .with_layout(&self.config, height, self.state.selected_index);
            changed |= self.commit(next);
        }
        if let Some(index) = tick(&mut self.index_anim, now_ms, "index") {
            let next = self
                .state
                .with_layout(&self.config, self.state.header_height, index);
            changed |= self.commit(next);
        }
        changed
    }

    /// Compute render geometry for every section at the current state.
    pub fn layout(&self, measure: &dyn Measure) -> GalleryFrame<'_> {
        let state = &self.state;
        let t_column_to_row = state.t_column_to_row(&self.config);
        let t_collapsed = state.t_collapsed(&self.config);
        let card_count = self.config.card_count();

        let sections = self
            .config
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let layout = layout_section(&SectionLayoutInput {
                    size: state.size(),
                    t_column_to_row,
                    t_collapsed,
                    index,
                    selected_index: state.selected_index,
                    card_count,
                    title_size: measure.title_size(index, &section.title),
                    indicator_size: measure.indicator_size(index),
                    indicator_width: self.config.indicator_width,
                    indicator_inset: self.config.indicator_inset,
                });
                SectionFrame {
                    index,
                    title: &section.title,
                    card_rect: layout.card,
                    background: section.gradient(),
                    background_asset: &section.background_asset,
                    title_placement: layout.title,
                    indicator_placement: layout.indicator,
                }
            })
            .collect();

        GalleryFrame {
            header_height: state.header_height,
            translate_x: state.translate_x(),
            t_column_to_row,
            t_collapsed,
            sections,
        }
    }

    fn press(&mut self, sample: PointerSample) -> EventResponse {
        self.cancel_animations();
        self.session = Some(PointerSession::begin(sample));
        self.state = self.state.pressed();
        log::trace!("press at ({}, {})", sample.x, sample.y);
        EventResponse::Handled
    }

    fn drag(&mut self, sample: PointerSample) -> EventResponse {
        let Some(session) = self.session.as_mut() else {
            return EventResponse::Ignored;
        };
        session.update(sample);
        let (page_delta, height_delta) = (session.page_delta(), session.height_delta());

        let next = match GestureAxis::of_movement(sample.movement_x, sample.movement_y) {
            Some(GestureAxis::Horizontal) => {
                self.state.dragged_horizontally(&self.config, page_delta)
            }
            Some(GestureAxis::Vertical) => {
                self.state.dragged_vertically(&self.config, height_delta)
            }
            None => return EventResponse::Handled,
        };
        log::trace!(
            "drag: height {} index {}",
            next.header_height,
            next.selected_index
        );
        self.commit(next);
        EventResponse::Handled
    }

    fn release(&mut self, sample: PointerSample) -> EventResponse {
        let Some(session) = self.session.take() else {
            return EventResponse::Ignored;
        };
        let release = measure_release(&session, &sample);
        if let Some(plan) = plan_release(&self.state, &self.config, &release) {
            self.start(plan, sample.time_stamp);
        }
        EventResponse::Handled
    }

    fn start(&mut self, plan: ReleasePlan, now_ms: f64) {
        let tolerance = self.config.tolerance;
        match plan {
            ReleasePlan::Page {
                from,
                to,
                velocity,
                height,
            } => {
                // A running tier animation owns the header height
                let height = if self.height_anim.is_some() {
                    self.state.header_height
                } else {
                    height
                };
                let next = self.state.with_layout(&self.config, height, from);
                self.commit(next);
                let simulation =
                    self.config
                        .page_transition
                        .simulation(from, to, velocity, tolerance);
                log::debug!("page animation {} -> {} at {} pages/s", from, to, velocity);
                replace(&mut self.index_anim, Ticker::new(simulation, now_ms));
            }
            ReleasePlan::Tier {
                view,
                from_height,
                to_height,
                selected_index,
            } => {
                // The rounded index below replaces whatever a page animation was doing
                if let Some(ticker) = self.index_anim.take() {
                    ticker.cancel();
                }
                let next = self
                    .state
                    .with_view(view)
                    .with_layout(&self.config, from_height, selected_index);
                self.commit(next);
                let simulation =
                    self.config
                        .height_transition
                        .simulation(from_height, to_height, 0.0, tolerance);
                log::debug!(
                    "height animation {} -> {} ({:?})",
                    from_height, to_height, view
                );
                replace(&mut self.height_anim, Ticker::new(simulation, now_ms));
            }
        }
    }

    fn cancel_animations(&mut self) {
        for slot in [&mut self.height_anim, &mut self.index_anim] {
            if let Some(ticker) = slot.take() {
                ticker.cancel();
                log::debug!("animation cancelled by press");
            }
        }
    }

    fn commit(&mut self, next: GalleryState) -> bool {
        let changed = next != self.state;
        if changed {
            self.changes |= ChangeFlags::relayout();
        }
        self.state = next;
        changed
    }
}

/// Install `ticker` in `slot`, cancelling whatever ran there before.
fn replace(slot: &mut Option<Ticker>, ticker: Ticker) {
    if let Some(previous) = slot.replace(ticker) {
        previous.cancel();
    }
}

/// Advance the ticker in `slot`, dropping it once it finishes.
fn tick(slot: &mut Option<Ticker>, now_ms: f64, name: &str) -> Option<f32> {
    let ticker = slot.as_mut()?;
    let result = ticker.advance(now_ms);
    match &result {
        AdvanceResult::Changed(value) => log::trace!("{} animation: {}", name, value),
        AdvanceResult::Settled(value) => log::debug!("{} animation settled at {}", name, value),
        AdvanceResult::Cancelled => log::debug!("{} animation cancelled", name),
        AdvanceResult::NoChange => {}
    }
    if result.is_finished() {
        *slot = None;
    }
    result.value()
}
