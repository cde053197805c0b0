//! Gallery state and the pure reducers that evolve it.
//!
//! [`GalleryState`] is a small `Copy` value. Every input produces a new state
//! from the previous one, and every reducer clamps the header height and the
//! selected index before returning, so no out-of-range state is observable.

use crate::layout::{self, Size};

use super::config::GalleryConfig;

/// Discrete header height the gallery can settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTier {
    /// Full height, sections stacked in a column
    #[default]
    Max,
    /// Sections paged in a row at full title size
    Mid,
    /// Collapsed row with compressed titles
    Min,
}

/// Vertical direction of a release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    /// Pointer moved towards the bottom of the screen (collapses the header)
    Down,
    /// Pointer moved towards the top of the screen (expands the header)
    Up,
}

impl DragDirection {
    /// Direction of a vertical pointer delta; zero counts as `Up`.
    pub fn from_delta(dy: f32) -> Self {
        if dy > 0.0 {
            DragDirection::Down
        } else {
            DragDirection::Up
        }
    }
}

/// Tier reached by dragging from `current` in `direction`; the ends stay put.
pub fn next_tier(current: ViewTier, direction: DragDirection) -> ViewTier {
    match (current, direction) {
        (ViewTier::Max, DragDirection::Down) => ViewTier::Mid,
        (ViewTier::Mid, DragDirection::Down) => ViewTier::Min,
        (ViewTier::Min, DragDirection::Down) => ViewTier::Min,
        (ViewTier::Min, DragDirection::Up) => ViewTier::Mid,
        (ViewTier::Mid, DragDirection::Up) => ViewTier::Max,
        (ViewTier::Max, DragDirection::Up) => ViewTier::Max,
    }
}

impl ViewTier {
    pub fn next(self, direction: DragDirection) -> Self {
        next_tier(self, direction)
    }

    pub fn height(self, config: &GalleryConfig) -> f32 {
        match self {
            ViewTier::Max => config.max_height,
            ViewTier::Mid => config.mid_height,
            ViewTier::Min => config.min_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryState {
    /// Current header height, always within `[min_height, max_height]`
    pub header_height: f32,
    /// Fractional selected page, always within `[0, card_count - 1]`
    pub selected_index: f32,
    /// Selected index when the current gesture started
    pub start_index: f32,
    /// Header height when the current gesture started
    pub start_height: f32,
    pub current_view: ViewTier,
    /// Container width
    pub width: f32,
}

impl GalleryState {
    /// Fully expanded header showing the first section.
    pub fn new(config: &GalleryConfig, width: f32) -> Self {
        Self {
            header_height: config.max_height,
            selected_index: 0.0,
            start_index: 0.0,
            start_height: config.max_height,
            current_view: ViewTier::Max,
            width: width.max(0.0),
        }
    }

    /// Size of the box the sections are laid out in.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.header_height)
    }

    /// Horizontal offset of the section strip.
    pub fn translate_x(&self) -> f32 {
        self.selected_index * self.width
    }

    pub fn t_column_to_row(&self, config: &GalleryConfig) -> f32 {
        layout::t_column_to_row(self.header_height, config.mid_height, config.max_height)
    }

    pub fn t_collapsed(&self, config: &GalleryConfig) -> f32 {
        layout::t_collapsed(self.header_height, config.min_height, config.mid_height)
    }

    /// Commit a new height and selected index, clamped into range.
    pub fn with_layout(self, config: &GalleryConfig, height: f32, selected_index: f32) -> Self {
        Self {
            header_height: config.clamp_height(height),
            selected_index: layout::clamp(selected_index, 0.0, config.max_index()),
            ..self
        }
    }

    pub fn with_width(self, width: f32) -> Self {
        Self {
            width: width.max(0.0),
            ..self
        }
    }

    pub fn with_view(self, current_view: ViewTier) -> Self {
        Self {
            current_view,
            ..self
        }
    }

    /// Snapshot the gesture origin when the pointer goes down.
    pub fn pressed(self) -> Self {
        Self {
            start_index: self.selected_index,
            start_height: self.header_height,
            ..self
        }
    }

    /// Page by `delta_x` pixels measured from the press position (positive
    /// when the pointer moved left).
    pub fn dragged_horizontally(self, config: &GalleryConfig, delta_x: f32) -> Self {
        let progress = if self.width > 0.0 {
            delta_x / self.width
        } else {
            0.0
        };
        self.with_layout(config, self.header_height, self.start_index + progress)
    }

    /// Resize the header by `delta_y` pixels measured from the press position
    /// (positive when the pointer moved up).
    pub fn dragged_vertically(self, config: &GalleryConfig, delta_y: f32) -> Self {
        self.with_layout(config, self.start_height + delta_y, self.selected_index)
    }
}
