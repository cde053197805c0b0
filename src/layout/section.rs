//! Per-section layout: blends the stacked column placement of a card with its
//! paged row placement.
//!
//! The whole computation is a pure function of [`SectionLayoutInput`]. Nothing
//! here depends on a previously computed layout, so callers can recompute a
//! section whenever the header height, selected index, item count or
//! container size changes.

use crate::animation::Animatable;

use super::geometry::{offset_lerp, Alignment, Offset, Rect, Size};
use super::selected_index_delta;

/// Everything needed to place one section card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayoutInput {
    /// Container size: viewport width by current header height.
    pub size: Size,
    pub t_column_to_row: f32,
    pub t_collapsed: f32,
    pub index: usize,
    pub selected_index: f32,
    pub card_count: usize,
    /// Measured size of the rendered title.
    pub title_size: Size,
    /// Measured size of the rendered indicator.
    pub indicator_size: Size,
    /// Nominal indicator width used for the collapsed indicator band.
    pub indicator_width: f32,
    /// Inset of the indicator from the card corner (column mode) or from the
    /// title (row mode).
    pub indicator_inset: f32,
}

/// Position and opacity of a sub-element (title or indicator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedElement {
    pub origin: Offset,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub card: Rect,
    pub title: PlacedElement,
    pub indicator: PlacedElement,
}

/// Padding added around the nominal indicator width in row mode.
const INDICATOR_BAND_PADDING: f32 = 8.0;
/// Column-mode cards start at `width / COLUMN_CARD_DIVISOR`.
const COLUMN_CARD_DIVISOR: f32 = 5.0;
/// Column-mode titles start at `width / COLUMN_TITLE_DIVISOR`.
const COLUMN_TITLE_DIVISOR: f32 = 10.0;
const ROW_TITLE_DIVISOR: f32 = 2.25;
/// Opacity lost by a fully unselected title or indicator.
const UNSELECTED_FADE: f32 = 0.5;

pub fn layout_section(input: &SectionLayoutInput) -> SectionLayout {
    let SectionLayoutInput {
        size,
        t_column_to_row: t,
        t_collapsed,
        selected_index,
        title_size,
        indicator_size,
        indicator_width,
        indicator_inset,
        ..
    } = *input;
    let index = input.index as f32;
    // Position relative to the selected section, in pages
    let relative = index - selected_index;

    let column_card_x = size.width / COLUMN_CARD_DIVISOR;
    let column_card_width = size.width - column_card_x;
    let column_card_height = if input.card_count > 0 {
        size.height / input.card_count as f32
    } else {
        0.0
    };
    let row_card_width = size.width;

    // Keeps the blended layout anchored while the selected index is fractional
    let alignment = Alignment::new(selected_index * 2.0 - 1.0, -1.0);
    let offset = alignment.along_size(size);

    let column_card = Rect::from_ltwh(
        column_card_x,
        index * column_card_height,
        column_card_width,
        column_card_height,
    );
    let row_card = Rect::from_ltwh(relative * row_card_width, 0.0, row_card_width, size.height);
    let card = Animatable::lerp(&column_card, &row_card, t).shift(offset);

    // Row titles sit in bands that widen as the header collapses
    let column_title_x = size.width / COLUMN_TITLE_DIVISOR;
    let row_title_width = size.width * ((1.0 + t_collapsed) / ROW_TITLE_DIVISOR);
    let row_title_x = (size.width - row_title_width) / 2.0 + relative * row_title_width;

    let padded_indicator_width = indicator_width + INDICATOR_BAND_PADDING;
    let row_indicator_width =
        padded_indicator_width + (1.0 - t_collapsed) * (row_title_width - padded_indicator_width);
    let row_indicator_x =
        (size.width - row_indicator_width) / 2.0 + relative * row_indicator_width;

    let column_title_y = column_card.center_left().dy - title_size.height / 2.0;
    let row_title_y = row_card.center_left().dy - title_size.height / 2.0;
    let centered_row_title_x = row_title_x + (row_title_width - title_size.width) / 2.0;
    let title_origin = offset_lerp(
        Some(Offset::new(column_title_x, column_title_y)),
        Some(Offset::new(centered_row_title_x, row_title_y)),
        t,
    )
    .unwrap_or_default();

    let column_indicator = Offset::new(
        card.center_right().dx - indicator_size.width - indicator_inset,
        card.bottom_right().dy - indicator_size.height - indicator_inset,
    );
    let column_title_rect = Rect::from_ltwh(
        column_title_x,
        column_title_y,
        title_size.width,
        title_size.height,
    );
    let row_title_rect = Rect::from_ltwh(
        row_title_x,
        row_title_y,
        title_size.width,
        title_size.height,
    );
    let title_rect = Animatable::lerp(&column_title_rect, &row_title_rect, t);
    let centered_row_indicator_x =
        row_indicator_x + (row_indicator_width - indicator_size.width) / 2.0;
    let row_indicator = Offset::new(
        centered_row_indicator_x,
        title_rect.bottom_center().dy + indicator_inset,
    ) + offset;
    let indicator_origin =
        offset_lerp(Some(column_indicator), Some(row_indicator), t).unwrap_or_default();

    let delta = selected_index_delta(index, selected_index);
    SectionLayout {
        card,
        title: PlacedElement {
            origin: title_origin + offset,
            opacity: 1.0 - delta * t * UNSELECTED_FADE,
        },
        indicator: PlacedElement {
            origin: indicator_origin,
            opacity: 1.0 - delta * UNSELECTED_FADE,
        },
    }
}
