pub mod geometry;
pub mod section;

pub use geometry::{lerp_double, offset_lerp, Alignment, Offset, Rect, Size};
pub use section::{layout_section, PlacedElement, SectionLayout, SectionLayoutInput};

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: an inverted range resolves to
/// `max`, which keeps degenerate inputs (for example an empty section list
/// giving `max = -1`) from taking down a frame.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    max.min(min.max(value))
}

/// Blend factor between the stacked column layout (0.0, at `max_height`) and
/// the paged row layout (1.0, at `mid_height` and below).
pub fn t_column_to_row(height: f32, mid_height: f32, max_height: f32) -> f32 {
    let span = max_height - mid_height;
    if span <= 0.0 {
        return if height > mid_height { 0.0 } else { 1.0 };
    }
    1.0 - clamp((height - mid_height) / span, 0.0, 1.0)
}

/// How far titles and indicators are compressed: 0.0 at `mid_height` and
/// above, 1.0 at `min_height`.
pub fn t_collapsed(height: f32, min_height: f32, mid_height: f32) -> f32 {
    let span = mid_height - min_height;
    if span <= 0.0 {
        return if height > min_height { 0.0 } else { 1.0 };
    }
    1.0 - clamp((height - min_height) / span, 0.0, 1.0)
}

/// Distance of `index` from the (fractional) selected index, saturated at 1.
pub fn selected_index_delta(index: f32, selected_index: f32) -> f32 {
    clamp((index - selected_index).abs(), 0.0, 1.0)
}
