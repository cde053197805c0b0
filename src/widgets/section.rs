use crate::error::Result;
use crate::layout::{PlacedElement, Rect, Size};

use super::color::{Color, LinearGradient};

/// Static description of one gallery section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub title: String,
    pub left_color: Color,
    pub right_color: Color,
    /// Reference to the background image, resolved by the host
    pub background_asset: String,
}

impl SectionSpec {
    pub fn new(
        title: impl Into<String>,
        left_color: Color,
        right_color: Color,
        background_asset: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            left_color,
            right_color,
            background_asset: background_asset.into(),
        }
    }

    /// Build a section from CSS color strings such as `"#8266D4"` or `"white"`.
    pub fn parse(
        title: impl Into<String>,
        left_color: &str,
        right_color: &str,
        background_asset: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(
            title,
            left_color.parse()?,
            right_color.parse()?,
            background_asset,
        ))
    }

    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::horizontal(self.left_color, self.right_color)
    }
}

/// Reports the rendered size of a section's title and indicator.
///
/// The layout needs these sizes but never computes them; hosts answer from
/// their own text measurement or element bounds.
pub trait Measure {
    fn title_size(&self, index: usize, title: &str) -> Size;
    fn indicator_size(&self, index: usize) -> Size;
}

/// A [`Measure`] that reports the same sizes for every section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMeasure {
    pub title: Size,
    pub indicator: Size,
}

impl FixedMeasure {
    pub const fn new(title: Size, indicator: Size) -> Self {
        Self { title, indicator }
    }
}

impl Measure for FixedMeasure {
    fn title_size(&self, _index: usize, _title: &str) -> Size {
        self.title
    }

    fn indicator_size(&self, _index: usize) -> Size {
        self.indicator
    }
}

/// Render geometry for one section in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFrame<'a> {
    pub index: usize,
    pub title: &'a str,
    pub card_rect: Rect,
    pub background: LinearGradient,
    pub background_asset: &'a str,
    pub title_placement: PlacedElement,
    pub indicator_placement: PlacedElement,
}
