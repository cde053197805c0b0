pub mod animation;
pub mod error;
pub mod gallery;
pub mod invalidation;
pub mod layout;
pub mod widgets;

pub use error::{Error, Result};
pub use gallery::{Gallery, GalleryConfig, GalleryFrame};

pub mod prelude {
    pub use crate::animation::{SpringConfig, TimingFunction, Tolerance, Transition};
    pub use crate::gallery::{Gallery, GalleryConfig, GalleryFrame, GalleryState, ViewTier};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{Offset, Rect, Size};
    pub use crate::widgets::{
        Color, EventResponse, FixedMeasure, LinearGradient, Measure, PointerEvent, PointerSample,
        SectionFrame, SectionSpec,
    };
    pub use crate::{Error, Result};
}
