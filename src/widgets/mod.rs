pub mod color;
pub mod event;
pub mod section;

pub use color::{Color, GradientDirection, LinearGradient};
pub use event::{EventResponse, PointerEvent, PointerSample};
pub use section::{FixedMeasure, Measure, SectionFrame, SectionSpec};
