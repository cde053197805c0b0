//! Geometric primitives used by the section layout: sizes, offsets, edge-based
//! rectangles and normalized alignments.
//!
//! Every operation returns a new value. Anchor points on [`Rect`] are derived
//! from the four edges on each call, so they always agree with the edges.

use std::ops::{Add, Mul, Sub};

use crate::animation::Animatable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

/// A 2D displacement (or a point measured from the origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f32> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f32) -> Offset {
        Offset::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Animatable for Offset {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Offset {
            dx: from.dx + (to.dx - from.dx) * t,
            dy: from.dy + (to.dy - from.dy) * t,
        }
    }
}

/// Axis-aligned rectangle stored by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::from_ltrb(left, top, left + width, top + height)
    }

    /// Smallest rectangle containing both points.
    pub fn from_points(a: Offset, b: Offset) -> Self {
        Self::from_ltrb(
            a.dx.min(b.dx),
            a.dy.min(b.dy),
            a.dx.max(b.dx),
            a.dy.max(b.dy),
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Offset {
        Offset::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    pub fn center_left(&self) -> Offset {
        Offset::new(self.left, self.top + self.height() / 2.0)
    }

    pub fn center_right(&self) -> Offset {
        Offset::new(self.right, self.top + self.height() / 2.0)
    }

    pub fn top_left(&self) -> Offset {
        Offset::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Offset {
        Offset::new(self.right, self.top)
    }

    pub fn bottom_right(&self) -> Offset {
        Offset::new(self.right, self.bottom)
    }

    pub fn bottom_center(&self) -> Offset {
        Offset::new(self.left + self.width() / 2.0, self.bottom)
    }

    pub fn shift(&self, offset: Offset) -> Self {
        self.translate(offset.dx, offset.dy)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::from_ltrb(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    fn scale(&self, k: f32) -> Self {
        Self::from_ltrb(self.left * k, self.top * k, self.right * k, self.bottom * k)
    }

    /// Interpolate between two optional rectangles.
    ///
    /// A missing endpoint behaves like that rectangle collapsed towards the
    /// origin: `lerp(None, Some(b), t) == b * t` and
    /// `lerp(Some(a), None, t) == a * (1 - t)`.
    pub fn lerp(a: Option<&Rect>, b: Option<&Rect>, t: f32) -> Option<Rect> {
        match (a, b) {
            (None, None) => None,
            (None, Some(b)) => Some(b.scale(t)),
            (Some(a), None) => Some(a.scale(1.0 - t)),
            (Some(a), Some(b)) => Some(<Rect as Animatable>::lerp(a, b, t)),
        }
    }
}

impl Animatable for Rect {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Rect {
            left: from.left + (to.left - from.left) * t,
            top: from.top + (to.top - from.top) * t,
            right: from.right + (to.right - from.right) * t,
            bottom: from.bottom + (to.bottom - from.bottom) * t,
        }
    }
}

/// Scalar interpolation where a missing endpoint counts as zero.
pub fn lerp_double(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let a = a.unwrap_or(0.0);
    let b = b.unwrap_or(0.0);
    Some(a + (b - a) * t)
}

/// Offset interpolation with the same missing-endpoint rule as [`Rect::lerp`].
pub fn offset_lerp(a: Option<Offset>, b: Option<Offset>, t: f32) -> Option<Offset> {
    match (a, b) {
        (None, None) => None,
        (None, Some(b)) => Some(b * t),
        (Some(a), None) => Some(a * (1.0 - t)),
        (Some(a), Some(b)) => Some(Offset::lerp(&a, &b, t)),
    }
}

/// A point within a box in normalized coordinates.
///
/// `(-1, -1)` is the top-left corner, `(0, 0)` the center and `(1, 1)` the
/// bottom-right corner. Values outside that range land outside the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub x: f32,
    pub y: f32,
}

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment::new(-1.0, -1.0);
    pub const CENTER: Alignment = Alignment::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Absolute offset of this alignment inside a box of the given size.
    pub fn along_size(&self, size: Size) -> Offset {
        let center_x = size.width / 2.0;
        let center_y = size.height / 2.0;
        Offset::new(center_x + self.x * center_x, center_y + self.y * center_y)
    }
}
