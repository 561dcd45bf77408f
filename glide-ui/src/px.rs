//! Logical pixel coordinate system.
//!
//! Layout providers on mobile hosts report sizes and touch locations in
//! fractional logical pixels, so every type here wraps an `f32`.
//!
//! # Key Types
//!
//! - [`Px`] - A single coordinate value, negative values allowed
//! - [`PxPosition`] - A 2D position (x, y)
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - An axis-aligned rectangle used for touch targets
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the measured element
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use glide_ui::px::{Px, PxPosition, PxRect, PxSize};
//!
//! let size = PxSize::new(Px(300.0), Px(40.0));
//! let rect = PxRect::from_position_size(PxPosition::ZERO, size);
//! assert!(rect.contains(PxPosition::new(Px(150.0), Px(20.0))));
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::dp::Dp;

/// A logical pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px` from an `f32`.
    pub const fn new(value: f32) -> Self {
        Px(value)
    }

    /// Returns the raw `f32` value.
    pub fn to_f32(self) -> f32 {
        self.0
    }

    /// Converts from density-independent pixels using the current scale
    /// factor.
    ///
    /// ```
    /// use glide_ui::{Dp, Px};
    ///
    /// // Without an explicit scale factor 1dp == 1px.
    /// assert_eq!(Px::from_dp(Dp(16.0)), Px(16.0));
    /// ```
    pub fn from_dp(dp: Dp) -> Self {
        Px(dp.to_pixels_f32())
    }

    /// Converts to density-independent pixels using the current scale factor.
    pub fn to_dp(self) -> Dp {
        Dp::from_pixels_f32(self.0)
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }

    /// Returns `true` when the value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        Px::from_dp(dp)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A 2D position in logical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxPosition {
    /// The x-coordinate
    pub x: Px,
    /// The y-coordinate
    pub y: Px,
}

impl PxPosition {
    /// The zero position (0, 0).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Offsets the position by the given deltas.
    ///
    /// ```
    /// use glide_ui::px::{Px, PxPosition};
    ///
    /// let position = PxPosition::new(Px(10.0), Px(20.0));
    /// assert_eq!(
    ///     position.offset(Px(5.0), Px(-3.0)),
    ///     PxPosition::new(Px(15.0), Px(17.0))
    /// );
    /// ```
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x.0 - other.x.0;
        let dy = self.y.0 - other.y.0;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for PxPosition {
    type Output = PxPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size in logical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxSize {
    /// The width
    pub width: Px,
    /// The height
    pub height: Px,
}

impl PxSize {
    /// Zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Creates a square size from a density-independent edge length.
    pub fn square_dp(edge: Dp) -> Self {
        let px = Px::from_dp(edge);
        Self::new(px, px)
    }
}

impl From<[f32; 2]> for PxSize {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(Px(width), Px(height))
    }
}

/// An axis-aligned rectangle in logical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A zero rectangle at the origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and size.
    pub fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns `true` when `point` lies inside the rectangle.
    ///
    /// All four edges are inclusive, so a touch landing exactly on the border
    /// of a touch target still hits it.
    ///
    /// ```
    /// use glide_ui::px::{Px, PxPosition, PxRect};
    ///
    /// let rect = PxRect::new(Px(10.0), Px(10.0), Px(20.0), Px(20.0));
    /// assert!(rect.contains(PxPosition::new(Px(30.0), Px(30.0))));
    /// assert!(!rect.contains(PxPosition::new(Px(30.5), Px(30.0))));
    /// ```
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x.0 >= self.x.0
            && point.y.0 >= self.y.0
            && point.x.0 <= self.x.0 + self.width.0
            && point.y.0 <= self.y.0 + self.height.0
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> PxPosition {
        PxPosition::new(
            Px(self.x.0 + self.width.0 / 2.0),
            Px(self.y.0 + self.height.0 / 2.0),
        )
    }
}
