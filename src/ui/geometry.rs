//! Point, size and rectangle value types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for geometry values.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GeometryError {
    /// A width or height is negative.
    #[error("dimension {0} must not be negative")]
    NegativeDimension(f32),

    /// A coordinate or dimension is NaN or infinite.
    #[error("value {0} is not finite")]
    NonFinite(f32),
}

fn checked_dimension(value: f32) -> Result<f32, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(GeometryError::NegativeDimension(value));
    }
    Ok(value)
}

/// Position in device-independent units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Non-negative extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f32, f32)", into = "(f32, f32)")]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a validated size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for negative or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            width: checked_dimension(width)?,
            height: checked_dimension(height)?,
        })
    }

    /// Returns the width.
    #[must_use]
    pub const fn width(self) -> f32 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub const fn height(self) -> f32 {
        self.height
    }

    /// Reports whether either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl TryFrom<(f32, f32)> for Size {
    type Error = GeometryError;

    fn try_from((width, height): (f32, f32)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<Size> for (f32, f32) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// Axis-aligned rectangle with a top-left origin and non-negative size.
///
/// Containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    origin: Point,
    size: Size,
}

#[expect(
    clippy::float_arithmetic,
    reason = "rectangle edges are derived from origin and extent"
)]
impl Rect {
    /// Creates a validated rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for negative or non-finite dimensions, or
    /// non-finite coordinates.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        for coordinate in [x, y] {
            if !coordinate.is_finite() {
                return Err(GeometryError::NonFinite(coordinate));
            }
        }
        Ok(Self::from_point_size(Point::new(x, y), Size::new(width, height)?))
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_point_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates the smallest rectangle containing two corner points.
    #[must_use]
    pub const fn from_corners(first: Point, second: Point) -> Self {
        let left = first.x.min(second.x);
        let top = first.y.min(second.y);
        let right = first.x.max(second.x);
        let bottom = first.y.max(second.y);
        Self::from_edges(left, top, right, bottom)
    }

    const fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            origin: Point::new(left, top),
            size: Size {
                width: right - left,
                height: bottom - top,
            },
        }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn origin(self) -> Point {
        self.origin
    }

    /// Returns the extent.
    #[must_use]
    pub const fn size(self) -> Size {
        self.size
    }

    /// Returns the x coordinate of the left edge.
    #[must_use]
    pub const fn left(self) -> f32 {
        self.origin.x
    }

    /// Returns the y coordinate of the top edge.
    #[must_use]
    pub const fn top(self) -> f32 {
        self.origin.y
    }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub const fn right(self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub const fn bottom(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Reports whether the rectangle has zero area.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Reports whether `point` lies inside or on the edge.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns the overlap of two rectangles, or `None` when they are
    /// disjoint. Rectangles that only touch overlap in an empty rectangle.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (left <= right && top <= bottom).then(|| Self::from_edges(left, top, right, bottom))
    }

    /// Returns the smallest rectangle containing both.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}
