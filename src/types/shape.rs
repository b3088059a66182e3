//! Shape geometry for anonymized regions.
//!
//! Each shape exposes a half-open integer bounding box and a containment
//! predicate evaluated on pixel indices. The footprint of a shape inside
//! an image is every in-bounds pixel of the bounding box for which the
//! predicate holds; [`Shape::pixels`] is the single place that walks it.
//!
//! # Example
//!
//! ```
//! use anonymat::types::Shape;
//!
//! let square = Shape::rectangle((1.0, 1.0), (3.0, 3.0));
//! let pixels: Vec<_> = square.pixels(10, 10).collect();
//! assert_eq!(pixels, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
//! ```

use std::fmt;

/// A shape footprint to anonymize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Disc centred on `(x, y)` with radius `r`.
    Circle { x: f64, y: f64, r: f64 },

    /// Axis-aligned rectangle from corner `c1` to corner `c2`.
    ///
    /// Corners are not reordered: a `c2` left of or above `c1` is empty.
    Rectangle { c1: (f64, f64), c2: (f64, f64) },

    /// Ellipse centred on `(x, y)` with semi-axes `a` (horizontal) and `b`.
    Ellipse { x: f64, y: f64, a: f64, b: f64 },
}

/// Half-open integer range `[x_min, x_max) x [y_min, y_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl BoundingBox {
    /// Box from floating point extents: floor of the minimum, ceil of the maximum.
    fn from_extents(x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> Self {
        // `as` saturates, so huge extents clamp instead of wrapping
        Self {
            x_min: x_lo.floor() as i64,
            x_max: x_hi.ceil() as i64,
            y_min: y_lo.floor() as i64,
            y_max: y_hi.ceil() as i64,
        }
    }

    /// Check if the box covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }

    /// Intersect with the image `[0, width) x [0, height)`.
    pub fn clip(&self, width: u32, height: u32) -> Self {
        Self {
            x_min: self.x_min.max(0),
            x_max: self.x_max.min(i64::from(width)),
            y_min: self.y_min.max(0),
            y_max: self.y_max.min(i64::from(height)),
        }
    }
}

impl Shape {
    /// Create a circle.
    pub fn circle(x: f64, y: f64, r: f64) -> Self {
        Shape::Circle { x, y, r }
    }

    /// Create a rectangle from two corners.
    pub fn rectangle(c1: (f64, f64), c2: (f64, f64)) -> Self {
        Shape::Rectangle { c1, c2 }
    }

    /// Create an ellipse.
    pub fn ellipse(x: f64, y: f64, a: f64, b: f64) -> Self {
        Shape::Ellipse { x, y, a, b }
    }

    /// The `type` tag used for this shape in order documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Ellipse { .. } => "ellipse",
        }
    }

    /// Bounding box of the shape, not clipped to any image.
    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            Shape::Circle { x, y, r } => BoundingBox::from_extents(x - r, x + r, y - r, y + r),
            Shape::Rectangle { c1, c2 } => BoundingBox::from_extents(c1.0, c2.0, c1.1, c2.1),
            Shape::Ellipse { x, y, a, b } => {
                BoundingBox::from_extents(x - a, x + a, y - b, y + b)
            }
        }
    }

    /// Containment test for the pixel at index `(px, py)`.
    ///
    /// Only meaningful for points inside [`Shape::bounding_box`]; rectangles
    /// accept every such point.
    pub fn contains(&self, px: i64, py: i64) -> bool {
        let (px, py) = (px as f64, py as f64);
        match *self {
            Shape::Circle { x, y, r } => (px - x).powi(2) + (py - y).powi(2) <= r * r,
            Shape::Rectangle { .. } => true,
            Shape::Ellipse { x, y, a, b } => {
                if a == 0.0 || b == 0.0 {
                    return false;
                }
                (px - x).powi(2) / (a * a) + (py - y).powi(2) / (b * b) <= 1.0
            }
        }
    }

    /// Iterate over the footprint of the shape in a `width x height` image.
    ///
    /// Pixels are yielded column by column (x outer, y inner).
    pub fn pixels(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let bbox = self.bounding_box().clip(width, height);
        let (ys, ye) = (bbox.y_min, bbox.y_max);

        (bbox.x_min..bbox.x_max)
            .flat_map(move |x| (ys..ye).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.contains(x, y))
            // clipping keeps both coordinates in [0, u32::MAX)
            .map(|(x, y)| (x as u32, y as u32))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle { x, y, r } => write!(f, "circle ({}, {}) r={}", x, y, r),
            Shape::Rectangle { c1, c2 } => {
                write!(f, "rectangle ({}, {})-({}, {})", c1.0, c1.1, c2.0, c2.1)
            }
            Shape::Ellipse { x, y, a, b } => write!(f, "ellipse ({}, {}) a={} b={}", x, y, a, b),
        }
    }
}
