//! Order type - what to anonymize, where to read it and where to write it.

use std::path::{Path, PathBuf};

use super::Shape;

/// One entry of an order's shape list.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEntry {
    /// A shape with a recognized `type` tag.
    Shape(Shape),

    /// A shape whose `type` tag is unknown. Kept so that reports can refer
    /// to it by position, never rasterized.
    Unrecognized { tag: String },
}

impl From<Shape> for ShapeEntry {
    fn from(shape: Shape) -> Self {
        ShapeEntry::Shape(shape)
    }
}

/// A validated anonymization order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Image to read, already resolved against the order's directory.
    input: PathBuf,

    /// Image to write, already resolved against the order's directory.
    output: PathBuf,

    /// Shapes in document order.
    shapes: Vec<ShapeEntry>,
}

impl Order {
    /// Create a new order.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        shapes: Vec<ShapeEntry>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            shapes,
        }
    }

    /// Input image path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output image path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// All shape entries, recognized or not.
    pub fn shapes(&self) -> &[ShapeEntry] {
        &self.shapes
    }
}
