//! Core domain types for anonymat.
//!
//! - `Colour` - RGB colour values and averaging
//! - `Shape` - shape geometry (bounding boxes and containment)
//! - `Order` - a validated list of shapes with input/output paths

mod colour;
mod order;
mod shape;

pub use colour::{Colour, ColourSum};
pub use order::{Order, ShapeEntry};
pub use shape::{BoundingBox, Shape};
