//! anonymat - Image region anonymizer
//!
//! A library for blurring regions of an image: each shape of an order is
//! replaced by the average colour of the same shape in the original image.

pub mod cli;
pub mod compare;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validation;

pub use compare::{similarity, Similarity};
pub use error::{AnonError, Result};
pub use parser::{parse_order, parse_order_file, parse_order_str, DocumentSyntax};
pub use pipeline::{anonymize, Anonymizer, RunSummary, ShapeReport};
pub use render::{average, fill, PixelBuffer};
pub use types::{BoundingBox, Colour, Order, Shape, ShapeEntry};
pub use validation::{ValidationResult, Warning};
