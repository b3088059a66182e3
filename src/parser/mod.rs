//! Parser for anonymization order documents.
//!
//! An order is a JSON (or YAML) mapping naming the image to read, the image
//! to write and the shapes to anonymize:
//!
//! ```json
//! {
//!   "in": "cats.png",
//!   "out": "cats-blurred.png",
//!   "shapes": [
//!     {"type": "circle", "x": 120, "y": 80, "r": 25},
//!     {"type": "rectangle", "c1x": 10, "c1y": 10, "c2x": 60, "c2y": 40},
//!     {"type": "ellipse", "x": 200, "y": 150, "a": 30, "b": 18}
//!   ]
//! }
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use anonymat::parser::parse_order_file;
//!
//! let (order, diagnostics) = parse_order_file(Path::new("orders/cats.json"))?;
//! ```

pub mod order;

pub use order::{parse_order, parse_order_file, parse_order_str, DocumentSyntax, ORDER_KEYS};
