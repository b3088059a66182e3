//! Order document parser.
//!
//! Turns a JSON or YAML order document into an [`Order`]. Structural
//! problems are fatal; unknown top-level keys and unknown shape types are
//! only reported as warnings.
//!
//! Validation is deliberately lopsided: a recognized shape with a stray or
//! missing key aborts the whole order, while a shape of an unknown type is
//! accepted and skipped when rendering.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AnonError, Result};
use crate::types::{Order, Shape, ShapeEntry};
use crate::validation::{ValidationResult, Warning, UNKNOWN_KEY, UNKNOWN_SHAPE};

/// Top-level keys read from an order document.
pub const ORDER_KEYS: [&str; 3] = ["in", "out", "shapes"];

/// Syntax of an order document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSyntax {
    Json,
    Yaml,
}

impl DocumentSyntax {
    /// Pick the syntax from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentSyntax::Yaml
            }
            _ => DocumentSyntax::Json,
        }
    }
}

/// Recognized shape types and their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "circle" => Some(ShapeKind::Circle),
            "rectangle" => Some(ShapeKind::Rectangle),
            "ellipse" => Some(ShapeKind::Ellipse),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
        }
    }

    /// Required numeric fields, in the order they are checked.
    fn fields(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["x", "y", "r"],
            ShapeKind::Rectangle => &["c1x", "c1y", "c2x", "c2y"],
            ShapeKind::Ellipse => &["x", "y", "a", "b"],
        }
    }

    fn allows(self, key: &str) -> bool {
        key == "type" || self.fields().contains(&key)
    }
}

/// Read and parse an order file.
///
/// `in` and `out` are resolved against the directory holding the file.
/// Warnings go to `warnings`, including those seen before a fatal error.
pub fn parse_order_file(path: &Path, warnings: &mut ValidationResult) -> Result<Order> {
    let source = fs::read_to_string(path).map_err(|e| AnonError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read order file: {}", e),
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_order_str(&source, DocumentSyntax::from_path(path), base_dir, warnings)
}

/// Parse an order from source text.
pub fn parse_order_str(
    source: &str,
    syntax: DocumentSyntax,
    base_dir: &Path,
    warnings: &mut ValidationResult,
) -> Result<Order> {
    let document: Value = match syntax {
        DocumentSyntax::Json => serde_json::from_str(source).map_err(|e| AnonError::MalformedOrder {
            message: format!("Invalid JSON: {}", e),
            help: Some("Check the order file syntax".to_string()),
        })?,
        DocumentSyntax::Yaml => serde_yaml::from_str(source).map_err(|e| AnonError::MalformedOrder {
            message: format!("Invalid YAML: {}", e),
            help: Some("Check the order file syntax".to_string()),
        })?,
    };

    parse_order(&document, base_dir, warnings)
}

/// Validate a raw document and build the order.
///
/// Checks run in document order, so `warnings` holds everything reported
/// up to the point where a fatal error stops parsing.
pub fn parse_order(
    document: &Value,
    base_dir: &Path,
    warnings: &mut ValidationResult,
) -> Result<Order> {
    let root = document.as_object().ok_or_else(|| {
        AnonError::malformed(
            "An order must be a mapping",
            "Provide the keys 'in', 'out' and 'shapes'",
        )
    })?;

    for key in root.keys() {
        if !ORDER_KEYS.contains(&key.as_str()) {
            warnings.push(
                Warning::new(UNKNOWN_KEY, format!("Unknown key '{}'", key))
                    .with_help("Only 'in', 'out' and 'shapes' are read"),
            );
        }
    }

    let input = root.get("in").and_then(Value::as_str).ok_or_else(|| {
        AnonError::malformed(
            "Key 'in' must be the name of the image to read",
            "Add e.g. \"in\": \"photo.png\"",
        )
    })?;

    let output = root.get("out").and_then(Value::as_str).ok_or_else(|| {
        AnonError::malformed(
            "Key 'out' must be the name of the image to write",
            "Add e.g. \"out\": \"photo-anonymized.png\"",
        )
    })?;

    let raw_shapes = root.get("shapes").and_then(Value::as_array).ok_or_else(|| {
        AnonError::malformed(
            "Key 'shapes' must be a list of shapes to anonymize",
            "Use \"shapes\": [] for an order with nothing to anonymize",
        )
    })?;

    let mut shapes = Vec::with_capacity(raw_shapes.len());
    for (i, raw) in raw_shapes.iter().enumerate() {
        let index = i + 1;
        let entry = parse_shape(raw, index)?;

        if let ShapeEntry::Unrecognized { tag } = &entry {
            warnings.push(
                Warning::new(UNKNOWN_SHAPE, format!("Unknown shape '{}' (shape #{})", tag, index))
                    .with_help("Known shapes: circle, rectangle, ellipse"),
            );
        }
        shapes.push(entry);
    }

    Ok(Order::new(base_dir.join(input), base_dir.join(output), shapes))
}

/// Parse one entry of `shapes`. `index` is 1-based, for messages only.
fn parse_shape(raw: &Value, index: usize) -> Result<ShapeEntry> {
    let fields = raw.as_object().ok_or_else(|| {
        AnonError::malformed(
            format!("Shape #{} must be a mapping", index),
            "Write shapes as e.g. {\"type\": \"circle\", \"x\": 10, \"y\": 10, \"r\": 5}",
        )
    })?;

    let tag = fields.get("type").ok_or_else(|| {
        AnonError::malformed(
            format!("Shape #{} must define the key 'type'", index),
            "Known shapes: circle, rectangle, ellipse",
        )
    })?;

    let Some(kind) = tag.as_str().and_then(ShapeKind::from_tag) else {
        let tag = match tag {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Ok(ShapeEntry::Unrecognized { tag });
    };

    for key in fields.keys() {
        if !kind.allows(key) {
            return Err(AnonError::malformed(
                format!("Unknown key '{}' for a '{}' shape (shape #{})", key, kind.tag(), index),
                format!("A '{}' accepts: type, {}", kind.tag(), kind.fields().join(", ")),
            ));
        }
    }

    let shape = match kind {
        ShapeKind::Circle => Shape::circle(
            number(fields, kind, "x", index)?,
            number(fields, kind, "y", index)?,
            number(fields, kind, "r", index)?,
        ),
        ShapeKind::Rectangle => Shape::rectangle(
            (
                number(fields, kind, "c1x", index)?,
                number(fields, kind, "c1y", index)?,
            ),
            (
                number(fields, kind, "c2x", index)?,
                number(fields, kind, "c2y", index)?,
            ),
        ),
        ShapeKind::Ellipse => Shape::ellipse(
            number(fields, kind, "x", index)?,
            number(fields, kind, "y", index)?,
            number(fields, kind, "a", index)?,
            number(fields, kind, "b", index)?,
        ),
    };

    Ok(ShapeEntry::Shape(shape))
}

/// Read a required numeric field. Booleans and nulls are not numbers.
fn number(fields: &Map<String, Value>, kind: ShapeKind, key: &str, index: usize) -> Result<f64> {
    fields
        .get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            AnonError::malformed(
                format!("Key '{}' of a '{}' must be a number (shape #{})", key, kind.tag(), index),
                format!("A '{}' requires: {}", kind.tag(), kind.fields().join(", ")),
            )
        })
}
