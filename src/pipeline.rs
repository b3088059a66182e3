//! Anonymization pipeline.
//!
//! Reads the input image once, clones it, then for each shape averages the
//! pristine input and fills the clone. The input is only ever borrowed
//! immutably, so overlapping shapes never see each other's fills; where they
//! overlap the later shape wins.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{average, fill, PixelBuffer};
use crate::types::{Colour, Order, ShapeEntry};

/// Outcome of one shape entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    /// 1-based position in the order.
    pub index: usize,
    /// The entry's `type` tag.
    pub kind: String,
    /// Average colour written, `None` for skipped entries.
    pub colour: Option<Colour>,
    /// Pixels overwritten in the output.
    pub pixels: usize,
}

impl ShapeReport {
    pub fn is_skipped(&self) -> bool {
        self.colour.is_none()
    }
}

/// Summary of a pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub applied: usize,
    pub skipped: usize,
    pub shapes: Vec<ShapeReport>,
}

/// Anonymize `source` in memory.
///
/// Returns the filled copy and one report per entry. Unrecognized entries
/// are reported as skipped and leave the output untouched.
pub fn anonymize(source: &PixelBuffer, shapes: &[ShapeEntry]) -> (PixelBuffer, Vec<ShapeReport>) {
    let mut sink = source.clone();
    let mut reports = Vec::with_capacity(shapes.len());

    for (i, entry) in shapes.iter().enumerate() {
        let report = match entry {
            ShapeEntry::Shape(shape) => {
                let colour = average(source, shape);
                let pixels = fill(&mut sink, shape, colour);
                ShapeReport {
                    index: i + 1,
                    kind: shape.kind().to_string(),
                    colour: Some(colour),
                    pixels,
                }
            }
            ShapeEntry::Unrecognized { tag } => ShapeReport {
                index: i + 1,
                kind: tag.clone(),
                colour: None,
                pixels: 0,
            },
        };
        reports.push(report);
    }

    (sink, reports)
}

/// Runs orders against image files, tracing through a [`Printer`].
pub struct Anonymizer<'a> {
    printer: &'a Printer,
}

impl<'a> Anonymizer<'a> {
    pub fn new(printer: &'a Printer) -> Self {
        Self { printer }
    }

    /// Execute an order: read, anonymize, write.
    ///
    /// Nothing is written if reading fails. A failed write is not rolled back.
    pub fn run(&self, order: &Order) -> Result<RunSummary> {
        let source = PixelBuffer::read(order.input())?;
        let (width, height) = source.size();
        self.printer.status(
            "Loaded",
            &format!("{} ({}x{})", display_path(order.input()), width, height),
        );

        let (sink, reports) = anonymize(&source, order.shapes());

        for report in &reports {
            match report.colour {
                Some(colour) => self.printer.info(
                    "Anonymized",
                    &format!(
                        "#{} {} -> {} ({})",
                        report.index,
                        report.kind,
                        colour,
                        plural(report.pixels, "pixel", "pixels")
                    ),
                ),
                None => self.printer.info(
                    "Skipped",
                    &format!("#{} unknown shape '{}'", report.index, report.kind),
                ),
            }
        }

        sink.save(order.output())?;

        let skipped = reports.iter().filter(|r| r.is_skipped()).count();
        let applied = reports.len() - skipped;
        self.printer.success(
            "Saved",
            &format!(
                "{} ({}x{}, {})",
                display_path(order.output()),
                width,
                height,
                plural(applied, "shape", "shapes")
            ),
        );

        Ok(RunSummary {
            input: order.input().to_path_buf(),
            output: order.output().to_path_buf(),
            width,
            height,
            applied,
            skipped,
            shapes: reports,
        })
    }
}
