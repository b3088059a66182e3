//! Non-fatal diagnostics for anonymization orders.
//!
//! Fatal problems in an order are returned as errors by the parser; the
//! problems that only deserve a mention (unknown keys, unknown shape types)
//! are collected here and printed by the CLI.

mod warning;

pub use warning::{ValidationResult, Warning};

use crate::output::Printer;

/// Code for a top-level key other than `in`, `out` or `shapes`.
pub const UNKNOWN_KEY: &str = "anonymat::order::unknown-key";

/// Code for a shape whose `type` is not recognized.
pub const UNKNOWN_SHAPE: &str = "anonymat::order::unknown-shape";

/// Print warnings to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for w in result.iter() {
        eprintln!("  {}[{}]: {}", printer.warning_label("warning"), w.code, w.message);
        if let Some(help) = &w.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}
