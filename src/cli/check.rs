//! Check command implementation.
//!
//! Validates order files without reading or writing any image.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::collect_orders;
use crate::error::{AnonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_order_file;
use crate::validation::{print_diagnostics, ValidationResult};

/// Validate order files without touching any image
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Order files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let orders = collect_orders(&args.paths);

    if orders.is_empty() {
        printer.warning("Checked", "no order files found");
        return Ok(());
    }

    let mut failed = 0;
    for path in &orders {
        let mut warnings = ValidationResult::new();
        match parse_order_file(path, &mut warnings) {
            Ok(order) => {
                printer.success(
                    "Checked",
                    &format!(
                        "{} ({}, {})",
                        display_path(path),
                        plural(order.shapes().len(), "shape", "shapes"),
                        plural(warnings.warning_count(), "warning", "warnings")
                    ),
                );
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(path), e));
            }
        }
        print_diagnostics(&warnings, printer);
    }

    if failed > 0 {
        return Err(AnonError::MalformedOrder {
            message: format!("{} of {} failed validation", failed, plural(orders.len(), "order", "orders")),
            help: None,
        });
    }

    Ok(())
}
