//! Run command implementation.
//!
//! Reads an order file, anonymizes the image it names and writes the result.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{AnonError, Result};
use crate::output::{display_path, Printer};
use crate::parser::parse_order_file;
use crate::pipeline::{Anonymizer, RunSummary};
use crate::validation::{print_diagnostics, ValidationResult};

/// Run an order file
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Order file (asked for on stdin when omitted)
    pub order: Option<PathBuf>,

    /// Print a JSON summary on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RunArgs, printer: &Printer) -> Result<()> {
    let path = match args.order {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            prompt_order_path(&mut stdin.lock())?
        }
    };

    let summary = run_order_file(&path, printer)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| AnonError::Io {
            path: PathBuf::from("-"),
            message: format!("Failed to serialize summary: {}", e),
        })?;
        println!("{}", json);
    }

    Ok(())
}

/// Parse and execute one order file, printing its diagnostics.
pub fn run_order_file(path: &Path, printer: &Printer) -> Result<RunSummary> {
    printer.status("Reading", &display_path(path));

    let mut warnings = ValidationResult::new();
    let parsed = parse_order_file(path, &mut warnings);
    print_diagnostics(&warnings, printer);

    Anonymizer::new(printer).run(&parsed?)
}

/// Ask for the order file on stderr and read it from `input`.
fn prompt_order_path(input: &mut impl BufRead) -> Result<PathBuf> {
    let stdin_error = |message: String| AnonError::Io {
        path: PathBuf::from("<stdin>"),
        message,
    };

    eprint!("Order file: ");
    let _ = io::stderr().flush();

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| stdin_error(format!("Failed to read order file name: {}", e)))?;

    let name = line.trim();
    if name.is_empty() {
        return Err(stdin_error("No order file given".to_string()));
    }
    Ok(PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PixelBuffer;
    use crate::types::Colour;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new("orders/faces.json\nignored\n");
        let path = prompt_order_path(&mut input).unwrap();
        assert_eq!(path, PathBuf::from("orders/faces.json"));
    }

    #[test]
    fn test_prompt_empty_input() {
        let mut input = Cursor::new("");
        let err = prompt_order_path(&mut input).unwrap_err();
        assert!(matches!(err, AnonError::Io { .. }));
    }

    #[test]
    fn test_run_order_file() {
        let dir = tempdir().unwrap();
        PixelBuffer::filled(6, 6, Colour::RED).unwrap()
            .save(&dir.path().join("in.png"))
            .unwrap();
        let order_path = dir.path().join("order.json");
        fs::write(
            &order_path,
            r#"{
  "in": "in.png",
  "out": "out.png",
  "shapes": [
    {"type": "circle", "x": 3, "y": 3, "r": 2},
    {"type": "triangle"}
  ]
}"#,
        )
        .unwrap();

        let printer = Printer::new().with_trace(false);
        let summary = run_order_file(&order_path, &printer).unwrap();

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.skipped, 1);
        assert!(dir.path().join("out.png").exists());
    }

    #[test]
    fn test_malformed_order_writes_nothing() {
        let dir = tempdir().unwrap();
        PixelBuffer::filled(2, 2, Colour::WHITE).unwrap()
            .save(&dir.path().join("in.png"))
            .unwrap();
        let order_path = dir.path().join("order.json");
        fs::write(&order_path, r#"{"in": "in.png", "out": "out.png"}"#).unwrap();

        let args = RunArgs {
            order: Some(order_path),
            json: false,
        };
        let err = run(args, &Printer::new().with_trace(false)).unwrap_err();

        assert!(matches!(err, AnonError::MalformedOrder { .. }));
        assert!(!dir.path().join("out.png").exists());
    }
}
