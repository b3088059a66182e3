//! Compare command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::compare::compare_files;
use crate::error::{AnonError, Result};

/// Compare two images
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First image
    pub first: PathBuf,

    /// Second image
    pub second: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CompareArgs) -> Result<()> {
    let result = compare_files(&args.first, &args.second)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| AnonError::Io {
            path: PathBuf::from("-"),
            message: format!("Failed to serialize comparison: {}", e),
        })?;
        println!("{}", json);
        return Ok(());
    }

    println!("Similarity: {:.6}", result.histogram_correlation);
    println!("Identical: {}", if result.identical { "yes" } else { "no" });
    match result.differing_pixels {
        Some(n) => println!("Differing pixels: {}", n),
        None => println!("Differing pixels: n/a (sizes differ)"),
    }

    Ok(())
}
