pub mod check;
pub mod compare;
pub mod completions;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// anonymat - Anonymize image regions from shape orders
#[derive(Parser, Debug)]
#[command(name = "anonymat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Order file to run (asked for on stdin when omitted)
    pub order: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an order file
    Run(run::RunArgs),

    /// Validate order files without touching any image
    Check(check::CheckArgs),

    /// Compare two images
    Compare(compare::CompareArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
