use clap::Parser;
use miette::Result;
use anonymat::cli::{run::RunArgs, Cli, Commands};
use anonymat::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_trace(!cli.quiet);

    match cli.command {
        Some(Commands::Run(args)) => anonymat::cli::run::run(args, &printer)?,
        Some(Commands::Check(args)) => anonymat::cli::check::run(args, &printer)?,
        Some(Commands::Compare(args)) => anonymat::cli::compare::run(args)?,
        Some(Commands::Completions(args)) => anonymat::cli::completions::run(args)?,
        None => anonymat::cli::run::run(
            RunArgs {
                order: cli.order,
                json: false,
            },
            &printer,
        )?,
    }

    Ok(())
}
