//! csvschema CLI - parse CSV files into typed records.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            input,
            lenient,
            format,
            output,
        } => commands::parse::run(input, lenient, format, output, cli.verbose),

        Commands::Check { input, json } => commands::check::run(input, json, cli.verbose),

        Commands::Types { json } => commands::types::run(json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
