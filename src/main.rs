mod analyze;
mod cli;
mod error;
mod init;
mod interactive;
mod logging;
mod progress;
mod settings;
mod ui;

use analyze::AnalyzeArgs;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.global.verbose);

    let result = match cli.command {
        Commands::Analyze { text, file, json } => {
            analyze::execute(&cli.global, AnalyzeArgs { text, file, json })
        }
        Commands::Interactive => interactive::execute(&cli.global),
        Commands::Init { force } => init::execute(&cli.global, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
