use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;
mod errors;

use cli::{PickaxeCli, PickaxeCliCommand};

fn main() -> ExitCode {
    let cli = PickaxeCli::parse();

    // Log to stderr only: stdout belongs to the MCP protocol when serving.
    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let result = match cli.command {
        PickaxeCliCommand::Serve => commands::serve(),
        PickaxeCliCommand::Studios => commands::studios(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
