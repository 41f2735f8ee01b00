use clap::Parser;
use log::info;
use stegano_mp3_core::SteganoError;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let strategy = args.strategy();
    info!("running {}", args.command.name());

    match args.command {
        Commands::Hide(args) => args.run(strategy),
        Commands::Unveil(args) => args.run(strategy),
        Commands::UnveilRaw(args) => args.run(strategy),
        Commands::Inspect(args) => args.run(strategy),
    }
}
