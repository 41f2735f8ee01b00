use std::io;

use clap::{Parser, Subcommand};
use dialoguer::Password;
use log::debug;
use stegano_mp3_core::{AncillaryStrategy, SteganoError};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Only use the frame bytes behind the audio data, following the bit reservoir.
    /// Must be given for hiding and unveiling alike.
    #[arg(long = "main-data-aware", global = true)]
    pub main_data_aware: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn strategy(&self) -> AncillaryStrategy {
        let strategy = if self.main_data_aware {
            AncillaryStrategy::MainDataAware
        } else {
            AncillaryStrategy::SideInfoBoundary
        };
        debug!("ancillary strategy {strategy:?}");

        strategy
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// subcommand name as typed on the command line, safe to log
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Hide(_) => "hide",
            Commands::Unveil(_) => "unveil",
            Commands::UnveilRaw(_) => "unveil-raw",
            Commands::Inspect(_) => "inspect",
        }
    }
}

/// Asks for the key on the terminal, twice when `confirm` is set
pub fn ask_for_key(confirm: bool) -> CliResult<String> {
    let mut prompt = Password::new().with_prompt("Key");
    if confirm {
        prompt = prompt.with_confirmation("Repeat key", "Error: the keys don't match.");
    }

    prompt.interact().map_err(|e| SteganoError::ReadError {
        source: io::Error::other(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_a_hide_command() {
        let args = CliArgs::try_parse_from([
            "stegano-mp3",
            "hide",
            "-i",
            "carrier.mp3",
            "-o",
            "out.mp3",
            "-d",
            "secret.txt",
            "--encrypt",
            "--random",
            "--lsb-bits",
            "3",
            "-k",
            "KEY",
            "--main-data-aware",
        ])
        .unwrap();

        assert!(args.main_data_aware);
        assert_eq!(args.strategy(), AncillaryStrategy::MainDataAware);
        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };
        assert_eq!(hide.embedding.lsb_bits, 3);
        assert!(hide.embedding.encrypt);
        assert!(hide.embedding.random);
        assert_eq!(hide.embedding.key.as_deref(), Some("KEY"));
    }

    #[test]
    fn should_reject_lsb_bits_out_of_range() {
        for bits in ["0", "5"] {
            assert!(CliArgs::try_parse_from([
                "stegano-mp3",
                "unveil",
                "-i",
                "in.mp3",
                "-o",
                ".",
                "--lsb-bits",
                bits,
            ])
            .is_err());
        }
    }

    #[test]
    fn should_parse_inspect_and_unveil_raw() {
        let args = CliArgs::try_parse_from(["stegano-mp3", "inspect", "-i", "in.mp3"]).unwrap();
        assert!(matches!(args.command, Commands::Inspect(_)));
        assert!(!args.main_data_aware);
        assert_eq!(args.strategy(), AncillaryStrategy::SideInfoBoundary);

        let args = CliArgs::try_parse_from([
            "stegano-mp3",
            "unveil-raw",
            "-i",
            "in.mp3",
            "-o",
            "raw.bin",
            "--lsb-bits",
            "2",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::UnveilRaw(_)));
        assert_eq!(args.command.name(), "unveil-raw");
    }
}
