use std::path::PathBuf;

use clap::Args;
use stegano_mp3_core::{AncillaryStrategy, Configuration};

use crate::cli::ask_for_key;

/// Dumps the low bits of all ancillary bytes, no interpretation
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// MP3 file that contains secret data
    #[arg(short = 'i', long = "in", value_name = "mp3 source file", required = true)]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    /// Visit the frames in a key dependent order
    #[arg(long)]
    pub random: bool,

    /// Number of low bits read from every ancillary byte
    #[arg(
        long = "lsb-bits",
        value_name = "1-4",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub lsb_bits: u8,

    /// Key the frame order was derived from
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,
}

impl UnveilRawArgs {
    pub fn run(self, strategy: AncillaryStrategy) -> crate::CliResult<()> {
        let key = match self.key {
            None if self.random => Some(ask_for_key(false)?),
            key => key,
        };

        let config = Configuration::builder()
            .with_random_embedding(self.random)
            .with_lsb_bits(self.lsb_bits)
            .with_key(key)
            .with_ancillary_strategy(strategy)
            .build()?;

        stegano_mp3_core::api::unveil_raw::prepare()
            .with_configuration(config)
            .from_secret_file(self.media)
            .into_raw_file(self.output_file)
            .execute()
    }
}
