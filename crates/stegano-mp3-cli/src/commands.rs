use clap::Args;
use stegano_mp3_core::{AncillaryStrategy, Configuration};

use crate::cli::ask_for_key;
use crate::CliResult;

pub mod hide;
pub mod inspect;
pub mod unveil;
pub mod unveil_raw;

/// Flags that have to be identical for hiding and unveiling
#[derive(Args, Debug)]
pub struct EmbeddingArgs {
    /// Encrypt the secret with the key
    #[arg(long)]
    pub encrypt: bool,

    /// Visit the frames in a key dependent order
    #[arg(long)]
    pub random: bool,

    /// Number of low bits used in every ancillary byte
    #[arg(
        long = "lsb-bits",
        value_name = "1-4",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub lsb_bits: u8,

    /// Key for encryption and random embedding, at most 25 characters.
    /// Asked for when needed but not given.
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,
}

impl EmbeddingArgs {
    pub fn configuration(
        self,
        strategy: AncillaryStrategy,
        confirm_key: bool,
    ) -> CliResult<Configuration> {
        let key = match self.key {
            Some(key) => key,
            None if self.encrypt || self.random => ask_for_key(confirm_key)?,
            None => String::new(),
        };

        Configuration::builder()
            .with_encryption(self.encrypt)
            .with_random_embedding(self.random)
            .with_lsb_bits(self.lsb_bits)
            .with_key(key)
            .with_ancillary_strategy(strategy)
            .build()
    }
}
