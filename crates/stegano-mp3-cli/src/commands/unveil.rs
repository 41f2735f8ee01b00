use std::path::PathBuf;

use clap::Args;
use stegano_mp3_core::AncillaryStrategy;

use super::EmbeddingArgs;
use crate::CliResult;

/// Unveils a file hidden in an MP3 file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// MP3 file that contains secret data
    #[arg(short = 'i', long = "in", value_name = "mp3 source file", required = true)]
    pub media: PathBuf,

    /// Final data will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,

    #[command(flatten)]
    pub embedding: EmbeddingArgs,
}

impl UnveilArgs {
    pub fn run(self, strategy: AncillaryStrategy) -> CliResult<()> {
        let config = self.embedding.configuration(strategy, false)?;
        let secret =
            stegano_mp3_core::commands::unveil(&self.media, &self.output_folder, config)?;

        println!(
            "Unveiled {} ({} bytes)",
            secret.file_name()?,
            secret.data.len()
        );

        Ok(())
    }
}
