use std::path::PathBuf;

use clap::Args;
use stegano_mp3_core::AncillaryStrategy;

use super::EmbeddingArgs;
use crate::CliResult;

/// Hides a file in the ancillary bytes of an MP3 file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// MP3 file used as carrier, used readonly.
    #[arg(short = 'i', long = "in", value_name = "mp3 file", required = true)]
    pub media: PathBuf,

    /// Final MP3 will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output mp3 file", required = true)]
    pub write_to_file: PathBuf,

    /// File to hide in the MP3
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    #[command(flatten)]
    pub embedding: EmbeddingArgs,
}

impl HideArgs {
    pub fn run(self, strategy: AncillaryStrategy) -> CliResult<()> {
        let config = self.embedding.configuration(strategy, true)?;
        let report = stegano_mp3_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.data_file,
            config,
        )?;

        println!(
            "Hidden {} bits in {} frames, {} bits available, PSNR {:.2} dB",
            report.bits_embedded, report.frame_count, report.capacity_bits, report.psnr
        );

        Ok(())
    }
}
