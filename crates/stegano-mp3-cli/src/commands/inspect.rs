use std::path::PathBuf;

use clap::Args;
use stegano_mp3_core::media::mp3::ChannelMode;
use stegano_mp3_core::{AncillaryStrategy, LsbBits};

use crate::CliResult;

/// Lists the frames of an MP3 file and how much can be hidden in them
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// MP3 file to inspect, used readonly.
    #[arg(short = 'i', long = "in", value_name = "mp3 file", required = true)]
    pub media: PathBuf,

    /// Number of frames to list in detail
    #[arg(long, value_name = "count", default_value_t = 10)]
    pub frames: usize,
}

impl InspectArgs {
    pub fn run(self, strategy: AncillaryStrategy) -> CliResult<()> {
        let table = stegano_mp3_core::commands::inspect(&self.media, strategy)?;
        let ancillary = table.total_ancillary_bytes();

        println!("{}", self.media.display());
        println!("  strategy:        {strategy:?}");
        println!("  frames:          {}", table.len());
        println!("  ancillary bytes: {ancillary}");
        for bits in LsbBits::MIN..=LsbBits::MAX {
            println!(
                "  capacity @ {bits} lsb: {} bits ({} bytes)",
                ancillary * bits as usize,
                ancillary * bits as usize / 8
            );
        }
        for skipped in table.skipped() {
            println!(
                "  skipped:         {}..{} ({} bytes)",
                skipped.start,
                skipped.end,
                skipped.len()
            );
        }

        println!();
        println!("  #      offset  kbps     Hz  mode          length  ancillary");
        for (i, frame) in table.frames().iter().take(self.frames).enumerate() {
            let mode = match frame.header.channel_mode {
                ChannelMode::Stereo => "stereo",
                ChannelMode::JointStereo => "joint stereo",
                ChannelMode::DualChannel => "dual channel",
                ChannelMode::Mono => "mono",
            };
            println!(
                "  {i:<5} {:>7} {:>5} {:>6}  {mode:<12} {:>7} {:>10}",
                frame.offset,
                frame.header.bitrate_kbps(),
                frame.header.sample_rate_hz(),
                frame.length,
                frame.ancillary_len
            );
        }

        Ok(())
    }
}
