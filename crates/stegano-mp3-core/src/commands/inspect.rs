use std::path::Path;

use crate::media::mp3::{scan, AncillaryStrategy, FrameTable};
use crate::media::Mp3Audio;
use crate::SteganoError;

/// Scans an MP3 file and returns its frame table, nothing is modified.
pub fn inspect(media: &Path, strategy: AncillaryStrategy) -> Result<FrameTable, SteganoError> {
    let audio = Mp3Audio::from_file(media)?;

    scan(audio.as_bytes(), strategy)
}
