use std::path::Path;

use crate::media::{Configuration, StegoReport};
use crate::SteganoError;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: &Path,
    config: Configuration,
) -> Result<StegoReport, SteganoError> {
    crate::api::hide::prepare()
        .with_configuration(config)
        .with_audio(media)
        .with_output(write_to_file)
        .with_file(data_file)
        .execute()
}
