use std::path::Path;

use crate::media::Configuration;
use crate::SteganoError;

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the low bits of all ancillary bytes, in embedding order.
pub fn unveil_raw(
    secret_media: &Path,
    destination_file: &Path,
    config: Configuration,
) -> Result<(), SteganoError> {
    crate::api::unveil_raw::prepare()
        .with_configuration(config)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
