use std::path::Path;

use crate::media::Configuration;
use crate::{SecretFile, SteganoError};

pub fn unveil(
    secret_media: &Path,
    output_folder: &Path,
    config: Configuration,
) -> Result<SecretFile, SteganoError> {
    crate::api::unveil::prepare()
        .with_configuration(config)
        .from_secret_file(secret_media)
        .into_output_folder(output_folder)
        .execute()
}
