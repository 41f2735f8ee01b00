use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::media::{Configuration, Mp3Audio};
use crate::SteganoError;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    config: Configuration,
}

impl UnveilRawApi {
    /// Only lsb bits, random embedding, key and ancillary strategy matter for raw unveiling
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// This is the secret audio that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_audio: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_audio.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SteganoError::TargetNotSet);
        };

        let msg = Mp3Audio::from_file(&secret_media)?.unveil_raw(&self.config)?;

        let mut destination_file =
            File::create(destination_file).map_err(|source| SteganoError::WriteError { source })?;

        destination_file
            .write_all(msg.content.as_slice())
            .map_err(|source| SteganoError::WriteError { source })
    }
}
