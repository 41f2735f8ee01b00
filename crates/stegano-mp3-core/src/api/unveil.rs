use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::media::{Configuration, Mp3Audio};
use crate::{SecretFile, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    config: Configuration,
}

impl UnveilApi {
    /// Use the same configuration as when hiding
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// This is the secret audio that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_audio: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_audio.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the data will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<SecretFile, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(SteganoError::TargetNotSet);
        };

        let secret = Mp3Audio::from_file(&secret_media)?.unveil_data(&self.config)?;

        let target_file = output_folder.join(secret.file_name()?);
        let mut target =
            File::create(&target_file).map_err(|source| SteganoError::WriteError { source })?;
        target
            .write_all(&secret.data)
            .map_err(|source| SteganoError::WriteError { source })?;
        info!("unveiled {} bytes into {target_file:?}", secret.data.len());

        Ok(secret)
    }
}
