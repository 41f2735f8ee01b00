use std::path::{Path, PathBuf};

use log::info;

use crate::media::{Configuration, Mp3Audio, Persist, StegoReport};
use crate::{SecretFile, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    file: Option<PathBuf>,
    secret: Option<SecretFile>,
    audio: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Configuration,
}

impl HideApi {
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// The file to hide, name and extension travel along with its content
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    /// Hide an in-memory secret instead of a file
    pub fn with_secret(mut self, secret: SecretFile) -> Self {
        self.secret = Some(secret);
        self
    }

    /// The MP3 carrier
    pub fn with_audio<A: AsRef<Path>>(mut self, audio: A) -> Self {
        self.audio = Some(audio.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<StegoReport, SteganoError> {
        self.validate()?;
        let Some(audio) = self.audio else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let secret = match (self.secret, self.file) {
            (Some(secret), _) => secret,
            (None, Some(file)) => SecretFile::from_path(&file)?,
            (None, None) => return Err(SteganoError::MissingSecret),
        };

        let mut report = Mp3Audio::from_file(&audio)?.hide_data(&secret, &self.config)?;
        report.save_as(&output)?;
        info!(
            "hid {} of {} bits in {} frames, PSNR {:.2} dB",
            report.bits_embedded, report.capacity_bits, report.frame_count, report.psnr
        );

        Ok(report)
    }

    fn validate(&self) -> Result<(), SteganoError> {
        if self.secret.is_none() && self.file.is_none() {
            return Err(SteganoError::MissingSecret);
        }

        Ok(())
    }
}
