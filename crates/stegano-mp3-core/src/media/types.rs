use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::error;

use crate::error::SteganoError;
use crate::media::configuration::Configuration;
use crate::media::mp3;
use crate::result::Result;
use crate::{RawMessage, SecretFile};

use super::Persist;

/// an MP3 carrier loaded into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mp3Audio {
    bytes: Vec<u8>,
}

impl Mp3Audio {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let supported = f
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"));
        if !supported {
            return Err(SteganoError::UnsupportedMedia);
        }

        let bytes = fs::read(f).map_err(|e| {
            error!("Error reading file {f:?}: {e}");
            SteganoError::ReadError { source: e }
        })?;

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn hide_data(&self, secret: &SecretFile, config: &Configuration) -> Result<StegoReport> {
        mp3::embed(
            &self.bytes,
            &secret.data,
            &secret.name,
            &secret.extension,
            config,
        )
    }

    pub fn unveil_data(&self, config: &Configuration) -> Result<SecretFile> {
        mp3::extract(&self.bytes, config)
    }

    pub fn unveil_raw(&self, config: &Configuration) -> Result<RawMessage> {
        mp3::extract_raw(&self.bytes, config)
    }
}

/// Outcome of hiding a secret.
#[derive(Debug, Clone)]
pub struct StegoReport {
    /// the carrier with the hidden data
    pub result: Vec<u8>,
    pub config: Configuration,
    /// byte level PSNR of `result` against the original carrier
    pub psnr: f64,
    /// envelope bits written, length prefix included
    pub bits_embedded: u64,
    pub capacity_bits: u64,
    pub frame_count: usize,
}

impl Persist for StegoReport {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;

        f.write_all(&self.result).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })
    }
}
