use std::fs;
use std::path::Path;

use crate::result::Result;
use crate::SteganoError;

/// The secret file that travels inside the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretFile {
    pub name: String,
    pub extension: String,
    pub data: Vec<u8>,
}

impl SecretFile {
    pub fn from_bytes(name: impl Into<String>, extension: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            data,
        }
    }

    /// Reads the file at `path`, the file stem becomes the name.
    pub fn from_path<P: AsRef<Path> + ?Sized>(path: &P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .ok_or(SteganoError::InvalidFileName)?
            .to_str()
            .ok_or(SteganoError::InvalidFileName)?;
        let extension = match path.extension() {
            Some(ext) => ext.to_str().ok_or(SteganoError::InvalidFileName)?,
            None => "",
        };
        let data = fs::read(path).map_err(|source| SteganoError::ReadError { source })?;

        Ok(Self::from_bytes(name, extension, data))
    }

    /// File name to restore the secret under.
    ///
    /// The extension is appended unless the name already ends with it.
    /// Any directory part is stripped, so the result is safe to join onto an output folder.
    pub fn file_name(&self) -> Result<String> {
        let suffix = format!(".{}", self.extension);
        let full = if self.extension.is_empty() || self.name.ends_with(&suffix) {
            self.name.clone()
        } else {
            format!("{}{suffix}", self.name)
        };

        Path::new(&full)
            .file_name()
            .and_then(|f| f.to_str())
            .map(str::to_owned)
            .ok_or(SteganoError::InvalidFileName)
    }
}
