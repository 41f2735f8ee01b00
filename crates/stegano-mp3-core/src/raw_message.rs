use std::io::Read;

use crate::result::Result;
use crate::SteganoError;

/// Everything a decoder delivers, no envelope interpretation.
#[derive(Debug, Default)]
pub struct RawMessage {
    pub content: Vec<u8>,
}

impl RawMessage {
    pub fn of(dec: &mut dyn Read) -> Result<Self> {
        let mut content = Vec::new();
        dec.read_to_end(&mut content)
            .map_err(|source| SteganoError::ReadError { source })?;

        Ok(Self { content })
    }
}
