//! Serialization of the hidden data.
//!
//! ```text
//! | length prefix u32 BE | version u8 | ext len u8 | ext | name len u8 | name | payload |
//!                        |<----------- length prefix counts these bits ----------------->|
//! ```

use std::io::{self, Read};

use bitstream_io::{BigEndian as BitBigEndian, BitWrite, BitWriter};
use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::result::Result;
use crate::SteganoError;

pub const FORMAT_VERSION: u8 = 1;
pub const LENGTH_PREFIX_BITS: u64 = 32;

const MAX_FIELD_LEN: usize = u8::MAX as usize;
/// version byte plus the two length bytes
const MIN_BODY_BYTES: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadEnvelope {
    pub name: String,
    pub extension: String,
    pub payload: Vec<u8>,
}

impl PayloadEnvelope {
    pub fn new(
        name: impl Into<String>,
        extension: impl Into<String>,
        payload: Vec<u8>,
    ) -> Result<Self> {
        let envelope = Self {
            name: name.into(),
            extension: extension.into(),
            payload,
        };

        if envelope.name.len() > MAX_FIELD_LEN {
            return Err(SteganoError::config(format!(
                "the file name must not exceed {MAX_FIELD_LEN} bytes"
            )));
        }
        if envelope.extension.len() > MAX_FIELD_LEN {
            return Err(SteganoError::config(format!(
                "the file extension must not exceed {MAX_FIELD_LEN} bytes"
            )));
        }
        if envelope.body_bits() > u32::MAX as u64 {
            return Err(SteganoError::config(
                "the secret is too large for the 32 bit length prefix",
            ));
        }

        Ok(envelope)
    }

    /// bits counted by the length prefix
    pub fn body_bits(&self) -> u64 {
        8 * (MIN_BODY_BYTES
            + self.extension.len() as u64
            + self.name.len() as u64
            + self.payload.len() as u64)
    }

    /// bits needed in the carrier, length prefix included
    pub fn required_bits(&self) -> u64 {
        LENGTH_PREFIX_BITS + self.body_bits()
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity((self.required_bits() / 8) as usize);
        {
            let mut writer = BitWriter::endian(&mut out, BitBigEndian);

            // lengths were validated in `new`
            writer.write(32, self.body_bits() as u32)?;
            writer.write(8, FORMAT_VERSION)?;
            writer.write(8, self.extension.len() as u8)?;
            writer.write_bytes(self.extension.as_bytes())?;
            writer.write(8, self.name.len() as u8)?;
            writer.write_bytes(self.name.as_bytes())?;
            writer.write_bytes(&self.payload)?;
            writer.byte_align()?;
        }

        Ok(out)
    }

    /// Reads an envelope from the carrier bit stream.
    ///
    /// The length prefix is checked against `capacity_bits` before anything is allocated.
    /// Bits behind the envelope are never read.
    pub fn decode(reader: &mut dyn Read, capacity_bits: u64) -> Result<Self> {
        let length = reader
            .read_u32::<BigEndian>()
            .map_err(|e| truncated("length prefix", e))? as u64;

        if LENGTH_PREFIX_BITS + length > capacity_bits {
            return Err(SteganoError::decode(format!(
                "length prefix of {length} bits exceeds the carrier capacity of {capacity_bits} bits"
            )));
        }
        if length % 8 != 0 {
            return Err(SteganoError::decode(format!(
                "length prefix of {length} bits is not a whole number of bytes"
            )));
        }
        if length / 8 < MIN_BODY_BYTES {
            return Err(SteganoError::decode(format!(
                "length prefix of {length} bits is too short for the envelope header"
            )));
        }
        debug!("decoding envelope of {length} bits");

        let mut body = vec![0u8; (length / 8) as usize];
        reader
            .read_exact(&mut body)
            .map_err(|e| truncated("envelope", e))?;

        let (&version, mut rest) = body
            .split_first()
            .ok_or_else(|| SteganoError::decode("empty envelope"))?;
        if version != FORMAT_VERSION {
            return Err(SteganoError::decode(format!(
                "unsupported format version {version}"
            )));
        }

        let extension = take_prefixed(&mut rest, "extension")?;
        let name = take_prefixed(&mut rest, "name")?;

        Ok(Self {
            name,
            extension,
            payload: rest.to_vec(),
        })
    }
}

fn truncated(what: &str, e: io::Error) -> SteganoError {
    SteganoError::decode(format!("carrier ended while reading the {what}: {e}"))
}

/// Splits off a u8 length prefixed UTF-8 string.
fn take_prefixed(rest: &mut &[u8], field: &str) -> Result<String> {
    let (&len, tail) = rest
        .split_first()
        .ok_or_else(|| SteganoError::decode(format!("missing {field} length")))?;
    let len = len as usize;
    if tail.len() < len {
        return Err(SteganoError::decode(format!(
            "{field} length {len} exceeds the remaining {} bytes",
            tail.len()
        )));
    }

    let (value, tail) = tail.split_at(len);
    *rest = tail;

    String::from_utf8(value.to_vec())
        .map_err(|_| SteganoError::decode(format!("{field} is not valid UTF-8")))
}
