use std::io::{ErrorKind, Write};

use log::{debug, error};

use super::lsb_codec::LsbCodec;
use super::scanner::scan;
use super::sequencer;
use crate::media::configuration::Configuration;
use crate::media::payload::{Capacity, PayloadEnvelope, StreamCipher};
use crate::media::types::StegoReport;
use crate::quality::psnr;
use crate::result::Result;
use crate::{RawMessage, SecretFile, SteganoError};

/// Hides `secret` in the ancillary bytes of `audio`.
///
/// `audio` is left untouched, the carrier with the hidden data is part of the report.
/// Nothing is written unless the whole secret fits.
pub fn embed(
    audio: &[u8],
    secret: &[u8],
    name: &str,
    extension: &str,
    config: &Configuration,
) -> Result<StegoReport> {
    let table = scan(audio, config.ancillary_strategy())?;

    let mut payload = secret.to_vec();
    config.cipher()?.encrypt(&mut payload);
    let envelope = PayloadEnvelope::new(name, extension, payload)?;

    let capacity = Capacity::of(&table, config.lsb_bits());
    let required = envelope.required_bits();
    capacity.check(required)?;

    let stream = envelope.encode()?;
    let positions = sequencer::order(&table, config);

    let mut result = audio.to_vec();
    let touched = {
        let mut encoder = LsbCodec::encoder(&mut result, &positions, config.lsb_bits());
        encoder
            .write_all(&stream)
            .and_then(|_| encoder.finish())
            .map_err(|e| {
                error!("Error embedding into ancillary bytes: {e}, kind {}", e.kind());
                match e.kind() {
                    ErrorKind::WriteZero => SteganoError::Capacity {
                        required,
                        available: capacity.bits(),
                    },
                    _ => SteganoError::WriteError { source: e },
                }
            })?
    };
    debug!("embedded {required} bits into {touched} ancillary bytes");

    let psnr = psnr(audio, &result);

    Ok(StegoReport {
        result,
        config: config.clone(),
        psnr,
        bits_embedded: required,
        capacity_bits: capacity.bits(),
        frame_count: table.len(),
    })
}

/// Recovers a secret hidden by [`embed`] with the same configuration.
pub fn extract(audio: &[u8], config: &Configuration) -> Result<SecretFile> {
    let table = scan(audio, config.ancillary_strategy())?;
    let capacity = Capacity::of(&table, config.lsb_bits());
    let positions = sequencer::order(&table, config);

    let mut decoder = LsbCodec::decoder(audio, &positions, config.lsb_bits());
    let mut envelope = PayloadEnvelope::decode(&mut decoder, capacity.bits())?;
    config.cipher()?.decrypt(&mut envelope.payload);

    Ok(SecretFile {
        name: envelope.name,
        extension: envelope.extension,
        data: envelope.payload,
    })
}

/// Dumps every carrier bit in embedding order, without interpreting the envelope.
pub fn extract_raw(audio: &[u8], config: &Configuration) -> Result<RawMessage> {
    let table = scan(audio, config.ancillary_strategy())?;
    let positions = sequencer::order(&table, config);
    let mut decoder = LsbCodec::decoder(audio, &positions, config.lsb_bits());

    RawMessage::of(&mut decoder)
}
