use log::debug;

use crate::media::configuration::LsbBits;
use crate::media::mp3::FrameTable;
use crate::result::Result;
use crate::SteganoError;

/// How many bits a scanned carrier can hold for a given lsb setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    ancillary_bytes: usize,
    lsb_bits: LsbBits,
}

impl Capacity {
    pub fn of(table: &FrameTable, lsb_bits: LsbBits) -> Self {
        Self {
            ancillary_bytes: table.total_ancillary_bytes(),
            lsb_bits,
        }
    }

    pub fn ancillary_bytes(&self) -> usize {
        self.ancillary_bytes
    }

    pub fn bits(&self) -> u64 {
        self.ancillary_bytes as u64 * self.lsb_bits.get() as u64
    }

    /// Fails with [`SteganoError::Capacity`] when `required_bits` do not fit, an exact fit is fine.
    pub fn check(&self, required_bits: u64) -> Result<()> {
        let available = self.bits();
        debug!("capacity check: {required_bits} of {available} bits");

        if required_bits > available {
            return Err(SteganoError::Capacity {
                required: required_bits,
                available,
            });
        }

        Ok(())
    }
}
