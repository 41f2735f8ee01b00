use std::io::{self, Read, Write};
use std::slice;

use crate::media::configuration::LsbBits;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB decoder that implements Read, it collects the low bits of `bytes`
    /// at `positions`, in that order
    pub fn decoder<'i>(bytes: &'i [u8], positions: &'i [usize], lsb_bits: LsbBits) -> LsbDecoder<'i> {
        LsbDecoder {
            bytes,
            positions: positions.iter(),
            bits: lsb_bits.get(),
            mask: lsb_bits.mask(),
            acc: 0,
            acc_len: 0,
        }
    }

    /// builds a LSB encoder that implements Write, it replaces the low bits of `bytes`
    /// at `positions`, in that order
    pub fn encoder<'i>(
        bytes: &'i mut [u8],
        positions: &'i [usize],
        lsb_bits: LsbBits,
    ) -> LsbEncoder<'i> {
        LsbEncoder {
            bytes,
            positions: positions.iter(),
            bits: lsb_bits.get(),
            mask: lsb_bits.mask(),
            acc: 0,
            acc_len: 0,
            used: 0,
        }
    }
}

/// Writes the stream MSB first in groups of `lsb_bits` bits, one group per carrier byte.
pub struct LsbEncoder<'i> {
    bytes: &'i mut [u8],
    positions: slice::Iter<'i, usize>,
    bits: u8,
    mask: u8,
    acc: u16,
    acc_len: u8,
    used: usize,
}

impl LsbEncoder<'_> {
    fn conceal(&mut self, group: u8) -> io::Result<()> {
        let Some(&pos) = self.positions.next() else {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "no ancillary bytes left",
            ));
        };
        let byte = &mut self.bytes[pos];
        *byte = (*byte & !self.mask) | (group & self.mask);
        self.used += 1;

        Ok(())
    }

    /// Writes the last, zero padded group and returns how many carrier bytes were touched.
    pub fn finish(mut self) -> io::Result<usize> {
        if self.acc_len > 0 {
            let group = (self.acc << (self.bits - self.acc_len)) as u8;
            self.acc_len = 0;
            self.conceal(group)?;
        }

        Ok(self.used)
    }
}

impl Write for LsbEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (written, &b) in buf.iter().enumerate() {
            self.acc = (self.acc << 8) | b as u16;
            self.acc_len += 8;

            while self.acc_len >= self.bits {
                self.acc_len -= self.bits;
                let group = (self.acc >> self.acc_len) as u8;
                self.acc &= (1 << self.acc_len) - 1;
                if let Err(e) = self.conceal(group) {
                    if written == 0 {
                        return Err(e);
                    }
                    return Ok(written);
                }
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reassembles bytes from groups of `lsb_bits` low bits. A trailing partial byte is dropped.
pub struct LsbDecoder<'i> {
    bytes: &'i [u8],
    positions: slice::Iter<'i, usize>,
    bits: u8,
    mask: u8,
    acc: u16,
    acc_len: u8,
}

impl Read for LsbDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        for (read, slot) in buf.iter_mut().enumerate() {
            while self.acc_len < 8 {
                let Some(&pos) = self.positions.next() else {
                    return Ok(read);
                };
                self.acc = (self.acc << self.bits) | (self.bytes[pos] & self.mask) as u16;
                self.acc_len += self.bits;
            }
            self.acc_len -= 8;
            *slot = (self.acc >> self.acc_len) as u8;
            self.acc &= (1 << self.acc_len) - 1;
        }

        Ok(buf.len())
    }
}
