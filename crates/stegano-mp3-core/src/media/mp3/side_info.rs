//! MPEG-1 Layer III side information.
//!
//! Only the fields needed to locate the audio data of a frame are kept,
//! everything else is skipped over while reading.

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader};

use super::header::ChannelMode;

const GRANULES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideInfo {
    /// negative offset in bytes from the frame's main data slot to where its audio data begins
    pub main_data_begin: u16,
    /// part2_3_length in bits, in granule-major order (`gr0ch0, gr0ch1, gr1ch0, gr1ch1`)
    pub part2_3_lengths: Vec<u16>,
}

impl SideInfo {
    pub fn parse(bytes: &[u8], channel_mode: ChannelMode) -> io::Result<Self> {
        let channels = channel_mode.channels();
        let mut reader = BitReader::endian(bytes, BigEndian);

        let main_data_begin = reader.read::<u16>(9)?;
        reader.skip(if channels == 1 { 5 } else { 3 })?;
        // scfsi
        reader.skip(4 * channels as u32)?;

        let mut part2_3_lengths = Vec::with_capacity(GRANULES * channels);
        for _granule in 0..GRANULES {
            for _channel in 0..channels {
                part2_3_lengths.push(reader.read::<u16>(12)?);
                // big_values, global_gain, scalefac_compress
                reader.skip(9 + 8 + 4)?;
                if reader.read_bit()? {
                    // block_type, mixed_block_flag, 2 table_select, 3 subblock_gain
                    reader.skip(2 + 1 + 2 * 5 + 3 * 3)?;
                } else {
                    // 3 table_select, region0_count, region1_count
                    reader.skip(3 * 5 + 4 + 3)?;
                }
                // preflag, scalefac_scale, count1table_select
                reader.skip(3)?;
            }
        }

        Ok(Self {
            main_data_begin,
            part2_3_lengths,
        })
    }

    /// sum of all part2_3_length fields
    pub fn main_data_bits(&self) -> u64 {
        self.part2_3_lengths.iter().map(|&l| l as u64).sum()
    }

    /// number of bytes the audio data of this frame occupies, rounded up
    pub fn main_data_bytes(&self) -> usize {
        self.main_data_bits().div_ceil(8) as usize
    }
}
