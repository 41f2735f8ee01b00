#![allow(dead_code)]

use bitstream_io::{BigEndian, BitWrite, BitWriter};

/// MPEG-1 Layer III, no CRC, 32 kbps, 48 kHz, mono
pub const MONO_HEADER: [u8; 4] = [0xFF, 0xFB, 0x14, 0xC0];
pub const FRAME_LEN: usize = 96;
pub const SIDE_INFO_END: usize = 21;
pub const ANCILLARY_LEN: usize = FRAME_LEN - SIDE_INFO_END;

/// a mono frame with the given side information, the main data slot is filled with `fill`
pub fn mono_frame(main_data_begin: u16, part2_3: [u16; 2], fill: u8) -> Vec<u8> {
    let mut frame = MONO_HEADER.to_vec();
    {
        let mut w = BitWriter::endian(&mut frame, BigEndian);
        w.write(9, main_data_begin).unwrap();
        w.write(9, 0u16).unwrap();
        for p23 in part2_3 {
            w.write(12, p23).unwrap();
            w.write(47, 0u64).unwrap();
        }
        w.byte_align().unwrap();
    }
    frame.resize(FRAME_LEN, fill);
    frame
}

/// frames without audio data, 75 ancillary bytes each, filled with a varying pattern
pub fn open_frames(count: usize) -> Vec<u8> {
    (0..count)
        .flat_map(|i| {
            let mut frame = mono_frame(0, [0, 0], 0);
            for (j, b) in frame[SIDE_INFO_END..].iter_mut().enumerate() {
                *b = ((i * 13 + j * 5) as u8) | 0x80;
            }
            frame
        })
        .collect()
}

/// frames whose audio data fills all but the last 3 bytes of the main data slot
pub fn tight_frames(count: usize) -> Vec<u8> {
    (0..count)
        .flat_map(|i| mono_frame(0, [576, 0], 0x90 | (i as u8 & 0x0F)))
        .collect()
}
