//! MPEG-1 Layer III frame header.

use byteorder::{BigEndian, ByteOrder};

/// size of the frame header in bytes
pub const HEADER_SIZE: usize = 4;
/// size of the optional CRC that follows the header when the protection bit is 0
pub const CRC_SIZE: usize = 2;

const SYNC_MASK: u32 = 0xFFE0_0000;
const MPEG1: u8 = 0b11;
const LAYER3: u8 = 0b01;

const BITRATES_KBPS: [u32; 16] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
];
const SAMPLE_RATES_HZ: [u32; 3] = [44100, 48000, 32000];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

impl ChannelMode {
    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Stereo,
            0b01 => Self::JointStereo,
            0b10 => Self::DualChannel,
            _ => Self::Mono,
        }
    }

    fn bits(self) -> u8 {
        match self {
            Self::Stereo => 0b00,
            Self::JointStereo => 0b01,
            Self::DualChannel => 0b10,
            Self::Mono => 0b11,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            Self::Mono => 1,
            _ => 2,
        }
    }
}

/// All fields of a 4 byte MPEG-1 Layer III frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: u8,
    pub layer: u8,
    /// `true` when a 16 bit CRC follows the header (protection bit is 0)
    pub protected: bool,
    pub bitrate_index: u8,
    pub sample_rate_index: u8,
    pub padding: bool,
    pub private: bool,
    pub channel_mode: ChannelMode,
    pub mode_extension: u8,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: u8,
}

impl FrameHeader {
    /// Parses the first 4 bytes of `bytes`.
    ///
    /// Returns `None` for anything that is not a valid MPEG-1 Layer III header:
    /// missing sync word, other versions or layers, free-format or bad bitrate,
    /// reserved sample rate or reserved emphasis.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_SIZE {
            return None;
        }
        let word = BigEndian::read_u32(&bytes[..HEADER_SIZE]);
        if word & SYNC_MASK != SYNC_MASK {
            return None;
        }

        let field = |shift: u32, mask: u32| ((word >> shift) & mask) as u8;
        let header = Self {
            version: field(19, 0b11),
            layer: field(17, 0b11),
            protected: field(16, 1) == 0,
            bitrate_index: field(12, 0b1111),
            sample_rate_index: field(10, 0b11),
            padding: field(9, 1) == 1,
            private: field(8, 1) == 1,
            channel_mode: ChannelMode::from_bits(field(6, 0b11)),
            mode_extension: field(4, 0b11),
            copyright: field(3, 1) == 1,
            original: field(2, 1) == 1,
            emphasis: field(0, 0b11),
        };

        let valid = header.version == MPEG1
            && header.layer == LAYER3
            && (1..=14).contains(&header.bitrate_index)
            && header.sample_rate_index < 3
            && header.emphasis != 0b10;

        valid.then_some(header)
    }

    /// Serializes the header back into its 4 byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let word = 0xFFE0_0000
            | (self.version as u32 & 0b11) << 19
            | (self.layer as u32 & 0b11) << 17
            | (!self.protected as u32) << 16
            | (self.bitrate_index as u32 & 0b1111) << 12
            | (self.sample_rate_index as u32 & 0b11) << 10
            | (self.padding as u32) << 9
            | (self.private as u32) << 8
            | (self.channel_mode.bits() as u32) << 6
            | (self.mode_extension as u32 & 0b11) << 4
            | (self.copyright as u32) << 3
            | (self.original as u32) << 2
            | (self.emphasis as u32 & 0b11);

        let mut bytes = [0; HEADER_SIZE];
        BigEndian::write_u32(&mut bytes, word);
        bytes
    }

    pub fn bitrate_kbps(&self) -> u32 {
        BITRATES_KBPS[self.bitrate_index as usize & 0b1111]
    }

    pub fn sample_rate_hz(&self) -> u32 {
        SAMPLE_RATES_HZ[(self.sample_rate_index as usize).min(2)]
    }

    /// `floor(144000 * kbps / Hz) + padding`
    pub fn frame_length(&self) -> usize {
        (144_000 * self.bitrate_kbps() / self.sample_rate_hz()) as usize + self.padding as usize
    }

    /// 17 bytes for mono, 32 bytes for all other channel modes
    pub fn side_info_size(&self) -> usize {
        match self.channel_mode {
            ChannelMode::Mono => 17,
            _ => 32,
        }
    }

    /// Offset of the side information relative to the frame start.
    pub fn side_info_offset(&self) -> usize {
        HEADER_SIZE + if self.protected { CRC_SIZE } else { 0 }
    }

    /// Offset of the first main data byte relative to the frame start.
    pub fn data_offset(&self) -> usize {
        self.side_info_offset() + self.side_info_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO_32K_48K: [u8; 4] = [0xFF, 0xFB, 0x14, 0xC0];

    #[test]
    fn should_parse_a_mono_frame_header() {
        let header = FrameHeader::parse(&MONO_32K_48K).expect("header should be valid");

        assert_eq!(header.bitrate_kbps(), 32);
        assert_eq!(header.sample_rate_hz(), 48000);
        assert_eq!(header.channel_mode, ChannelMode::Mono);
        assert!(!header.protected);
        assert_eq!(header.frame_length(), 96);
        assert_eq!(header.side_info_size(), 17);
        assert_eq!(header.data_offset(), 21);
    }

    #[test]
    fn should_compute_the_classic_128k_frame_length() {
        // 128 kbps, 44.1 kHz, joint stereo
        let header = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x64]).unwrap();
        assert_eq!(header.frame_length(), 417);
        assert_eq!(header.channel_mode, ChannelMode::JointStereo);
        assert_eq!(header.side_info_size(), 32);

        let padded = FrameHeader::parse(&[0xFF, 0xFB, 0x92, 0x64]).unwrap();
        assert_eq!(padded.frame_length(), 418);
    }

    #[test]
    fn should_account_for_the_crc() {
        let header = FrameHeader::parse(&[0xFF, 0xFA, 0x14, 0xC0]).unwrap();
        assert!(header.protected);
        assert_eq!(header.data_offset(), 23);
    }

    #[test]
    fn should_reject_invalid_headers() {
        // no sync
        assert!(FrameHeader::parse(&[0xFF, 0x0B, 0x14, 0xC0]).is_none());
        // MPEG-2
        assert!(FrameHeader::parse(&[0xFF, 0xF3, 0x14, 0xC0]).is_none());
        // layer II
        assert!(FrameHeader::parse(&[0xFF, 0xFD, 0x14, 0xC0]).is_none());
        // free format and bad bitrate
        assert!(FrameHeader::parse(&[0xFF, 0xFB, 0x04, 0xC0]).is_none());
        assert!(FrameHeader::parse(&[0xFF, 0xFB, 0xF4, 0xC0]).is_none());
        // reserved sample rate
        assert!(FrameHeader::parse(&[0xFF, 0xFB, 0x1C, 0xC0]).is_none());
        // reserved emphasis
        assert!(FrameHeader::parse(&[0xFF, 0xFB, 0x14, 0xC2]).is_none());
        // too short
        assert!(FrameHeader::parse(&[0xFF, 0xFB]).is_none());
    }

    #[test]
    fn should_serialize_back_to_the_same_bytes() {
        for bytes in [MONO_32K_48K, [0xFF, 0xFA, 0x92, 0x64], [0xFF, 0xFB, 0xE8, 0x0D]] {
            let header = FrameHeader::parse(&bytes).unwrap();
            assert_eq!(header.to_bytes(), bytes);
        }
    }
}
