//! Walks an MP3 byte buffer frame by frame and determines for every frame
//! the ancillary bytes that can carry hidden data.

use std::ops::Range;

use log::{debug, warn};

use super::header::FrameHeader;
use super::side_info::SideInfo;
use crate::result::Result;
use crate::SteganoError;

/// how many bytes are searched for the next frame header after sync was lost
pub const RESYNC_WINDOW: usize = 4096;

const ID3V2_HEADER_SIZE: usize = 10;
const ID3V2_FOOTER_FLAG: u8 = 0x10;
const ID3V1_SIZE: usize = 128;

/// Decides which bytes of a frame count as ancillary data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AncillaryStrategy {
    /// everything after header, CRC and side information up to the frame end
    #[default]
    SideInfoBoundary,
    /// only the tail of a frame's main data slot that no audio data reaches into,
    /// following `main_data_begin` and `part2_3_length` across the bit reservoir
    MainDataAware,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDescriptor {
    /// absolute byte offset of the frame header
    pub offset: usize,
    pub header: FrameHeader,
    pub length: usize,
    /// absolute byte offset of the first ancillary byte
    pub ancillary_start: usize,
    pub ancillary_len: usize,
}

impl FrameDescriptor {
    /// absolute byte range of the ancillary region
    pub fn ancillary(&self) -> Range<usize> {
        self.ancillary_start..self.ancillary_start + self.ancillary_len
    }

    /// absolute offset of the frame's main data slot
    pub fn data_start(&self) -> usize {
        self.offset + self.header.data_offset()
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Result of a scan: the ordered frames plus all byte ranges that did not belong to a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameTable {
    frames: Vec<FrameDescriptor>,
    skipped: Vec<Range<usize>>,
}

impl FrameTable {
    pub fn frames(&self) -> &[FrameDescriptor] {
        &self.frames
    }

    /// leading ID3v2 tag, junk between frames, trailing ID3v1 tag and truncated tails
    pub fn skipped(&self) -> &[Range<usize>] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn total_ancillary_bytes(&self) -> usize {
        self.frames.iter().map(|f| f.ancillary_len).sum()
    }
}

/// Scans `bytes` as an MPEG-1 Layer III stream.
pub fn scan(bytes: &[u8], strategy: AncillaryStrategy) -> Result<FrameTable> {
    let mut skipped = Vec::new();

    let mut offset = id3v2_size(bytes).min(bytes.len());
    if offset > 0 {
        debug!("skipping ID3v2 tag of {offset} bytes");
        skipped.push(0..offset);
    }

    let end = bytes.len();
    let mut frames = Vec::new();
    while offset < end {
        if is_id3v1_at(bytes, offset) {
            debug!("skipping ID3v1 tag at {offset}");
            skipped.push(offset..end);
            break;
        }

        let Some(header) = FrameHeader::parse(&bytes[offset..end]) else {
            match resync(bytes, offset, end) {
                Some(next) => {
                    warn!("lost frame sync at {offset}, resynchronised at {next}");
                    skipped.push(offset..next);
                    offset = next;
                    continue;
                }
                None if !frames.is_empty() && offset + RESYNC_WINDOW >= end => {
                    warn!("ignoring {} bytes of trailing data at {offset}", end - offset);
                    skipped.push(offset..end);
                    break;
                }
                None => {
                    return Err(SteganoError::format(
                        offset,
                        format!("no MPEG-1 Layer III frame header within {RESYNC_WINDOW} bytes"),
                    ));
                }
            }
        };

        let length = header.frame_length();
        if offset + length > end {
            warn!(
                "truncated frame at {offset}: needs {length} bytes, {} left",
                end - offset
            );
            skipped.push(offset..end);
            break;
        }

        frames.push(FrameDescriptor {
            offset,
            header,
            length,
            ancillary_start: offset + length,
            ancillary_len: 0,
        });
        offset += length;
    }

    if frames.is_empty() {
        return Err(SteganoError::format(
            offset.min(bytes.len()),
            "no MPEG-1 Layer III frames found",
        ));
    }

    match strategy {
        AncillaryStrategy::SideInfoBoundary => side_info_boundary(&mut frames),
        AncillaryStrategy::MainDataAware => main_data_aware(bytes, &mut frames)?,
    }

    let table = FrameTable { frames, skipped };
    debug!(
        "scanned {} frames with {} ancillary bytes ({strategy:?})",
        table.len(),
        table.total_ancillary_bytes()
    );

    Ok(table)
}

fn side_info_boundary(frames: &mut [FrameDescriptor]) {
    for frame in frames.iter_mut() {
        let data_start = frame.data_start().min(frame.end());
        frame.ancillary_start = data_start;
        frame.ancillary_len = frame.end() - data_start;
    }
}

/// Lays all main data slots end to end and marks as ancillary only the slot
/// tail behind the furthest reaching audio data that starts before the slot ends.
fn main_data_aware(bytes: &[u8], frames: &mut [FrameDescriptor]) -> Result<()> {
    let mut slots = Vec::with_capacity(frames.len());
    let mut audio = Vec::with_capacity(frames.len());
    let mut stream_pos = 0usize;

    for frame in frames.iter() {
        let header = &frame.header;
        let side_info_start = frame.offset + header.side_info_offset();
        let side_info = SideInfo::parse(
            &bytes[side_info_start..frame.end()],
            header.channel_mode,
        )
        .map_err(|e| SteganoError::format(side_info_start, format!("invalid side information: {e}")))?;

        let slot_len = frame.length.saturating_sub(header.data_offset());
        let begin = stream_pos.saturating_sub(side_info.main_data_begin as usize);
        slots.push(stream_pos..stream_pos + slot_len);
        audio.push(begin..begin + side_info.main_data_bytes());
        stream_pos += slot_len;
    }

    let mut next = 0;
    let mut audio_end = 0;
    for (frame, slot) in frames.iter_mut().zip(slots) {
        while next < audio.len() && audio[next].start < slot.end {
            audio_end = audio_end.max(audio[next].end);
            next += 1;
        }
        let ancillary_start = audio_end.clamp(slot.start, slot.end);
        frame.ancillary_start = frame.data_start() + (ancillary_start - slot.start);
        frame.ancillary_len = slot.end - ancillary_start;
    }

    Ok(())
}

/// total size of a leading ID3v2 tag, 0 when there is none
fn id3v2_size(bytes: &[u8]) -> usize {
    if bytes.len() < ID3V2_HEADER_SIZE || &bytes[..3] != b"ID3" {
        return 0;
    }
    let size = bytes[6..10]
        .iter()
        .fold(0usize, |size, &b| (size << 7) | (b & 0x7F) as usize);
    let footer = if bytes[5] & ID3V2_FOOTER_FLAG != 0 {
        ID3V2_HEADER_SIZE
    } else {
        0
    };

    ID3V2_HEADER_SIZE + size + footer
}

/// An ID3v1 tag only counts where the frame walk ends, never inside a frame.
fn is_id3v1_at(bytes: &[u8], offset: usize) -> bool {
    offset + ID3V1_SIZE == bytes.len() && bytes[offset..].starts_with(b"TAG")
}

fn resync(bytes: &[u8], offset: usize, end: usize) -> Option<usize> {
    let limit = offset.saturating_add(RESYNC_WINDOW).min(end);
    (offset + 1..limit).find(|&candidate| {
        is_id3v1_at(bytes, candidate) || FrameHeader::parse(&bytes[candidate..end]).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mono_frame, mono_frames, ANCILLARY_LEN, FRAME_LEN};

    #[test]
    fn should_find_all_frames_and_their_ancillary_bytes() {
        let bytes = mono_frames(10);
        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();

        assert_eq!(table.len(), 10);
        assert!(table.skipped().is_empty());
        assert_eq!(table.total_ancillary_bytes(), 10 * ANCILLARY_LEN);
        for (i, frame) in table.frames().iter().enumerate() {
            assert_eq!(frame.offset, i * FRAME_LEN);
            assert_eq!(frame.ancillary(), i * FRAME_LEN + 21..(i + 1) * FRAME_LEN);
            assert_eq!(frame.ancillary().end, frame.end());
        }
    }

    #[test]
    fn should_skip_a_leading_id3v2_tag() {
        // syncsafe size 0x00 0x00 0x01 0x00 = 128
        let mut bytes = vec![b'I', b'D', b'3', 4, 0, 0, 0, 0, 1, 0];
        bytes.extend(vec![0u8; 128]);
        bytes.extend(mono_frames(3));

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.frames()[0].offset, 138);
        assert_eq!(table.skipped(), &[0..138]);
    }

    #[test]
    fn should_skip_an_id3v2_tag_with_footer() {
        let mut bytes = vec![b'I', b'D', b'3', 4, 0, ID3V2_FOOTER_FLAG, 0, 0, 0, 5];
        bytes.extend(vec![0u8; 15]);
        bytes.extend(mono_frames(2));

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.frames()[0].offset, 25);
    }

    #[test]
    fn should_stop_at_an_id3v1_trailer() {
        let mut bytes = mono_frames(4);
        let mut tag = b"TAG".to_vec();
        tag.resize(ID3V1_SIZE, b' ');
        bytes.extend(tag);

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.skipped(), &[4 * FRAME_LEN..5 * FRAME_LEN + 32]);
    }

    #[test]
    fn should_stop_at_an_id3v1_trailer_behind_junk() {
        let mut bytes = mono_frames(2);
        bytes.extend(vec![0x42u8; 40]);
        let mut tag = b"TAG".to_vec();
        tag.resize(ID3V1_SIZE, 0xFF);
        bytes.extend(tag);

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.skipped(),
            &[2 * FRAME_LEN..2 * FRAME_LEN + 40, 2 * FRAME_LEN + 40..bytes.len()]
        );
    }

    #[test]
    fn should_keep_frames_that_contain_tag_bytes_near_the_end() {
        // len - 128 falls into the ancillary bytes of the third frame
        let mut bytes = mono_frames(4);
        let at = bytes.len() - ID3V1_SIZE;
        assert!(at > 2 * FRAME_LEN + 21 && at < 3 * FRAME_LEN);
        bytes[at..at + 3].copy_from_slice(b"TAG");

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.skipped().is_empty());
        assert_eq!(table, scan(&mono_frames(4), AncillaryStrategy::default()).unwrap());
    }

    #[test]
    fn should_record_a_truncated_last_frame() {
        let mut bytes = mono_frames(3);
        bytes.truncate(2 * FRAME_LEN + 50);

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped(), &[2 * FRAME_LEN..2 * FRAME_LEN + 50]);
    }

    #[test]
    fn should_resync_after_junk() {
        let mut bytes = mono_frames(2);
        bytes.extend(vec![0x42u8; 300]);
        bytes.extend(mono_frames(2));

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.frames()[2].offset, 2 * FRAME_LEN + 300);
        assert_eq!(table.skipped(), &[2 * FRAME_LEN..2 * FRAME_LEN + 300]);
    }

    #[test]
    fn should_fail_when_junk_exceeds_the_resync_window() {
        let mut bytes = mono_frames(2);
        bytes.extend(vec![0x42u8; RESYNC_WINDOW + 10]);
        bytes.extend(mono_frames(2));

        match scan(&bytes, AncillaryStrategy::default()) {
            Err(SteganoError::Format { offset, .. }) => assert_eq!(offset, 2 * FRAME_LEN),
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn should_treat_short_junk_at_the_end_as_trailing_data() {
        let mut bytes = mono_frames(2);
        bytes.extend(vec![0x42u8; 100]);

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped(), &[2 * FRAME_LEN..2 * FRAME_LEN + 100]);
    }

    #[test]
    fn should_fail_without_any_frame() {
        assert!(matches!(
            scan(b"definitely not an mp3", AncillaryStrategy::default()),
            Err(SteganoError::Format { .. })
        ));
        assert!(matches!(
            scan(&[], AncillaryStrategy::default()),
            Err(SteganoError::Format { .. })
        ));
    }

    #[test]
    fn should_leave_room_for_the_crc() {
        let mut bytes = mono_frames(1);
        bytes[1] = 0xFA;

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.frames()[0].ancillary(), 23..FRAME_LEN);
    }

    #[test]
    fn should_use_the_stereo_side_info_size() {
        // 32 kbps, 48 kHz, joint stereo
        let mut bytes = vec![0u8; FRAME_LEN];
        bytes[..4].copy_from_slice(&[0xFF, 0xFB, 0x14, 0x40]);

        let table = scan(&bytes, AncillaryStrategy::default()).unwrap();
        assert_eq!(table.frames()[0].ancillary(), 36..FRAME_LEN);
    }

    #[test]
    fn should_only_use_the_tail_behind_the_audio_data() {
        let mut bytes = mono_frame(0, [576, 0], 0);
        bytes.extend(mono_frame(0, [0, 0], 0));

        let table = scan(&bytes, AncillaryStrategy::MainDataAware).unwrap();
        assert_eq!(table.frames()[0].ancillary(), 21 + 72..FRAME_LEN);
        assert_eq!(table.frames()[1].ancillary(), FRAME_LEN + 21..2 * FRAME_LEN);
    }

    #[test]
    fn should_follow_the_bit_reservoir() {
        // frame 0 holds 50 bytes of its own audio data,
        // frame 1 starts 10 bytes back inside slot 0 and takes 20 bytes
        let mut bytes = mono_frame(0, [400, 0], 0);
        bytes.extend(mono_frame(10, [100, 60], 0));

        let table = scan(&bytes, AncillaryStrategy::MainDataAware).unwrap();
        let frames = table.frames();
        assert_eq!(frames[0].ancillary_len, 0);
        assert_eq!(frames[0].ancillary().end, frames[0].end());
        assert_eq!(frames[1].ancillary_start, FRAME_LEN + 21 + 10);
        assert_eq!(frames[1].ancillary_len, 65);
        assert_eq!(table.total_ancillary_bytes(), 65);
    }

    #[test]
    fn should_find_nothing_when_audio_fills_every_slot() {
        let bytes = mono_frame(0, [600, 0], 0);
        let table = scan(&bytes, AncillaryStrategy::MainDataAware).unwrap();
        assert_eq!(table.total_ancillary_bytes(), 0);
    }
}
