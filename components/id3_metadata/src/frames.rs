use crate::header::{TagHeader, TAG_HEADER_LEN};
use crate::synchsafe::decode_synchsafe;
use crate::text::decode_text_frame;

/// Frame header: 4-byte id, 4-byte size, 2 flag bytes.
const FRAME_HEADER_LEN: usize = 10;

const TITLE_FRAME: &[u8; 4] = b"TIT2";
const ARTIST_FRAME: &[u8; 4] = b"TPE1";

/// Text values found while walking a tag's frames. `None` means the frame
/// was missing or its body did not decode to anything usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields {
    pub title: Option<String>,
    pub artist: Option<String>,
}

impl TagFields {
    fn is_complete(&self) -> bool {
        self.title.is_some() && self.artist.is_some()
    }
}

/// Walk the frames of a located tag, collecting title and artist.
///
/// The walk stops at the first sign of padding or corruption: a malformed
/// frame id, a zero size, or a body that would cross the tag region end.
/// Fields extracted before that point are kept. The cursor advances by a
/// strictly positive amount each step, so the walk always terminates.
pub fn walk_frames(buffer: &[u8], tag_header: &TagHeader) -> TagFields {
    let region_end = tag_header.region_end(buffer.len());
    let mut fields = TagFields::default();
    let mut offset = TAG_HEADER_LEN;

    while offset + FRAME_HEADER_LEN <= region_end {
        let frame_id = &buffer[offset..offset + 4];
        if !is_frame_id(frame_id) {
            // Zeroed or blank bytes mark the padding after the last frame.
            break;
        }

        let size = frame_size(&buffer[offset + 4..offset + 8], tag_header.version);
        if size == 0 {
            break;
        }

        let body_start = offset + FRAME_HEADER_LEN;
        let body_end = body_start + size;
        if body_end > region_end {
            // Truncated or corrupt frame; keep what was already found.
            break;
        }

        if frame_id == TITLE_FRAME && fields.title.is_none() {
            fields.title = decode_text_frame(&buffer[body_start..body_end]);
        } else if frame_id == ARTIST_FRAME && fields.artist.is_none() {
            fields.artist = decode_text_frame(&buffer[body_start..body_end]);
        }

        if fields.is_complete() {
            break;
        }
        offset = body_end;
    }

    fields
}

/// Version 4 frame sizes are synchsafe; version 3 and earlier use a plain
/// big-endian integer. The two encodings diverge for sizes over 127 bytes.
fn frame_size(bytes: &[u8], version: u8) -> usize {
    if version == 4 {
        decode_synchsafe(bytes) as usize
    } else {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
    }
}

fn is_frame_id(id: &[u8]) -> bool {
    !id.contains(&0) && !id.iter().all(|b| b.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate_tag;
    use crate::test_support::{
        frame_with_size, latin1_body, synchsafe_bytes, synthetic_tag, text_frame,
    };

    fn walk(tag: &[u8]) -> TagFields {
        let tag_header = locate_tag(tag).expect("test tag should have a header");
        walk_frames(tag, &tag_header)
    }

    #[test]
    fn extracts_title_from_v23_latin1_frame() {
        let tag = synthetic_tag(3, &[text_frame(b"TIT2", &latin1_body("Hello"))]);
        let fields = walk(&tag);
        assert_eq!(fields.title.as_deref(), Some("Hello"));
        assert_eq!(fields.artist, None);
    }

    #[test]
    fn first_occurrence_wins_for_duplicate_frames() {
        let tag = synthetic_tag(
            3,
            &[
                text_frame(b"TIT2", &latin1_body("First")),
                text_frame(b"TIT2", &latin1_body("Second")),
                text_frame(b"TPE1", &latin1_body("Artist")),
            ],
        );
        assert_eq!(walk(&tag).title.as_deref(), Some("First"));
    }

    #[test]
    fn undecodable_frame_leaves_room_for_a_later_one() {
        let tag = synthetic_tag(
            3,
            &[
                text_frame(b"TIT2", &[0x03, 0xC3]), // broken UTF-8
                text_frame(b"TIT2", &latin1_body("Recovered")),
            ],
        );
        assert_eq!(walk(&tag).title.as_deref(), Some("Recovered"));
    }

    #[test]
    fn oversized_frame_stops_walk_but_keeps_earlier_fields() {
        let good = text_frame(b"TIT2", &latin1_body("Kept"));
        // Declared size far beyond the tag region.
        let bad = frame_with_size(b"TPE1", 4096u32.to_be_bytes(), &latin1_body("Lost"));
        let tag = synthetic_tag(3, &[good, bad]);

        let fields = walk(&tag);
        assert_eq!(fields.title.as_deref(), Some("Kept"));
        assert_eq!(fields.artist, None);
    }

    #[test]
    fn zero_size_frame_ends_the_walk() {
        let tag = synthetic_tag(
            3,
            &[
                frame_with_size(b"TIT2", [0, 0, 0, 0], &[]),
                text_frame(b"TPE1", &latin1_body("Unreached")),
            ],
        );
        assert_eq!(walk(&tag), TagFields::default());
    }

    #[test]
    fn padding_after_frames_ends_the_walk() {
        let mut frames = vec![text_frame(b"TIT2", &latin1_body("Padded"))];
        frames.push(vec![0u8; 32]);
        let tag = synthetic_tag(3, &frames);

        let fields = walk(&tag);
        assert_eq!(fields.title.as_deref(), Some("Padded"));
    }

    #[test]
    fn v24_frame_sizes_are_synchsafe() {
        // 200-byte body; a plain big-endian read of the synchsafe size
        // would see 328 and walk straight past the second frame.
        let mut body = latin1_body("Synchsafe");
        body.resize(200, 0);
        let frames = vec![
            frame_with_size(b"TIT2", synchsafe_bytes(200), &body),
            text_frame(b"TPE1", &latin1_body("After")),
        ];
        let tag = synthetic_tag(4, &frames);

        let fields = walk(&tag);
        assert_eq!(fields.title.as_deref(), Some("Synchsafe"));
        assert_eq!(fields.artist.as_deref(), Some("After"));
    }

    #[test]
    fn v23_sizes_over_127_bytes_are_plain_big_endian() {
        let mut body = latin1_body("Long");
        body.resize(200, 0);
        let frames = vec![
            frame_with_size(b"TIT2", 200u32.to_be_bytes(), &body),
            text_frame(b"TPE1", &latin1_body("After")),
        ];
        let tag = synthetic_tag(3, &frames);

        let fields = walk(&tag);
        assert_eq!(fields.title.as_deref(), Some("Long"));
        assert_eq!(fields.artist.as_deref(), Some("After"));
    }

    #[test]
    fn unrelated_frames_are_skipped() {
        let tag = synthetic_tag(
            3,
            &[
                text_frame(b"TALB", &latin1_body("Some Album")),
                text_frame(b"TPE1", &latin1_body("Artist")),
            ],
        );

        let fields = walk(&tag);
        assert_eq!(fields.title, None);
        assert_eq!(fields.artist.as_deref(), Some("Artist"));
    }
}
