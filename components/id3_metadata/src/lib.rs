mod fallback;
mod frames;
mod header;
mod metadata;
mod synchsafe;
mod text;

pub use fallback::{fallback_metadata, UNKNOWN_ARTIST, UNKNOWN_TITLE};
pub use frames::{walk_frames, TagFields};
pub use header::{locate_tag, TagHeader, TAG_HEADER_LEN};
pub use metadata::TrackMetadata;
pub use synchsafe::decode_synchsafe;
pub use text::decode_text_frame;

/// Extract title and artist from the leading ID3v2 tag of an audio buffer.
///
/// A buffer without a tag yields empty fields; a truncated or corrupt tag
/// yields whatever frames could be read before the damage.
pub fn extract_tag_fields(buffer: &[u8]) -> TagFields {
    match locate_tag(buffer) {
        Some(tag_header) => walk_frames(buffer, &tag_header),
        None => TagFields::default(),
    }
}
