use crate::synchsafe::decode_synchsafe;

/// Length of the fixed ID3v2 tag header: "ID3", version, revision, flags,
/// synchsafe size.
pub const TAG_HEADER_LEN: usize = 10;

/// Header of an ID3v2 tag found at the start of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    /// Major version byte (2, 3 or 4 in the wild).
    pub version: u8,
    /// Declared size of the tag body following the header, in bytes.
    pub declared_size: u32,
}

impl TagHeader {
    /// End of the tag region within a buffer of the given length. The
    /// declared size is not trusted past the end of the buffer.
    pub fn region_end(&self, buffer_len: usize) -> usize {
        buffer_len.min(TAG_HEADER_LEN + self.declared_size as usize)
    }
}

/// Check for an ID3v2 tag at the start of the buffer.
///
/// `None` means the tag is absent, which callers treat as "use fallback
/// metadata", not as an error.
pub fn locate_tag(buffer: &[u8]) -> Option<TagHeader> {
    if buffer.len() < TAG_HEADER_LEN {
        return None;
    }
    if &buffer[..3] != b"ID3" {
        return None;
    }

    Some(TagHeader {
        version: buffer[3],
        declared_size: decode_synchsafe(&buffer[6..10]),
    })
}
