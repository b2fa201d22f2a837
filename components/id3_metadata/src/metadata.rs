use serde::{Deserialize, Serialize};

use crate::frames::TagFields;

/// Resolved display metadata for a track. Both fields always carry usable
/// text; a field the tag could not provide holds its fallback value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
}

impl TrackMetadata {
    /// Merge parsed tag fields over fallback metadata, field by field.
    ///
    /// Each field independently keeps the parsed value when one exists and
    /// the fallback otherwise, so a tag carrying only a title still gets a
    /// filename-derived artist and vice versa.
    pub fn merge(fields: TagFields, fallback: TrackMetadata) -> TrackMetadata {
        TrackMetadata {
            title: fields.title.unwrap_or(fallback.title),
            artist: fields.artist.unwrap_or(fallback.artist),
        }
    }

    /// "Artist - Title" line for single-line displays.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
