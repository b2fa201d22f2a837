use percent_encoding::percent_decode_str;

use crate::metadata::TrackMetadata;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Derive display metadata from the source identifier alone.
///
/// Takes the final path segment of a URL or path, percent-decodes it, and
/// strips the extension and any leading `NN - ` track number. Used whenever
/// the tag yields nothing for a field, so both fields always carry text.
pub fn fallback_metadata(source_id: &str) -> TrackMetadata {
    let segment = source_id.rsplit('/').next().unwrap_or(source_id);
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let name = strip_track_number(strip_extension(&decoded)).trim();

    TrackMetadata {
        title: if name.is_empty() {
            UNKNOWN_TITLE.to_owned()
        } else {
            name.to_owned()
        },
        artist: UNKNOWN_ARTIST.to_owned(),
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        // A leading dot is a hidden-file name, not an extension separator.
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Strip a leading track number of the form `NN - `. A number without the
/// dash is part of the title and stays.
fn strip_track_number(name: &str) -> &str {
    let after_digits = name.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == name.len() {
        return name;
    }
    match after_digits.trim_start().strip_prefix('-') {
        Some(rest) => rest.trim_start(),
        None => name,
    }
}
