//! Decoding of ID3v2 text frame bodies.
//!
//! The first body byte selects the encoding; the rest is the payload.
//! Decode failures are expected data, not errors, so everything here
//! reports `None` instead of propagating a failure.

const ENCODING_LATIN1: u8 = 0;
const ENCODING_UTF16_BOM: u8 = 1;
const ENCODING_UTF16_BE: u8 = 2;

/// Decode a text frame body to display text.
///
/// Marker 0 is Latin-1, 1 is UTF-16 with BOM sniffing, 2 is UTF-16BE
/// without a BOM, 3 is UTF-8. Unknown markers are read as UTF-8 as well.
/// Embedded NUL terminators are stripped and the result trimmed; an empty
/// or undecodable payload yields `None`.
pub fn decode_text_frame(body: &[u8]) -> Option<String> {
    let (&encoding, payload) = body.split_first()?;

    let decoded = match encoding {
        ENCODING_LATIN1 => Some(decode_latin1(payload)),
        ENCODING_UTF16_BOM => decode_utf16_with_bom(payload),
        ENCODING_UTF16_BE => decode_utf16(payload, u16::from_be_bytes),
        _ => String::from_utf8(payload.to_vec()).ok(),
    }?;

    normalize(&decoded)
}

fn normalize(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|&c| c != '\0').collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

// Latin-1 maps byte-for-byte onto the first 256 code points.
fn decode_latin1(payload: &[u8]) -> String {
    payload.iter().map(|&b| b as char).collect()
}

fn decode_utf16_with_bom(payload: &[u8]) -> Option<String> {
    match payload {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        // No byte-order mark: taggers in the wild write little-endian.
        _ => decode_utf16(payload, u16::from_le_bytes),
    }
}

fn decode_utf16(payload: &[u8], combine: fn([u8; 2]) -> u16) -> Option<String> {
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}
