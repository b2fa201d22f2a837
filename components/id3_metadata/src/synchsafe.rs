/// Decode a 4-byte synchsafe integer.
///
/// Synchsafe values carry 7 significant bits per byte so that size fields
/// can never contain the `0xFF` patterns an MPEG decoder would mistake for
/// frame sync. The high bit of each byte is masked off regardless of its
/// value. Input shorter than 4 bytes decodes to 0 rather than erroring.
pub fn decode_synchsafe(bytes: &[u8]) -> u32 {
    if bytes.len() < 4 {
        return 0;
    }

    ((bytes[0] as u32 & 0x7F) << 21)
        | ((bytes[1] as u32 & 0x7F) << 14)
        | ((bytes[2] as u32 & 0x7F) << 7)
        | (bytes[3] as u32 & 0x7F)
}
