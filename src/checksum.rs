//! # Checksum Utilities
//!
//! The NMEA 0183 checksum is the XOR of every byte between the `$` start marker
//! and the `*` end marker, written after `*` as two hexadecimal digits.

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The body is everything between `$` and `*`, excluding both markers.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// assert_eq!(checksum(b""), 0x00);
/// ```
pub fn checksum(body: &[u8]) -> u8 {
    body.iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Converts a single hexadecimal digit to its value.
///
/// Accepts `0-9`, `A-F` and `a-f`. Anything else yields [`None`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::hex_value;
///
/// assert_eq!(hex_value(b'7'), Some(7));
/// assert_eq!(hex_value(b'b'), Some(11));
/// assert_eq!(hex_value(b'B'), Some(11));
/// assert_eq!(hex_value(b'g'), None);
/// ```
pub fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Decodes the two declared checksum digits that follow `*`.
///
/// Returns [`None`] if either digit is not hexadecimal. Since every computed
/// checksum is a valid `u8`, a [`None`] here can never match one.
pub(crate) fn decode_checksum(high: u8, low: u8) -> Option<u8> {
    Some(hex_value(high)? << 4 | hex_value(low)?)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}
