//! Latin-1 family case mapping
//!
//! Uppercase and lowercase conversion following the casing band shared by
//! Windows-1250, Windows-1252, ISO-8859-1 and ISO-8859-2: accented capitals
//! live at `0xC0..=0xDF`, their lowercase forms 32 positions higher. Bytes
//! outside the band use ASCII casing.
//!
//! Two views of the same rules are provided:
//!
//! - byte functions for raw 8-bit encoded buffers,
//! - `char`/`str` functions that read Rust text as Latin-1 (code points up to
//!   `U+00FF`) and leave every other character unchanged.
//!
//! ```rust
//! use strutil::case::{to_lower_case, to_upper_case};
//!
//! assert_eq!(to_upper_case("ação"), "AÇÃO");
//! assert_eq!(to_lower_case("ÉLAN"), "élan");
//! ```

/// Start of the lowercase accented band
const LOWER_BAND_START: u8 = 0xE0;
/// Uppercase accented band
const UPPER_BAND: std::ops::RangeInclusive<u8> = 0xC0..=0xDF;
/// Distance between a capital and its lowercase form
const CASE_OFFSET: u8 = 0x20;

#[inline]
fn has_high_bit(byte: u8) -> bool {
    byte & 0x80 != 0
}

/// Convert a byte to uppercase
///
/// Bytes `0xE0..=0xFF` map 32 positions down; that includes `0xF7` -> `0xD7`
/// and `0xFF` -> `0xDF`.
#[inline]
pub fn char_to_upper(byte: u8) -> u8 {
    if has_high_bit(byte) && byte >= LOWER_BAND_START {
        return byte - CASE_OFFSET;
    }
    byte.to_ascii_uppercase()
}

/// Convert a byte to lowercase
#[inline]
pub fn char_to_lower(byte: u8) -> u8 {
    if has_high_bit(byte) && UPPER_BAND.contains(&byte) {
        return byte + CASE_OFFSET;
    }
    byte.to_ascii_lowercase()
}

/// Apply `map` to a character read as Latin-1
#[inline]
fn map_latin1(c: char, map: fn(u8) -> u8) -> char {
    match u8::try_from(c) {
        Ok(byte) => char::from(map(byte)),
        Err(_) => c,
    }
}

/// Uppercase a character in the Latin-1 range; other characters are unchanged
#[inline]
pub fn latin1_to_upper(c: char) -> char {
    map_latin1(c, char_to_upper)
}

/// Lowercase a character in the Latin-1 range; other characters are unchanged
#[inline]
pub fn latin1_to_lower(c: char) -> char {
    map_latin1(c, char_to_lower)
}

/// Uppercase text under the Latin-1 view of each character
pub fn to_upper_case(text: &str) -> String {
    text.chars().map(latin1_to_upper).collect()
}

/// Lowercase text under the Latin-1 view of each character
pub fn to_lower_case(text: &str) -> String {
    text.chars().map(latin1_to_lower).collect()
}

/// Uppercase an 8-bit encoded buffer
pub fn to_upper_bytes(data: &[u8]) -> Vec<u8> {
    data.iter().copied().map(char_to_upper).collect()
}

/// Lowercase an 8-bit encoded buffer
pub fn to_lower_bytes(data: &[u8]) -> Vec<u8> {
    data.iter().copied().map(char_to_lower).collect()
}
