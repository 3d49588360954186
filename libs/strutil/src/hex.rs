//! Hex encoding utility
//! Uppercase, two digits per byte, with an optional separator

use std::fmt::Write;

/// Encode bytes to an uppercase hex string, appending `separator` after
/// every byte (the last one included)
///
/// Example: `("AB", "-")` -> `"41-42-"`
pub fn to_hex_string(data: impl AsRef<[u8]>, separator: &str) -> String {
    let data = data.as_ref();
    let mut result = String::with_capacity(data.len() * (2 + separator.len()));
    for byte in data {
        // Writing to String buffer is infallible - no need for expect
        let _ = write!(&mut result, "{:02X}", byte);
        result.push_str(separator);
    }
    result
}

/// Encode bytes to uppercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn encode_upper(data: impl AsRef<[u8]>) -> String {
    to_hex_string(data, "")
}
