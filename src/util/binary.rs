//! Converting between bytes and strings of binary digits, e.g. `"00010011"`.

use crate::error::EncodingError;

/// Number of digits in a binary byte string.
pub const DIGITS: usize = 8;

/// Parse exactly eight binary digits into a byte.
pub fn parse_byte(s: &str) -> Result<u8, EncodingError> {
    let error = |reason| EncodingError {
        input: s.to_string(),
        reason,
    };

    if s.chars().count() != DIGITS {
        return Err(error("expected exactly 8 binary digits"));
    }
    if !s.chars().all(|c| c == '0' || c == '1') {
        return Err(error("only the digits 0 and 1 are allowed"));
    }

    u8::from_str_radix(s, 2).map_err(|_| error("does not fit in 8 bits"))
}

/// Format a byte as eight binary digits.
pub fn format_byte(byte: u8) -> String {
    format!("{:08b}", byte)
}
