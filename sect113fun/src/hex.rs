//! Utility module for hex encoding and decoding.
//!
//! Curve constants are written down as fixed-width big-endian hex strings and
//! decoded with [`decode_array`] when a [`Curve`] is constructed.
//!
//! [`Curve`]: crate::Curve
#[cfg(feature = "alloc")]
use alloc::string::String;

use core::fmt;
/// Error representing a failed conversion from hex into the bytes for the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// The string was not a valid hex string.
    InvalidHex,
    /// The string was not the right length for the target type.
    InvalidLength,
    /// The bytes did not encode a valid value for the target type.
    InvalidEncoding,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use HexError::*;
        match self {
            InvalidHex => write!(f, "invalid hex string"),
            InvalidLength => write!(f, "hex string had an invalid length"),
            InvalidEncoding => write!(f, "hex value did not encode the expected type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

#[doc(hidden)]
pub fn hex_val(c: u8) -> Result<u8, HexError> {
    match c {
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(HexError::InvalidHex),
    }
}

#[cfg(feature = "alloc")]
/// Encode some bytes as a lowercase hex String.
///
/// # Examples
/// ```
/// use sect113fun::{hex, SECT113R2};
/// let a = hex::decode_array::<15>(SECT113R2.a).unwrap();
/// assert_eq!(hex::encode(&a), "00689918dbec7e5a0dd6dfc0aa55c7");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    use core::fmt::Write;
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}

/// Decode some hex into a fixed length array.
///
/// Both upper and lower case digits are accepted. The string must be exactly
/// `2 * N` characters long.
///
/// # Examples
/// ```
/// use sect113fun::hex;
/// let bytes: [u8; 3] = hex::decode_array("00ff7A").unwrap();
/// assert_eq!(bytes, [0x00, 0xff, 0x7a]);
/// assert_eq!(hex::decode_array::<4>("00ff7A"), Err(hex::HexError::InvalidLength));
/// ```
pub fn decode_array<const N: usize>(hex: &str) -> Result<[u8; N], HexError> {
    let mut bytes = [0u8; N];
    if hex.len() % 2 != 0 {
        return Err(HexError::InvalidHex);
    }
    if hex.len() != N * 2 {
        return Err(HexError::InvalidLength);
    }
    for (hex_byte, byte) in hex.as_bytes().chunks(2).zip(bytes.iter_mut()) {
        *byte = hex_val(hex_byte[0])? << 4 | hex_val(hex_byte[1])?
    }
    Ok(bytes)
}

/// Decode a big-endian hex integer of at most 16 bytes into a `u128`.
///
/// Leading zero bytes are allowed as long as the whole encoding fits in 16
/// bytes. An empty string is rejected.
///
/// # Examples
/// ```
/// use sect113fun::hex;
/// assert_eq!(hex::decode_u128("02"), Ok(2));
/// assert_eq!(hex::decode_u128("0102"), Ok(0x0102));
/// assert!(hex::decode_u128("").is_err());
/// ```
pub fn decode_u128(hex: &str) -> Result<u128, HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::InvalidHex);
    }
    if hex.is_empty() || hex.len() > 32 {
        return Err(HexError::InvalidLength);
    }
    let mut value = 0u128;
    for hex_byte in hex.as_bytes().chunks(2) {
        value = value << 8 | u128::from(hex_val(hex_byte[0])? << 4 | hex_val(hex_byte[1])?);
    }
    Ok(value)
}
