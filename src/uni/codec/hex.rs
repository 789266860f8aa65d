//! Hex text input.

use log::trace;

use crate::uni::types::error::Result;

/// Decode a hex string into bytes, ignoring embedded spaces.
///
/// # Errors
/// [`UniError::InvalidHex`](crate::UniError::InvalidHex) on odd length
/// or a non-hex digit.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| *c != ' ').collect();
    let bytes = hex::decode(&compact)?;
    trace!("Decoded {} hex digits into {} bytes", compact.len(), bytes.len());
    Ok(bytes)
}
