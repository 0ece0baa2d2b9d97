//! Base-32 text transform
//!
//! Thin wrapper over the RFC 4648 base-32 alphabet (`A-Z2-7`), uppercase and
//! unpadded. Decoding is strict: lowercase characters, padding characters and
//! non-zero trailing bits are all rejected, so every byte sequence has exactly
//! one accepted text form.

use crate::error::StrKeyError;
use alloc::string::String;
use alloc::vec::Vec;
use data_encoding::BASE32_NOPAD;

/// Encode raw bytes as an uppercase, unpadded base-32 string
pub fn encode(data: &[u8]) -> String {
    BASE32_NOPAD.encode(data)
}

/// Decode an uppercase, unpadded base-32 string into raw bytes
pub fn decode(text: &str) -> Result<Vec<u8>, StrKeyError> {
    Ok(BASE32_NOPAD.decode(text.as_bytes())?)
}
