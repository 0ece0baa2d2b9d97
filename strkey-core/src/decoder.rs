//! Strict check-decoding
//!
//! Validation runs in a fixed order so a string failing several checks at
//! once reports a stable error: text decode, decoded length, version tag,
//! checksum.

use crate::base32;
use crate::checksum::crc16_xmodem;
use crate::constants::{CHECKSUM_LEN, MIN_DECODED_LEN, VERSION_LEN};
use crate::error::StrKeyError;
use crate::types::VersionByte;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Decode a string and verify it carries the expected version tag
///
/// Returns the payload bytes exactly as they were encoded. The returned
/// `Bytes` is a slice of the decoded buffer; no second copy is made.
pub fn decode_check(expected: VersionByte, encoded: &str) -> Result<Bytes, StrKeyError> {
    let decoded = Bytes::from(base32::decode(encoded)?);

    if decoded.len() < MIN_DECODED_LEN {
        #[cfg(feature = "logging")]
        warn!(
            "Rejecting {}-byte input: too short for a version tag and checksum",
            decoded.len()
        );

        return Err(StrKeyError::TooShort {
            expected: MIN_DECODED_LEN,
            actual: decoded.len(),
        });
    }

    // The framed prefix is the tag + payload, the unit the checksum covers
    let framed_end = decoded.len() - CHECKSUM_LEN;
    let version = decoded[0];

    if version != expected.as_u8() {
        #[cfg(feature = "logging")]
        warn!(
            "Version byte mismatch: expected {:#04x}, got {:#04x}",
            expected.as_u8(),
            version
        );

        return Err(StrKeyError::InvalidVersionByte {
            expected: expected.as_u8(),
            actual: version,
        });
    }

    let actual = crc16_xmodem(&decoded[..framed_end]);
    let wire = u16::from_le_bytes([decoded[framed_end], decoded[framed_end + 1]]);

    if actual != wire {
        #[cfg(feature = "logging")]
        warn!(
            "Checksum mismatch: wire {:#06x}, computed {:#06x}",
            wire, actual
        );

        return Err(StrKeyError::InvalidChecksum {
            expected: wire,
            actual,
        });
    }

    #[cfg(feature = "logging")]
    debug!(
        "Decoded {} payload bytes under tag {:#04x}",
        framed_end - VERSION_LEN,
        version
    );

    Ok(decoded.slice(VERSION_LEN..framed_end))
}

/// Decode an account identifier
pub fn decode_account_id(encoded: &str) -> Result<Bytes, StrKeyError> {
    decode_check(VersionByte::AccountId, encoded)
}

/// Decode a secret seed
pub fn decode_seed(encoded: &str) -> Result<Bytes, StrKeyError> {
    decode_check(VersionByte::Seed, encoded)
}
