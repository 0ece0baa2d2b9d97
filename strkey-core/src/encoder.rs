//! Check-encoding
//!
//! Byte layout before the text transform:
//! 1. Version tag (1 byte)
//! 2. Payload (variable length)
//! 3. Checksum (2 bytes, CRC-16/XMODEM over tag + payload, little-endian)

use crate::base32;
use crate::checksum::checksum;
use crate::constants::{CHECKSUM_LEN, VERSION_LEN};
use crate::types::VersionByte;
use alloc::string::String;
use bytes::{BufMut, BytesMut};

/// Encode a payload under the given version tag
///
/// The checksum covers the version tag and payload together, so a corrupted
/// tag is caught on decode even when the payload survives intact. Payloads of
/// any length are accepted, including empty ones. Encoding operates purely on
/// in-memory buffers and cannot fail.
pub fn encode_check(version: VersionByte, payload: &[u8]) -> String {
    let mut buf = BytesMut::with_capacity(VERSION_LEN + payload.len() + CHECKSUM_LEN);

    buf.put_u8(version.as_u8());
    buf.put_slice(payload);

    let check = checksum(&buf);
    buf.put_slice(&check);

    base32::encode(&buf)
}

/// Encode an account identifier
pub fn encode_account_id(payload: &[u8]) -> String {
    encode_check(VersionByte::AccountId, payload)
}

/// Encode a secret seed
pub fn encode_seed(payload: &[u8]) -> String {
    encode_check(VersionByte::Seed, payload)
}
