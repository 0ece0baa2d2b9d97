//! Core types for StrKey values

use crate::constants::{ACCOUNT_ID_TAG, SEED_TAG};
use serde::{Deserialize, Serialize};

/// Version byte identifying the semantic kind of an encoded payload
///
/// The tag is the first byte of the framed buffer and determines the first
/// character of the encoded string: `G` for account identifiers, `S` for
/// secret seeds. Tag values are fixed; a decoded tag that does not match the
/// variant expected by the caller is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionByte {
    /// Public account identifier
    AccountId,

    /// Secret seed
    Seed,
}

impl VersionByte {
    /// Raw tag byte written into the framed buffer
    pub const fn as_u8(self) -> u8 {
        match self {
            VersionByte::AccountId => ACCOUNT_ID_TAG,
            VersionByte::Seed => SEED_TAG,
        }
    }

    /// Parse a raw tag byte back into a known version
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            ACCOUNT_ID_TAG => Some(VersionByte::AccountId),
            SEED_TAG => Some(VersionByte::Seed),
            _ => None,
        }
    }
}
