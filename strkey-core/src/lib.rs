//! # StrKey Core
//!
//! A checksummed, self-describing base-32 text encoding for account addresses
//! and secret seeds.
//!
//! An encoded string represents `[version tag] || payload || checksum`,
//! rendered as uppercase unpadded RFC 4648 base-32. The one-byte tag makes a
//! string self-describing (an account address cannot be mistaken for a seed),
//! and the 2-byte CRC-16/XMODEM checksum makes it self-validating (corruption
//! and typos are rejected instead of silently accepted).
//!
//! ## Modules
//!
//! - `constants`: Text format constants (tag values, sizes, CRC parameters)
//! - `types`: Core types (VersionByte)
//! - `error`: Error taxonomy (StrKeyError)
//! - `checksum`: CRC-16/XMODEM engine
//! - `base32`: Base-32 text transform
//! - `encoder`: Check-encoding
//! - `decoder`: Strict check-decoding

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod base32;
pub mod checksum;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use decoder::{decode_account_id, decode_check, decode_seed};
pub use encoder::{encode_account_id, encode_check, encode_seed};
pub use error::StrKeyError;
pub use types::VersionByte;

/// Result type alias for StrKey operations
pub type Result<T> = core::result::Result<T, StrKeyError>;
