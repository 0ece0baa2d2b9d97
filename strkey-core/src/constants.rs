//! Constants for the StrKey text format

/// Version tag for account identifiers ('G' prefix in encoded form)
pub const ACCOUNT_ID_TAG: u8 = 0x30;

/// Version tag for secret seeds ('S' prefix in encoded form)
pub const SEED_TAG: u8 = 0x90;

/// Size of the version tag in bytes
pub const VERSION_LEN: usize = 1;

/// Size of the trailing checksum in bytes
pub const CHECKSUM_LEN: usize = 2;

/// Minimum decoded length: version tag + empty payload + checksum
pub const MIN_DECODED_LEN: usize = VERSION_LEN + CHECKSUM_LEN;

/// CRC-16/XMODEM generator polynomial
pub const CRC_POLYNOMIAL: u16 = 0x1021;

/// CRC-16/XMODEM initial register value
pub const CRC_INIT: u16 = 0x0000;
