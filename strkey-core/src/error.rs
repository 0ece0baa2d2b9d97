//! Error types for StrKey operations

/// Errors that can occur while decoding a StrKey string
///
/// Encoding operates purely on in-memory buffers and has no error path.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrKeyError {
    /// Input is not valid unpadded uppercase base-32
    #[cfg_attr(feature = "std", error("Invalid base-32 encoding at position {0}"))]
    InvalidEncoding(usize),

    /// Decoded input too short to carry a version tag and checksum
    #[cfg_attr(
        feature = "std",
        error("Decoded input too short: expected at least {expected} bytes, got {actual}")
    )]
    TooShort {
        /// The minimum number of decoded bytes required.
        expected: usize,
        /// The number of bytes actually decoded.
        actual: usize,
    },

    /// Decoded version tag does not match the requested kind
    #[cfg_attr(
        feature = "std",
        error("Version byte is invalid: expected {expected:#04x}, got {actual:#04x}")
    )]
    InvalidVersionByte {
        /// The tag required by the decode operation.
        expected: u8,
        /// The tag found in the decoded bytes.
        actual: u8,
    },

    /// Trailing checksum does not match the framed bytes
    #[cfg_attr(
        feature = "std",
        error("Checksum mismatch: expected {expected:#06x}, got {actual:#06x}")
    )]
    InvalidChecksum {
        /// The checksum carried by the encoded string.
        expected: u16,
        /// The checksum recomputed from the decoded bytes.
        actual: u16,
    },
}

impl From<data_encoding::DecodeError> for StrKeyError {
    fn from(err: data_encoding::DecodeError) -> Self {
        StrKeyError::InvalidEncoding(err.position)
    }
}
