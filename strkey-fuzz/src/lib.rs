//! Fuzzing placeholder for strkey-core decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

pub fn fuzz_decode(data: &[u8]) {
    use strkey_core::{decode_check, VersionByte};

    // Try to decode - should never panic
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = decode_check(VersionByte::AccountId, text);
        let _ = decode_check(VersionByte::Seed, text);
    }
}

pub fn fuzz_checksum(data: &[u8]) {
    use strkey_core::checksum::crc16_xmodem;

    // Pure function - should never panic on any input
    let _ = crc16_xmodem(data);
}
