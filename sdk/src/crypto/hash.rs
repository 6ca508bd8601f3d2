//! SHA-256 helpers.
//!
//! Meridian's ECDSA dialect signs the SHA-256 digest of the message — the
//! hash is part of the signature contract, not a configurable option. These
//! two functions are the only hashing the SDK does.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns the 32-byte digest as a `Vec<u8>` for callers that immediately
/// pass it along as a slice.
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// Same as [`sha256`] but typed for callers that need `[u8; 32]` — notably
/// the secp256k1 message constructor.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
