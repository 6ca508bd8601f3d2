//! # Cryptographic Primitives
//!
//! Everything security-related in the SDK flows through here. Meridian
//! accepts two signature families and this module makes them look like one:
//!
//! - **Ed25519** — deterministic signatures over the raw message. Fast,
//!   boring, and nobody has broken it.
//! - **ECDSA over secp256k1** — signatures over the SHA-256 digest of the
//!   message, with RFC 6979 deterministic nonces. Kept for compatibility
//!   with the EVM-shaped half of the world.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Key material and signatures are thin, type-safe wrappers around
//! `ed25519-dalek` and `secp256k1`. The only hand-written encoding is the
//! DER shell in [`der`] — two fixed PKCS#8/SubjectPublicKeyInfo shapes, no
//! cryptography inside, every byte checked on the way in.

pub mod der;
pub mod hash;
pub mod keys;

// Re-export the things people actually need so they don't have to memorize
// the module hierarchy.
pub use hash::{sha256, sha256_array};
pub use keys::{KeyError, KeyKind, PrivateKey, PublicKey};
