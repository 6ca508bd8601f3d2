//! # Key Management
//!
//! The dual-family key abstraction: one [`PrivateKey`]/[`PublicKey`] pair of
//! types covering both signature dialects Meridian accepts.
//!
//! Every algorithm-specific behavior — generation, raw and DER encoding,
//! signing, verification — dispatches on the [`KeyKind`] tag carried inside
//! the key. Callers never branch on the family themselves; they ask the key.
//!
//! ## The two families
//!
//! - **Ed25519** signs the raw message. 32-byte seeds, 32-byte public keys,
//!   64-byte deterministic signatures. No nonce management, no k-value
//!   disasters.
//! - **ECDSA secp256k1** signs the SHA-256 digest of the message. 32-byte
//!   scalars, 33-byte compressed points (65-byte uncompressed accepted on
//!   input), 64-byte compact signatures with RFC 6979 deterministic nonces.
//!   The SHA-256 pairing is part of the protocol, not an option.
//!
//! ## Security considerations
//!
//! - Key generation uses the OS RNG (`OsRng`). If that is compromised,
//!   these keys are the least of your worries.
//! - Private key bytes are never logged and never appear in `Debug` output.
//!   If you add logging to this module, you will be asked to leave.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use ed25519_dalek::{
    Signature as Ed25519Signature, Signer, SigningKey, Verifier, VerifyingKey,
};
use rand::rngs::OsRng;
use secp256k1::{Message, Secp256k1, SecretKey};
use thiserror::Error;

use super::der;
use super::hash::sha256_array;
use crate::config::{
    ECDSA_COMPRESSED_POINT_LENGTH, ECDSA_SCALAR_LENGTH, ECDSA_UNCOMPRESSED_POINT_LENGTH,
    ED25519_KEY_LENGTH, SIGNATURE_LENGTH,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during key operations.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The requested algorithm name is not one of the two supported families.
    #[error("unknown key algorithm '{0}': use 'ed25519' or 'ecdsa'")]
    UnknownAlgorithm(String),

    /// The bytes (raw, hex, or DER) do not decode to a valid key of the
    /// expected family.
    #[error("invalid key encoding: {reason}")]
    InvalidEncoding {
        /// What specifically went wrong.
        reason: String,
    },

    /// A signature did not verify against the given public key and message.
    #[error("signature verification failed")]
    InvalidSignature,
}

impl KeyError {
    fn encoding(reason: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            reason: reason.into(),
        }
    }
}

impl From<der::DerError> for KeyError {
    fn from(e: der::DerError) -> Self {
        KeyError::encoding(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// KeyKind
// ---------------------------------------------------------------------------

/// The signature family a key belongs to. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Ed25519 — signatures over the raw message.
    Ed25519,
    /// ECDSA over secp256k1 — signatures over SHA-256(message).
    EcdsaSecp256k1,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::EcdsaSecp256k1 => write!(f, "ECDSA(secp256k1)"),
        }
    }
}

impl FromStr for KeyKind {
    type Err = KeyError;

    /// Accepts the spellings callers actually type. Anything else is an
    /// error, not a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ed25519" => Ok(Self::Ed25519),
            "ecdsa" | "secp256k1" | "ecdsa-secp256k1" => Ok(Self::EcdsaSecp256k1),
            other => Err(KeyError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Strip an optional `0x` prefix from hex input.
fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

enum PrivateKeyInner {
    Ed25519(SigningKey),
    Ecdsa(SecretKey),
}

/// A Meridian private key: either an Ed25519 signing key or a secp256k1
/// secret scalar. The family is fixed when the key is constructed and every
/// operation dispatches on it internally.
///
/// # Examples
///
/// ```
/// use meridian_sdk::crypto::keys::{KeyKind, PrivateKey};
///
/// let key = PrivateKey::generate(KeyKind::Ed25519);
/// let signature = key.sign(b"claim airdrop 0.0.1001");
/// key.public_key().verify(&signature, b"claim airdrop 0.0.1001").unwrap();
/// ```
pub struct PrivateKey {
    inner: PrivateKeyInner,
}

impl PrivateKey {
    /// Generate a fresh key of the requested family using the OS RNG.
    pub fn generate(kind: KeyKind) -> Self {
        match kind {
            KeyKind::Ed25519 => Self::generate_ed25519(),
            KeyKind::EcdsaSecp256k1 => Self::generate_ecdsa(),
        }
    }

    /// Generate a fresh Ed25519 key.
    pub fn generate_ed25519() -> Self {
        Self {
            inner: PrivateKeyInner::Ed25519(SigningKey::generate(&mut OsRng)),
        }
    }

    /// Generate a fresh ECDSA secp256k1 key.
    pub fn generate_ecdsa() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, _) = secp.generate_keypair(&mut OsRng);
        Self {
            inner: PrivateKeyInner::Ecdsa(secret_key),
        }
    }

    /// Load an Ed25519 private key from a 32-byte raw seed.
    pub fn from_bytes_ed25519(seed: &[u8]) -> Result<Self, KeyError> {
        if seed.len() != ED25519_KEY_LENGTH {
            return Err(KeyError::encoding(format!(
                "Ed25519 seed must be exactly {} bytes, got {}",
                ED25519_KEY_LENGTH,
                seed.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(seed);
        Ok(Self {
            inner: PrivateKeyInner::Ed25519(SigningKey::from_bytes(&arr)),
        })
    }

    /// Load an ECDSA secp256k1 private key from a 32-byte scalar.
    ///
    /// Fails if the length is wrong or the scalar is not in the valid range
    /// for the curve (zero, or ≥ the group order).
    pub fn from_bytes_ecdsa(scalar: &[u8]) -> Result<Self, KeyError> {
        if scalar.len() != ECDSA_SCALAR_LENGTH {
            return Err(KeyError::encoding(format!(
                "ECDSA (secp256k1) scalar must be exactly {} bytes, got {}",
                ECDSA_SCALAR_LENGTH,
                scalar.len()
            )));
        }
        let secret_key = SecretKey::from_slice(scalar)
            .map_err(|_| KeyError::encoding("bytes are not a valid secp256k1 scalar"))?;
        Ok(Self {
            inner: PrivateKeyInner::Ecdsa(secret_key),
        })
    }

    /// Load a private key from DER bytes (PKCS#8), auto-detecting the family
    /// from the algorithm identifier. Only secp256k1 is accepted for
    /// elliptic-curve keys.
    pub fn from_der(der_bytes: &[u8]) -> Result<Self, KeyError> {
        match der::parse_private_key(der_bytes)? {
            der::DerPrivateKey::Ed25519(seed) => Self::from_bytes_ed25519(&seed),
            der::DerPrivateKey::EcdsaSecp256k1(scalar) => Self::from_bytes_ecdsa(&scalar),
        }
    }

    /// Interpret a hex string (optional `0x` prefix) as an Ed25519 seed.
    pub fn from_str_ed25519(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_str))
            .map_err(|e| KeyError::encoding(format!("invalid hex for Ed25519 seed: {}", e)))?;
        Self::from_bytes_ed25519(&bytes)
    }

    /// Interpret a hex string (optional `0x` prefix) as a secp256k1 scalar.
    pub fn from_str_ecdsa(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_str))
            .map_err(|e| KeyError::encoding(format!("invalid hex for ECDSA scalar: {}", e)))?;
        Self::from_bytes_ecdsa(&bytes)
    }

    /// Interpret a hex string (optional `0x` prefix) as DER bytes.
    pub fn from_str_der(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_str))
            .map_err(|e| KeyError::encoding(format!("invalid hex for DER private key: {}", e)))?;
        Self::from_der(&bytes)
    }

    /// Which family this key belongs to.
    pub fn kind(&self) -> KeyKind {
        match self.inner {
            PrivateKeyInner::Ed25519(_) => KeyKind::Ed25519,
            PrivateKeyInner::Ecdsa(_) => KeyKind::EcdsaSecp256k1,
        }
    }

    /// `true` if this is an Ed25519 key.
    pub fn is_ed25519(&self) -> bool {
        self.kind() == KeyKind::Ed25519
    }

    /// `true` if this is an ECDSA secp256k1 key.
    pub fn is_ecdsa(&self) -> bool {
        self.kind() == KeyKind::EcdsaSecp256k1
    }

    /// Sign a message.
    ///
    /// Ed25519 signs the raw message; ECDSA signs SHA-256(message) and
    /// returns the 64-byte compact form. Both are deterministic: the same
    /// key and message always produce the same bytes.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        match &self.inner {
            PrivateKeyInner::Ed25519(sk) => sk.sign(message).to_bytes().to_vec(),
            PrivateKeyInner::Ecdsa(sk) => {
                let secp = Secp256k1::new();
                let digest = Message::from_digest(sha256_array(message));
                secp.sign_ecdsa(&digest, sk).serialize_compact().to_vec()
            }
        }
    }

    /// Derive the corresponding public key. Pure, no side effects.
    pub fn public_key(&self) -> PublicKey {
        match &self.inner {
            PrivateKeyInner::Ed25519(sk) => PublicKey {
                inner: PublicKeyInner::Ed25519(sk.verifying_key()),
            },
            PrivateKeyInner::Ecdsa(sk) => {
                let secp = Secp256k1::new();
                PublicKey {
                    inner: PublicKeyInner::Ecdsa(secp256k1::PublicKey::from_secret_key(&secp, sk)),
                }
            }
        }
    }

    /// Raw key material: the 32-byte seed (Ed25519) or scalar (ECDSA).
    pub fn to_bytes_raw(&self) -> [u8; 32] {
        match &self.inner {
            PrivateKeyInner::Ed25519(sk) => sk.to_bytes(),
            PrivateKeyInner::Ecdsa(sk) => sk.secret_bytes(),
        }
    }

    /// DER (PKCS#8) encoding of the private key.
    pub fn to_bytes_der(&self) -> Vec<u8> {
        match &self.inner {
            PrivateKeyInner::Ed25519(_) => der::encode_private_key_ed25519(&self.to_bytes_raw()),
            PrivateKeyInner::Ecdsa(_) => der::encode_private_key_ecdsa(&self.to_bytes_raw()),
        }
    }

    /// Hex of [`to_bytes_raw`](Self::to_bytes_raw).
    pub fn to_string_raw(&self) -> String {
        hex::encode(self.to_bytes_raw())
    }

    /// Hex of [`to_bytes_der`](Self::to_bytes_der).
    pub fn to_string_der(&self) -> String {
        hex::encode(self.to_bytes_der())
    }
}

impl Clone for PrivateKey {
    /// Cloning a private key is allowed but should make you uncomfortable.
    fn clone(&self) -> Self {
        match &self.inner {
            PrivateKeyInner::Ed25519(sk) => Self {
                inner: PrivateKeyInner::Ed25519(SigningKey::from_bytes(&sk.to_bytes())),
            },
            PrivateKeyInner::Ecdsa(sk) => Self {
                inner: PrivateKeyInner::Ecdsa(*sk),
            },
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret material. Not even "partially".
        write!(f, "PrivateKey({}, pub={})", self.kind(), self.public_key())
    }
}

impl PartialEq for PrivateKey {
    /// Two private keys are equal if their public halves match. Comparing
    /// secret material in a non-constant-time way is a bad habit.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for PrivateKey {}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

enum PublicKeyInner {
    Ed25519(VerifyingKey),
    Ecdsa(secp256k1::PublicKey),
}

/// The public half of a Meridian key, safe to share with the world.
///
/// Equality and hashing are structural over (family, raw bytes), so public
/// keys work as map keys and set elements. The raw export form is 32 bytes
/// for Ed25519 and the 33-byte compressed point for ECDSA — the same bytes
/// used as the signature-pair prefix on the wire.
pub struct PublicKey {
    inner: PublicKeyInner,
}

impl PublicKey {
    /// Load an Ed25519 public key from 32 raw bytes. Rejects byte strings
    /// that are not a valid curve point (low-order and degenerate cases
    /// included).
    pub fn from_bytes_ed25519(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != ED25519_KEY_LENGTH {
            return Err(KeyError::encoding(format!(
                "Ed25519 public key must be {} bytes, got {}",
                ED25519_KEY_LENGTH,
                bytes.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        let vk = VerifyingKey::from_bytes(&arr)
            .map_err(|_| KeyError::encoding("bytes are not a valid Ed25519 point"))?;
        Ok(Self {
            inner: PublicKeyInner::Ed25519(vk),
        })
    }

    /// Load an ECDSA secp256k1 public key from a 33-byte compressed or
    /// 65-byte uncompressed point.
    pub fn from_bytes_ecdsa(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != ECDSA_COMPRESSED_POINT_LENGTH
            && bytes.len() != ECDSA_UNCOMPRESSED_POINT_LENGTH
        {
            return Err(KeyError::encoding(format!(
                "ECDSA (secp256k1) public key must be {} or {} bytes, got {}",
                ECDSA_COMPRESSED_POINT_LENGTH,
                ECDSA_UNCOMPRESSED_POINT_LENGTH,
                bytes.len()
            )));
        }
        let pk = secp256k1::PublicKey::from_slice(bytes)
            .map_err(|_| KeyError::encoding("bytes are not a valid secp256k1 point"))?;
        Ok(Self {
            inner: PublicKeyInner::Ecdsa(pk),
        })
    }

    /// Load a public key from DER bytes (SubjectPublicKeyInfo),
    /// auto-detecting the family. Only secp256k1 is accepted for
    /// elliptic-curve keys.
    pub fn from_der(der_bytes: &[u8]) -> Result<Self, KeyError> {
        match der::parse_public_key(der_bytes)? {
            der::DerPublicKey::Ed25519(point) => Self::from_bytes_ed25519(&point),
            der::DerPublicKey::EcdsaSecp256k1(point) => Self::from_bytes_ecdsa(&point),
        }
    }

    /// Interpret a hex string (optional `0x` prefix) as an Ed25519 point.
    pub fn from_str_ed25519(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_str)).map_err(|e| {
            KeyError::encoding(format!("invalid hex for Ed25519 public key: {}", e))
        })?;
        Self::from_bytes_ed25519(&bytes)
    }

    /// Interpret a hex string (optional `0x` prefix) as an ECDSA point.
    pub fn from_str_ecdsa(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_str))
            .map_err(|e| KeyError::encoding(format!("invalid hex for ECDSA public key: {}", e)))?;
        Self::from_bytes_ecdsa(&bytes)
    }

    /// Interpret a hex string (optional `0x` prefix) as DER bytes.
    pub fn from_str_der(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(strip_hex_prefix(hex_str))
            .map_err(|e| KeyError::encoding(format!("invalid hex for DER public key: {}", e)))?;
        Self::from_der(&bytes)
    }

    /// Which family this key belongs to.
    pub fn kind(&self) -> KeyKind {
        match self.inner {
            PublicKeyInner::Ed25519(_) => KeyKind::Ed25519,
            PublicKeyInner::Ecdsa(_) => KeyKind::EcdsaSecp256k1,
        }
    }

    /// `true` if this is an Ed25519 key.
    pub fn is_ed25519(&self) -> bool {
        self.kind() == KeyKind::Ed25519
    }

    /// `true` if this is an ECDSA secp256k1 key.
    pub fn is_ecdsa(&self) -> bool {
        self.kind() == KeyKind::EcdsaSecp256k1
    }

    /// Verify a signature over a message.
    ///
    /// The hash pairing mirrors [`PrivateKey::sign`]: Ed25519 verifies the
    /// raw message, ECDSA verifies SHA-256(message) against the 64-byte
    /// compact signature.
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> Result<(), KeyError> {
        match &self.inner {
            PublicKeyInner::Ed25519(vk) => {
                let sig_bytes: [u8; SIGNATURE_LENGTH] = signature
                    .try_into()
                    .map_err(|_| KeyError::InvalidSignature)?;
                let sig = Ed25519Signature::from_bytes(&sig_bytes);
                vk.verify(message, &sig).map_err(|_| KeyError::InvalidSignature)
            }
            PublicKeyInner::Ecdsa(pk) => {
                let sig = secp256k1::ecdsa::Signature::from_compact(signature)
                    .map_err(|_| KeyError::InvalidSignature)?;
                let secp = Secp256k1::new();
                let digest = Message::from_digest(sha256_array(message));
                secp.verify_ecdsa(&digest, &sig, pk)
                    .map_err(|_| KeyError::InvalidSignature)
            }
        }
    }

    /// Raw export: 32 bytes for Ed25519, the 33-byte compressed point for
    /// ECDSA. These are the bytes used as a signature-pair prefix.
    pub fn to_bytes_raw(&self) -> Vec<u8> {
        match &self.inner {
            PublicKeyInner::Ed25519(vk) => vk.to_bytes().to_vec(),
            PublicKeyInner::Ecdsa(pk) => pk.serialize().to_vec(),
        }
    }

    /// DER (SubjectPublicKeyInfo) encoding.
    pub fn to_bytes_der(&self) -> Vec<u8> {
        match &self.inner {
            PublicKeyInner::Ed25519(vk) => der::encode_public_key_ed25519(&vk.to_bytes()),
            PublicKeyInner::Ecdsa(pk) => der::encode_public_key_ecdsa(&pk.serialize()),
        }
    }

    /// Hex of [`to_bytes_raw`](Self::to_bytes_raw).
    pub fn to_string_raw(&self) -> String {
        hex::encode(self.to_bytes_raw())
    }

    /// Hex of [`to_bytes_der`](Self::to_bytes_der).
    pub fn to_string_der(&self) -> String {
        hex::encode(self.to_bytes_der())
    }
}

impl Clone for PublicKey {
    fn clone(&self) -> Self {
        match &self.inner {
            PublicKeyInner::Ed25519(vk) => Self {
                inner: PublicKeyInner::Ed25519(*vk),
            },
            PublicKeyInner::Ecdsa(pk) => Self {
                inner: PublicKeyInner::Ecdsa(*pk),
            },
        }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.to_bytes_raw() == other.to_bytes_raw()
    }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.to_bytes_raw().hash(state);
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_raw())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {})", self.kind(), self.to_string_raw())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_both_families() {
        let ed = PrivateKey::generate(KeyKind::Ed25519);
        assert!(ed.is_ed25519());
        assert_eq!(ed.to_bytes_raw().len(), 32);
        assert_eq!(ed.public_key().to_bytes_raw().len(), 32);

        let ec = PrivateKey::generate(KeyKind::EcdsaSecp256k1);
        assert!(ec.is_ecdsa());
        assert_eq!(ec.to_bytes_raw().len(), 32);
        assert_eq!(ec.public_key().to_bytes_raw().len(), 33);
    }

    #[test]
    fn key_kind_parsing() {
        assert_eq!(KeyKind::from_str("ed25519").unwrap(), KeyKind::Ed25519);
        assert_eq!(KeyKind::from_str("ED25519").unwrap(), KeyKind::Ed25519);
        assert_eq!(KeyKind::from_str("ecdsa").unwrap(), KeyKind::EcdsaSecp256k1);
        assert_eq!(
            KeyKind::from_str("secp256k1").unwrap(),
            KeyKind::EcdsaSecp256k1
        );
        match KeyKind::from_str("rsa4096") {
            Err(KeyError::UnknownAlgorithm(s)) => assert_eq!(s, "rsa4096"),
            other => panic!("expected UnknownAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn ed25519_sign_verify_scenario() {
        let key = PrivateKey::generate_ed25519();
        let signature = key.sign(b"Hello, Ed25519!");
        assert_eq!(signature.len(), 64);

        let public = key.public_key();
        public.verify(&signature, b"Hello, Ed25519!").unwrap();

        match public.verify(&signature, b"Hello, Ed25519!!") {
            Err(KeyError::InvalidSignature) => {}
            other => panic!("expected InvalidSignature, got {:?}", other),
        }
    }

    #[test]
    fn ecdsa_sign_verify() {
        let key = PrivateKey::generate_ecdsa();
        let signature = key.sign(b"pause token 0.0.5005");
        assert_eq!(signature.len(), 64);

        let public = key.public_key();
        public.verify(&signature, b"pause token 0.0.5005").unwrap();
        assert!(public.verify(&signature, b"pause token 0.0.5006").is_err());
    }

    #[test]
    fn both_families_sign_deterministically() {
        // Ed25519 by construction; ECDSA via RFC 6979 nonces.
        for kind in [KeyKind::Ed25519, KeyKind::EcdsaSecp256k1] {
            let key = PrivateKey::generate(kind);
            assert_eq!(key.sign(b"same message"), key.sign(b"same message"));
        }
    }

    #[test]
    fn raw_roundtrip_ed25519() {
        let key = PrivateKey::generate_ed25519();
        let restored = PrivateKey::from_bytes_ed25519(&key.to_bytes_raw()).unwrap();
        assert_eq!(key.to_string_raw(), restored.to_string_raw());
        assert_eq!(
            key.public_key().to_string_raw(),
            restored.public_key().to_string_raw()
        );
    }

    #[test]
    fn raw_roundtrip_ecdsa() {
        let key = PrivateKey::generate_ecdsa();
        let restored = PrivateKey::from_bytes_ecdsa(&key.to_bytes_raw()).unwrap();
        assert_eq!(key.to_string_raw(), restored.to_string_raw());
        assert_eq!(
            key.public_key().to_string_raw(),
            restored.public_key().to_string_raw()
        );
    }

    #[test]
    fn der_roundtrip_private_both_families() {
        for kind in [KeyKind::Ed25519, KeyKind::EcdsaSecp256k1] {
            let key = PrivateKey::generate(kind);
            let restored = PrivateKey::from_der(&key.to_bytes_der()).unwrap();
            assert_eq!(restored.kind(), kind);
            assert_eq!(key.to_string_der(), restored.to_string_der());
            assert_eq!(key.to_string_raw(), restored.to_string_raw());
            // Restored key signs identically.
            assert_eq!(key.sign(b"round trip"), restored.sign(b"round trip"));
        }
    }

    #[test]
    fn der_roundtrip_public_both_families() {
        for kind in [KeyKind::Ed25519, KeyKind::EcdsaSecp256k1] {
            let public = PrivateKey::generate(kind).public_key();
            let restored = PublicKey::from_der(&public.to_bytes_der()).unwrap();
            assert_eq!(restored.kind(), kind);
            assert_eq!(public.to_string_der(), restored.to_string_der());
            assert_eq!(public, restored);
        }
    }

    #[test]
    fn hex_loaders_tolerate_0x_prefix() {
        let key = PrivateKey::generate_ed25519();
        let plain = key.to_string_raw();
        let prefixed = format!("0x{}", plain);

        let a = PrivateKey::from_str_ed25519(&plain).unwrap();
        let b = PrivateKey::from_str_ed25519(&prefixed).unwrap();
        assert_eq!(a, b);

        let public = key.public_key();
        let c = PublicKey::from_str_ed25519(&format!("0x{}", public.to_string_raw())).unwrap();
        assert_eq!(public, c);
    }

    #[test]
    fn ed25519_seed_wrong_length_rejected() {
        for len in [0, 16, 31, 33, 64] {
            let bytes = vec![1u8; len];
            match PrivateKey::from_bytes_ed25519(&bytes) {
                Err(KeyError::InvalidEncoding { .. }) => {}
                other => panic!("len {}: expected InvalidEncoding, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn ecdsa_scalar_wrong_length_rejected() {
        for len in [0, 16, 31, 33] {
            let bytes = vec![1u8; len];
            assert!(PrivateKey::from_bytes_ecdsa(&bytes).is_err(), "len {}", len);
        }
    }

    #[test]
    fn ecdsa_zero_scalar_rejected() {
        // 32 bytes of zero is the right length but not a valid scalar.
        assert!(PrivateKey::from_bytes_ecdsa(&[0u8; 32]).is_err());
    }

    #[test]
    fn ecdsa_public_point_wrong_length_rejected() {
        for len in [0, 32, 34, 64, 66] {
            let bytes = vec![2u8; len];
            match PublicKey::from_bytes_ecdsa(&bytes) {
                Err(KeyError::InvalidEncoding { .. }) => {}
                other => panic!("len {}: expected InvalidEncoding, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn ecdsa_uncompressed_point_accepted_and_canonicalized() {
        let key = PrivateKey::generate_ecdsa();
        let public = key.public_key();

        // Re-derive the uncompressed form through the secp crate and feed it
        // back through the 65-byte loader.
        let secp = Secp256k1::new();
        let scalar = SecretKey::from_slice(&key.to_bytes_raw()).unwrap();
        let uncompressed =
            secp256k1::PublicKey::from_secret_key(&secp, &scalar).serialize_uncompressed();

        let loaded = PublicKey::from_bytes_ecdsa(&uncompressed).unwrap();
        // Canonical raw export is always the compressed form.
        assert_eq!(loaded.to_bytes_raw().len(), 33);
        assert_eq!(loaded, public);
    }

    #[test]
    fn der_family_detection_is_mutual_exclusive() {
        let ed = PrivateKey::generate_ed25519();
        let ec = PrivateKey::generate_ecdsa();
        assert_eq!(PrivateKey::from_der(&ed.to_bytes_der()).unwrap().kind(), KeyKind::Ed25519);
        assert_eq!(
            PrivateKey::from_der(&ec.to_bytes_der()).unwrap().kind(),
            KeyKind::EcdsaSecp256k1
        );
    }

    #[test]
    fn garbage_der_rejected() {
        assert!(PrivateKey::from_der(b"garbage").is_err());
        assert!(PublicKey::from_der(&[0x30, 0x00]).is_err());
    }

    #[test]
    fn cross_family_verification_fails() {
        let ed = PrivateKey::generate_ed25519();
        let ec = PrivateKey::generate_ecdsa();
        let sig = ed.sign(b"message");
        assert!(ec.public_key().verify(&sig, b"message").is_err());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let key = PrivateKey::generate_ed25519();
        let debug_str = format!("{:?}", key);
        assert!(debug_str.starts_with("PrivateKey(Ed25519"));
        assert!(!debug_str.contains(&key.to_string_raw()));
    }

    #[test]
    fn public_key_equality_and_hashing() {
        use std::collections::HashSet;

        let a = PrivateKey::generate_ed25519().public_key();
        let b = PrivateKey::generate_ecdsa().public_key();
        let a2 = PublicKey::from_bytes_ed25519(&a.to_bytes_raw()).unwrap();

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        set.insert(a2); // structural duplicate of `a`
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn deterministic_from_seed() {
        let seed = [42u8; 32];
        let k1 = PrivateKey::from_bytes_ed25519(&seed).unwrap();
        let k2 = PrivateKey::from_bytes_ed25519(&seed).unwrap();
        assert_eq!(k1.public_key(), k2.public_key());
    }
}
