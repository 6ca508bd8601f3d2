//! DER shells for key transport: PKCS#8 for private keys,
//! SubjectPublicKeyInfo for public keys.
//!
//! Only two algorithms ever pass through here — Ed25519 (RFC 8410) and
//! ECDSA on secp256k1 (RFC 5915 inside PKCS#8) — so this is a structural
//! codec for two fixed shapes, not a general ASN.1 library. The parser
//! walks tag-length-value triples, checks the algorithm OID, and extracts
//! the key material; everything else is rejected. No cryptographic
//! validation happens here — callers hand the raw bytes to the actual
//! curve implementations, which have the final say.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while encoding or decoding DER key structures.
#[derive(Debug, Error)]
pub enum DerError {
    /// The input ended before the announced structure did.
    #[error("truncated DER structure")]
    Truncated,

    /// A tag other than the expected one was found.
    #[error("unexpected DER tag {got:#04x} (wanted {want:#04x})")]
    UnexpectedTag {
        /// The tag the grammar required.
        want: u8,
        /// The tag actually present.
        got: u8,
    },

    /// A length octet used a form this codec does not accept.
    #[error("unsupported DER length encoding")]
    BadLength,

    /// Extra bytes followed a complete outer structure.
    #[error("trailing bytes after DER structure")]
    TrailingBytes,

    /// The algorithm OID is neither Ed25519 nor ecPublicKey.
    #[error("unsupported key algorithm in DER (not Ed25519 or ECDSA)")]
    UnsupportedAlgorithm,

    /// An EC key declared a curve other than secp256k1.
    #[error("unsupported elliptic curve in DER (only secp256k1 is accepted)")]
    UnsupportedCurve,

    /// The extracted key material has an impossible length.
    #[error("invalid key material length in DER: {0} bytes")]
    BadKeyLength(usize),
}

// ---------------------------------------------------------------------------
// Parsed key material
// ---------------------------------------------------------------------------

/// Private key material recovered from a PKCS#8 blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerPrivateKey {
    /// A 32-byte Ed25519 seed.
    Ed25519([u8; 32]),
    /// A 32-byte secp256k1 scalar.
    EcdsaSecp256k1([u8; 32]),
}

/// Public key material recovered from a SubjectPublicKeyInfo blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerPublicKey {
    /// A 32-byte Ed25519 point.
    Ed25519([u8; 32]),
    /// A 33-byte compressed or 65-byte uncompressed secp256k1 point.
    EcdsaSecp256k1(Vec<u8>),
}

// ---------------------------------------------------------------------------
// OIDs and tags
// ---------------------------------------------------------------------------

/// id-Ed25519, 1.3.101.112.
const OID_ED25519: &[u8] = &[0x2B, 0x65, 0x70];

/// id-ecPublicKey, 1.2.840.10045.2.1.
const OID_EC_PUBLIC_KEY: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];

/// secp256k1, 1.3.132.0.10.
const OID_SECP256K1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x0A];

const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_OID: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Emit one tag-length-value triple.
fn tlv(tag: u8, contents: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(contents.len() + 4);
    out.push(tag);
    let len = contents.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push((len & 0xFF) as u8);
    }
    out.extend_from_slice(contents);
    out
}

fn bit_string(data: &[u8]) -> Vec<u8> {
    let mut contents = Vec::with_capacity(data.len() + 1);
    contents.push(0x00); // no unused bits
    contents.extend_from_slice(data);
    tlv(TAG_BIT_STRING, &contents)
}

/// PKCS#8 PrivateKeyInfo for an Ed25519 seed (RFC 8410: the inner
/// CurvePrivateKey is itself an OCTET STRING wrapping the seed).
pub fn encode_private_key_ed25519(seed: &[u8; 32]) -> Vec<u8> {
    let alg = tlv(TAG_SEQUENCE, &tlv(TAG_OID, OID_ED25519));
    let curve_private_key = tlv(TAG_OCTET_STRING, seed);
    let mut body = tlv(TAG_INTEGER, &[0]); // version
    body.extend_from_slice(&alg);
    body.extend_from_slice(&tlv(TAG_OCTET_STRING, &curve_private_key));
    tlv(TAG_SEQUENCE, &body)
}

/// PKCS#8 PrivateKeyInfo for a secp256k1 scalar. The privateKey octet
/// string carries an RFC 5915 ECPrivateKey (version 1, no embedded point).
pub fn encode_private_key_ecdsa(scalar: &[u8; 32]) -> Vec<u8> {
    let mut ec_private_key = tlv(TAG_INTEGER, &[1]); // ECPrivateKey version
    ec_private_key.extend_from_slice(&tlv(TAG_OCTET_STRING, scalar));
    let ec_private_key = tlv(TAG_SEQUENCE, &ec_private_key);

    let mut alg = tlv(TAG_OID, OID_EC_PUBLIC_KEY);
    alg.extend_from_slice(&tlv(TAG_OID, OID_SECP256K1));
    let alg = tlv(TAG_SEQUENCE, &alg);

    let mut body = tlv(TAG_INTEGER, &[0]); // PKCS#8 version
    body.extend_from_slice(&alg);
    body.extend_from_slice(&tlv(TAG_OCTET_STRING, &ec_private_key));
    tlv(TAG_SEQUENCE, &body)
}

/// SubjectPublicKeyInfo for an Ed25519 public key.
pub fn encode_public_key_ed25519(public: &[u8; 32]) -> Vec<u8> {
    let alg = tlv(TAG_SEQUENCE, &tlv(TAG_OID, OID_ED25519));
    let mut body = alg;
    body.extend_from_slice(&bit_string(public));
    tlv(TAG_SEQUENCE, &body)
}

/// SubjectPublicKeyInfo for a secp256k1 public point (compressed or not —
/// whatever the caller hands in is what goes on the wire).
pub fn encode_public_key_ecdsa(point: &[u8]) -> Vec<u8> {
    let mut alg = tlv(TAG_OID, OID_EC_PUBLIC_KEY);
    alg.extend_from_slice(&tlv(TAG_OID, OID_SECP256K1));
    let mut body = tlv(TAG_SEQUENCE, &alg);
    body.extend_from_slice(&bit_string(point));
    tlv(TAG_SEQUENCE, &body)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Cursor over a DER byte slice.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn done(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn byte(&mut self) -> Result<u8, DerError> {
        let b = *self.buf.get(self.pos).ok_or(DerError::Truncated)?;
        self.pos += 1;
        Ok(b)
    }

    /// Read one tag-length-value triple and return (tag, contents).
    fn read_tlv(&mut self) -> Result<(u8, &'a [u8]), DerError> {
        let tag = self.byte()?;
        let first = self.byte()?;
        let len = if first < 0x80 {
            first as usize
        } else if first == 0x81 {
            self.byte()? as usize
        } else if first == 0x82 {
            let hi = self.byte()? as usize;
            let lo = self.byte()? as usize;
            (hi << 8) | lo
        } else {
            // Indefinite and >64KiB lengths never occur in key structures.
            return Err(DerError::BadLength);
        };
        let end = self.pos.checked_add(len).ok_or(DerError::Truncated)?;
        if end > self.buf.len() {
            return Err(DerError::Truncated);
        }
        let contents = &self.buf[self.pos..end];
        self.pos = end;
        Ok((tag, contents))
    }

    /// Read a TLV and require a specific tag.
    fn expect(&mut self, want: u8) -> Result<&'a [u8], DerError> {
        let (tag, contents) = self.read_tlv()?;
        if tag != want {
            return Err(DerError::UnexpectedTag { want, got: tag });
        }
        Ok(contents)
    }
}

fn key_array(bytes: &[u8]) -> Result<[u8; 32], DerError> {
    if bytes.len() != 32 {
        return Err(DerError::BadKeyLength(bytes.len()));
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Parse a PKCS#8 PrivateKeyInfo and extract the key material.
///
/// Detects Ed25519 vs ECDSA by algorithm OID. EC keys must declare the
/// secp256k1 curve; anything else fails with [`DerError::UnsupportedCurve`].
pub fn parse_private_key(der: &[u8]) -> Result<DerPrivateKey, DerError> {
    let mut outer = Reader::new(der);
    let body = outer.expect(TAG_SEQUENCE)?;
    if !outer.done() {
        return Err(DerError::TrailingBytes);
    }

    let mut r = Reader::new(body);
    r.expect(TAG_INTEGER)?; // PKCS#8 version — value is irrelevant here

    let alg_body = r.expect(TAG_SEQUENCE)?;
    let mut alg = Reader::new(alg_body);
    let oid = alg.expect(TAG_OID)?;

    if oid == OID_ED25519 {
        let wrapped = r.expect(TAG_OCTET_STRING)?;
        // RFC 8410 nests a CurvePrivateKey OCTET STRING; some encoders emit
        // the bare seed instead. Accept both.
        let seed = if wrapped.len() == 34 && wrapped[0] == TAG_OCTET_STRING && wrapped[1] == 32 {
            &wrapped[2..]
        } else {
            wrapped
        };
        return Ok(DerPrivateKey::Ed25519(key_array(seed)?));
    }

    if oid == OID_EC_PUBLIC_KEY {
        let curve = alg.expect(TAG_OID)?;
        if curve != OID_SECP256K1 {
            return Err(DerError::UnsupportedCurve);
        }
        let wrapped = r.expect(TAG_OCTET_STRING)?;
        let mut ec = Reader::new(wrapped);
        let ec_body = ec.expect(TAG_SEQUENCE)?;
        let mut inner = Reader::new(ec_body);
        inner.expect(TAG_INTEGER)?; // ECPrivateKey version
        let scalar = inner.expect(TAG_OCTET_STRING)?;
        // Optional [0] parameters / [1] publicKey may follow; ignored.
        return Ok(DerPrivateKey::EcdsaSecp256k1(key_array(scalar)?));
    }

    Err(DerError::UnsupportedAlgorithm)
}

/// Parse a SubjectPublicKeyInfo and extract the key material.
pub fn parse_public_key(der: &[u8]) -> Result<DerPublicKey, DerError> {
    let mut outer = Reader::new(der);
    let body = outer.expect(TAG_SEQUENCE)?;
    if !outer.done() {
        return Err(DerError::TrailingBytes);
    }

    let mut r = Reader::new(body);
    let alg_body = r.expect(TAG_SEQUENCE)?;
    let mut alg = Reader::new(alg_body);
    let oid = alg.expect(TAG_OID)?;

    let bits = r.expect(TAG_BIT_STRING)?;
    if bits.first() != Some(&0x00) {
        // Key bytes are always an integral number of octets.
        return Err(DerError::BadKeyLength(bits.len()));
    }
    let key = &bits[1..];

    if oid == OID_ED25519 {
        return Ok(DerPublicKey::Ed25519(key_array(key)?));
    }

    if oid == OID_EC_PUBLIC_KEY {
        let curve = alg.expect(TAG_OID)?;
        if curve != OID_SECP256K1 {
            return Err(DerError::UnsupportedCurve);
        }
        if key.len() != 33 && key.len() != 65 {
            return Err(DerError::BadKeyLength(key.len()));
        }
        return Ok(DerPublicKey::EcdsaSecp256k1(key.to_vec()));
    }

    Err(DerError::UnsupportedAlgorithm)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
