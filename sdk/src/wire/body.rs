//! Canonical transaction encoding.
//!
//! This is the byte format every signature covers, so the rules are strict:
//!
//! - Integers are fixed-width little-endian. No varints, no negotiation.
//! - Strings and byte blobs carry a `u32` little-endian length prefix.
//! - Enums and optional positions use one-byte discriminants.
//! - The whole body starts with [`WIRE_BODY_VERSION`] so an encoding change
//!   can never be confused with old bytes.
//!
//! Field order is the order written here. Reordering fields, like changing
//! a width, is a wire-format break and requires a version bump.

use crate::config::WIRE_BODY_VERSION;
use crate::crypto::keys::KeyKind;
use crate::entity::{
    AccountId, AirdropAsset, NftId, PendingAirdropId, Timestamp, TokenId, TransactionId,
};

// ---------------------------------------------------------------------------
// Encoding primitives
// ---------------------------------------------------------------------------

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u64(buf: &mut Vec<u8>, v: u64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_i64(buf: &mut Vec<u8>, v: i64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    put_u32(buf, bytes.len() as u32);
    buf.extend_from_slice(bytes);
}

fn put_str(buf: &mut Vec<u8>, s: &str) {
    put_bytes(buf, s.as_bytes());
}

fn put_account_id(buf: &mut Vec<u8>, id: &AccountId) {
    put_u64(buf, id.shard);
    put_u64(buf, id.realm);
    put_u64(buf, id.num);
}

fn put_token_id(buf: &mut Vec<u8>, id: &TokenId) {
    put_u64(buf, id.shard);
    put_u64(buf, id.realm);
    put_u64(buf, id.num);
}

fn put_nft_id(buf: &mut Vec<u8>, id: &NftId) {
    put_token_id(buf, &id.token_id);
    put_u64(buf, id.serial_number);
}

fn put_timestamp(buf: &mut Vec<u8>, ts: &Timestamp) {
    put_i64(buf, ts.seconds);
    put_i32(buf, ts.nanos);
}

fn put_transaction_id(buf: &mut Vec<u8>, id: &TransactionId) {
    put_account_id(buf, &id.account_id);
    put_timestamp(buf, &id.valid_start);
}

fn put_pending_airdrop_id(buf: &mut Vec<u8>, id: &PendingAirdropId) {
    put_account_id(buf, &id.sender_id());
    put_account_id(buf, &id.receiver_id());
    match id.asset() {
        AirdropAsset::Fungible(token) => {
            buf.push(0);
            put_token_id(buf, &token);
        }
        AirdropAsset::Nft(nft) => {
            buf.push(1);
            put_nft_id(buf, &nft);
        }
    }
}

// ---------------------------------------------------------------------------
// BodyData
// ---------------------------------------------------------------------------

/// The variant-specific half of a transaction body.
///
/// One arm per supported transaction kind; the one-byte discriminant keeps
/// the encodings of different kinds disjoint even when their payloads would
/// otherwise collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyData {
    /// Pause all operations on a token.
    TokenPause {
        /// The token to pause.
        token: TokenId,
    },
    /// Associate an account with one or more tokens.
    TokenAssociate {
        /// The account to associate.
        account: AccountId,
        /// The tokens to associate it with.
        tokens: Vec<TokenId>,
    },
    /// Claim previously parked airdrops.
    TokenClaimAirdrop {
        /// The airdrops being claimed, in caller order.
        pending_airdrops: Vec<PendingAirdropId>,
    },
}

impl BodyData {
    fn discriminant(&self) -> u8 {
        match self {
            Self::TokenPause { .. } => 1,
            Self::TokenAssociate { .. } => 2,
            Self::TokenClaimAirdrop { .. } => 3,
        }
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(self.discriminant());
        match self {
            Self::TokenPause { token } => put_token_id(buf, token),
            Self::TokenAssociate { account, tokens } => {
                put_account_id(buf, account);
                put_u32(buf, tokens.len() as u32);
                for token in tokens {
                    put_token_id(buf, token);
                }
            }
            Self::TokenClaimAirdrop { pending_airdrops } => {
                put_u32(buf, pending_airdrops.len() as u32);
                for id in pending_airdrops {
                    put_pending_airdrop_id(buf, id);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// TransactionBody
// ---------------------------------------------------------------------------

/// The complete, resolved body of a transaction: the common fields every
/// kind shares plus the kind-specific [`BodyData`].
///
/// A `TransactionBody` only exists with all identity fields present —
/// resolution from optional client defaults happens in the transaction
/// state machine before this type is built. [`to_bytes`](Self::to_bytes)
/// is the freeze point: the returned bytes are what gets signed and what
/// the network receives inside the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBody {
    /// Payer + valid-start identity of the transaction.
    pub transaction_id: TransactionId,
    /// The node the transaction will be submitted through.
    pub node_account_id: AccountId,
    /// Maximum fee the payer authorizes.
    pub fee: u64,
    /// Validity window length in seconds from the valid-start.
    pub valid_duration_secs: u64,
    /// Free-form memo, may be empty.
    pub memo: String,
    /// Kind-specific payload.
    pub data: BodyData,
}

impl TransactionBody {
    /// Serialize to canonical bytes. Deterministic: equal bodies produce
    /// equal bytes, and any field change changes the output.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);
        buf.push(WIRE_BODY_VERSION);
        put_transaction_id(&mut buf, &self.transaction_id);
        put_account_id(&mut buf, &self.node_account_id);
        put_u64(&mut buf, self.fee);
        put_u64(&mut buf, self.valid_duration_secs);
        put_str(&mut buf, &self.memo);
        self.data.encode(&mut buf);
        buf
    }
}

// ---------------------------------------------------------------------------
// Signatures and the envelope
// ---------------------------------------------------------------------------

/// One signature over the frozen body bytes, tagged with the raw public key
/// that produced it. The prefix is how the network (and
/// `is_signed_by`) matches signatures to keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePair {
    /// Raw public key bytes: 32 for Ed25519, 33 compressed for ECDSA.
    pub public_key_prefix: Vec<u8>,
    /// The 64-byte signature.
    pub signature: Vec<u8>,
    /// Which family produced the signature.
    pub key_kind: KeyKind,
}

fn key_kind_discriminant(kind: KeyKind) -> u8 {
    match kind {
        KeyKind::Ed25519 => 0,
        KeyKind::EcdsaSecp256k1 => 1,
    }
}

/// Assemble the submission envelope: the frozen body bytes followed by the
/// signature list, each field length-prefixed. This is the byte string the
/// channel hands to the network.
pub fn encode_signed_transaction(body_bytes: &[u8], signatures: &[SignaturePair]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(body_bytes.len() + signatures.len() * 112 + 16);
    put_bytes(&mut buf, body_bytes);
    put_u32(&mut buf, signatures.len() as u32);
    for pair in signatures {
        buf.push(key_kind_discriminant(pair.key_kind));
        put_bytes(&mut buf, &pair.public_key_prefix);
        put_bytes(&mut buf, &pair.signature);
    }
    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
