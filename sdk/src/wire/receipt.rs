//! Response projections filled in by the channel collaborator.
//!
//! These structs are the SDK-side image of what the network sends back.
//! They deliberately stay close to the wire: optional submessages stay
//! `Option`, numeric components stay raw, and nothing is interpreted —
//! interpretation is the receipt decoder's job
//! ([`crate::transaction::receipt`]).

use serde::{Deserialize, Serialize};

use crate::crypto::keys::PublicKey;
use crate::entity::TokenId;

/// An entity ID exactly as the wire carries it inside a receipt.
///
/// The wire can mark the field present while leaving it default-initialized
/// (all zeros) — the decoder treats that as absent. Keeping the raw triple
/// here, instead of a typed ID, is what makes that distinction observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl WireEntityId {
    /// Create a wire entity ID from its components.
    pub fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

/// The raw receipt for a submitted transaction.
///
/// `Option` models the wire's has-field flag; a `Some` with `num == 0` is
/// the "present but default-initialized" case the decoder must not mistake
/// for a real ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireReceipt {
    /// The receipt status as a raw numeric code.
    pub status: i32,
    /// The token created or touched, if the wire set the field.
    pub token_id: Option<WireEntityId>,
    /// The topic created, if the wire set the field.
    pub topic_id: Option<WireEntityId>,
    /// The account created, if the wire set the field.
    pub account_id: Option<WireEntityId>,
    /// The file created, if the wire set the field.
    pub file_id: Option<WireEntityId>,
    /// Serial numbers minted, empty when not applicable.
    pub serial_numbers: Vec<u64>,
}

/// The immediate response to a transaction submission: the node's precheck
/// verdict, before consensus is involved at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// Raw precheck code; `0` is OK.
    pub precheck_code: i32,
}

impl TransactionResponse {
    /// A passing precheck.
    pub fn ok() -> Self {
        Self { precheck_code: 0 }
    }
}

/// Token metadata fetched through the channel's query surface.
///
/// Consumed by execution-time pre-flight checks (notably token pause, which
/// refuses to submit against a deleted token or one with no pause key).
#[derive(Debug, Clone)]
pub struct TokenInfo {
    /// The token this metadata describes.
    pub token_id: TokenId,
    /// Human-readable token name.
    pub name: String,
    /// Ticker-style symbol.
    pub symbol: String,
    /// Whether the token has been deleted.
    pub deleted: bool,
    /// Whether the token is currently paused.
    pub paused: bool,
    /// The pause authority, if one was configured at creation.
    pub pause_key: Option<PublicKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_receipt_default_is_bare_success_shape() {
        let receipt = WireReceipt::default();
        assert_eq!(receipt.status, 0);
        assert!(receipt.token_id.is_none());
        assert!(receipt.serial_numbers.is_empty());
    }

    #[test]
    fn wire_receipt_serde_roundtrip() {
        let receipt = WireReceipt {
            status: 0,
            token_id: Some(WireEntityId::new(0, 0, 5005)),
            topic_id: None,
            account_id: Some(WireEntityId::new(0, 0, 0)),
            file_id: None,
            serial_numbers: vec![1, 2, 3],
        };
        let json = serde_json::to_string(&receipt).unwrap();
        let back: WireReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }
}
