//! Typed transaction receipts.
//!
//! The decoder from the raw [`WireReceipt`] to a caller-facing
//! [`TransactionReceipt`]. Decoding is total — any well-formed wire receipt
//! decodes to something; there is no error path here.
//!
//! The one subtle rule is the optional-ID guard: an embedded ID counts as
//! present only if the wire set the field *and* its entity number is
//! non-zero. Wire encoders are allowed to emit default-initialized
//! submessages, and `0.0.0` names no real entity — treating it as a value
//! would hand callers an ID that points at nothing.

use serde::{Deserialize, Serialize};

use crate::entity::{AccountId, FileId, TokenId, TopicId, TransactionId};
use crate::wire::receipt::{WireEntityId, WireReceipt};
use crate::wire::ResponseCode;

/// The decoded outcome of a submitted transaction.
///
/// Created once from a network round trip and never mutated. Which optional
/// IDs are populated depends on the transaction kind: a token creation
/// carries a `token_id`, a topic creation a `topic_id`, and so on — fields
/// irrelevant to the kind stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// The consensus verdict.
    pub status: ResponseCode,
    /// The transaction this receipt is for, when known to the caller.
    pub transaction_id: Option<TransactionId>,
    /// Token touched or created, if meaningfully present on the wire.
    pub token_id: Option<TokenId>,
    /// Topic created, if meaningfully present on the wire.
    pub topic_id: Option<TopicId>,
    /// Account created, if meaningfully present on the wire.
    pub account_id: Option<AccountId>,
    /// File created, if meaningfully present on the wire.
    pub file_id: Option<FileId>,
    /// Serial numbers minted, empty when not applicable.
    pub serial_numbers: Vec<u64>,
}

/// The presence rule: field set on the wire AND entity number non-zero.
fn meaningful(id: &Option<WireEntityId>) -> Option<WireEntityId> {
    id.filter(|entity| entity.num != 0)
}

impl TransactionReceipt {
    /// Decode a wire receipt, attaching the transaction ID the caller was
    /// tracking (receipt queries key on it, so the caller always has it).
    pub fn from_wire(wire: &WireReceipt, transaction_id: Option<TransactionId>) -> Self {
        Self {
            status: ResponseCode::from_i32(wire.status),
            transaction_id,
            token_id: meaningful(&wire.token_id)
                .map(|e| TokenId::new(e.shard, e.realm, e.num)),
            topic_id: meaningful(&wire.topic_id)
                .map(|e| TopicId::new(e.shard, e.realm, e.num)),
            account_id: meaningful(&wire.account_id)
                .map(|e| AccountId::new(e.shard, e.realm, e.num)),
            file_id: meaningful(&wire.file_id).map(|e| FileId::new(e.shard, e.realm, e.num)),
            serial_numbers: wire.serial_numbers.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Timestamp;

    fn txid() -> TransactionId {
        TransactionId::new(AccountId::new(0, 0, 1001), Timestamp::new(1_700_000_000, 0))
    }

    #[test]
    fn bare_success_receipt() {
        let receipt = TransactionReceipt::from_wire(&WireReceipt::default(), Some(txid()));
        assert_eq!(receipt.status, ResponseCode::Ok);
        assert_eq!(receipt.transaction_id, Some(txid()));
        assert!(receipt.token_id.is_none());
        assert!(receipt.topic_id.is_none());
        assert!(receipt.account_id.is_none());
        assert!(receipt.file_id.is_none());
        assert!(receipt.serial_numbers.is_empty());
    }

    #[test]
    fn present_nonzero_ids_decode() {
        let wire = WireReceipt {
            status: 0,
            token_id: Some(WireEntityId::new(0, 0, 5005)),
            topic_id: Some(WireEntityId::new(1, 2, 3)),
            account_id: Some(WireEntityId::new(0, 0, 2002)),
            file_id: Some(WireEntityId::new(0, 0, 150)),
            serial_numbers: vec![1, 2, 3],
        };

        let receipt = TransactionReceipt::from_wire(&wire, None);
        assert_eq!(receipt.token_id, Some(TokenId::new(0, 0, 5005)));
        assert_eq!(receipt.topic_id, Some(TopicId::new(1, 2, 3)));
        assert_eq!(receipt.account_id, Some(AccountId::new(0, 0, 2002)));
        assert_eq!(receipt.file_id, Some(FileId::new(0, 0, 150)));
        assert_eq!(receipt.serial_numbers, vec![1, 2, 3]);
    }

    #[test]
    fn present_but_zero_token_decodes_to_none() {
        // The wire marked the field present but left it default-initialized.
        let wire = WireReceipt {
            status: 0,
            token_id: Some(WireEntityId::new(0, 0, 0)),
            ..WireReceipt::default()
        };
        let receipt = TransactionReceipt::from_wire(&wire, Some(txid()));
        assert_eq!(receipt.token_id, None);
    }

    #[test]
    fn zero_num_with_nonzero_shard_realm_is_still_absent() {
        // Only the entity number decides; shard/realm alone name nothing.
        let wire = WireReceipt {
            status: 0,
            account_id: Some(WireEntityId::new(5, 7, 0)),
            ..WireReceipt::default()
        };
        let receipt = TransactionReceipt::from_wire(&wire, None);
        assert_eq!(receipt.account_id, None);
    }

    #[test]
    fn failure_status_decodes() {
        let wire = WireReceipt {
            status: 21, // TOKEN_WAS_DELETED
            ..WireReceipt::default()
        };
        let receipt = TransactionReceipt::from_wire(&wire, Some(txid()));
        assert_eq!(receipt.status, ResponseCode::TokenWasDeleted);
        assert!(!receipt.status.is_ok());
    }

    #[test]
    fn unknown_status_is_preserved() {
        let wire = WireReceipt {
            status: 4242,
            ..WireReceipt::default()
        };
        let receipt = TransactionReceipt::from_wire(&wire, None);
        assert_eq!(receipt.status, ResponseCode::Unrecognized(4242));
    }

    #[test]
    fn serde_json_roundtrip() {
        let wire = WireReceipt {
            status: 0,
            token_id: Some(WireEntityId::new(0, 0, 5005)),
            ..WireReceipt::default()
        };
        let receipt = TransactionReceipt::from_wire(&wire, Some(txid()));
        let json = serde_json::to_string(&receipt).unwrap();
        let back: TransactionReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }
}
