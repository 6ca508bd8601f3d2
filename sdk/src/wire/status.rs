//! Network status codes.
//!
//! Every submission produces two of these: an immediate *precheck* code
//! from the node that accepted (or refused) the bytes, and later a
//! *receipt* status once consensus has had its say. The numeric values are
//! the network's contract; the enum exists so Rust callers match on names
//! instead of integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A precheck or receipt status code.
///
/// `from_i32` never fails: codes this SDK release does not know yet come
/// back as [`ResponseCode::Unrecognized`] with the raw value preserved, so
/// a newer network cannot break an older client's error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseCode {
    /// The transaction passed, or the receipt reports success.
    Ok,
    /// The transaction failed a structural validity check.
    InvalidTransaction,
    /// The payer account does not exist.
    PayerAccountNotFound,
    /// The node account on the transaction is not the node it was sent to.
    InvalidNodeAccount,
    /// The valid-duration window has already closed.
    TransactionExpired,
    /// The valid-start timestamp is in the future.
    InvalidTransactionStart,
    /// A required signature is missing or does not verify.
    InvalidSignature,
    /// The attached fee is below the network's charge.
    InsufficientTransactionFee,
    /// The payer cannot afford the fee.
    InsufficientPayerBalance,
    /// The same transaction ID was already submitted.
    DuplicateTransaction,
    /// The node is overloaded; try another node or try later.
    Busy,
    /// The operation is not supported by this network.
    NotSupported,
    /// No receipt exists (yet) for the queried transaction.
    ReceiptNotFound,
    /// The record has expired from node state.
    RecordNotFound,
    /// The outcome is not yet known.
    Unknown,
    /// The token does not exist.
    InvalidTokenId,
    /// The token was deleted.
    TokenWasDeleted,
    /// The token has no pause key configured.
    TokenHasNoPauseKey,
    /// The account is already associated with the token.
    TokenAlreadyAssociatedToAccount,
    /// The referenced pending airdrop does not exist.
    InvalidPendingAirdropId,
    /// The claim lists the same pending airdrop more than once.
    PendingAirdropIdRepeated,
    /// The claim lists more pending airdrops than the network allows.
    PendingAirdropIdListTooLong,
    /// A code this SDK release does not know.
    Unrecognized(i32),
}

impl ResponseCode {
    /// Decode a wire integer. Total — unknown values are preserved, not lost.
    pub fn from_i32(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::InvalidTransaction,
            2 => Self::PayerAccountNotFound,
            3 => Self::InvalidNodeAccount,
            4 => Self::TransactionExpired,
            5 => Self::InvalidTransactionStart,
            6 => Self::InvalidSignature,
            7 => Self::InsufficientTransactionFee,
            8 => Self::InsufficientPayerBalance,
            9 => Self::DuplicateTransaction,
            10 => Self::Busy,
            11 => Self::NotSupported,
            12 => Self::ReceiptNotFound,
            13 => Self::RecordNotFound,
            14 => Self::Unknown,
            20 => Self::InvalidTokenId,
            21 => Self::TokenWasDeleted,
            22 => Self::TokenHasNoPauseKey,
            23 => Self::TokenAlreadyAssociatedToAccount,
            30 => Self::InvalidPendingAirdropId,
            31 => Self::PendingAirdropIdRepeated,
            32 => Self::PendingAirdropIdListTooLong,
            other => Self::Unrecognized(other),
        }
    }

    /// The numeric wire value.
    pub fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::InvalidTransaction => 1,
            Self::PayerAccountNotFound => 2,
            Self::InvalidNodeAccount => 3,
            Self::TransactionExpired => 4,
            Self::InvalidTransactionStart => 5,
            Self::InvalidSignature => 6,
            Self::InsufficientTransactionFee => 7,
            Self::InsufficientPayerBalance => 8,
            Self::DuplicateTransaction => 9,
            Self::Busy => 10,
            Self::NotSupported => 11,
            Self::ReceiptNotFound => 12,
            Self::RecordNotFound => 13,
            Self::Unknown => 14,
            Self::InvalidTokenId => 20,
            Self::TokenWasDeleted => 21,
            Self::TokenHasNoPauseKey => 22,
            Self::TokenAlreadyAssociatedToAccount => 23,
            Self::InvalidPendingAirdropId => 30,
            Self::PendingAirdropIdRepeated => 31,
            Self::PendingAirdropIdListTooLong => 32,
            Self::Unrecognized(code) => *code,
        }
    }

    /// The symbolic name, SCREAMING_SNAKE_CASE as the network spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidTransaction => "INVALID_TRANSACTION",
            Self::PayerAccountNotFound => "PAYER_ACCOUNT_NOT_FOUND",
            Self::InvalidNodeAccount => "INVALID_NODE_ACCOUNT",
            Self::TransactionExpired => "TRANSACTION_EXPIRED",
            Self::InvalidTransactionStart => "INVALID_TRANSACTION_START",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::InsufficientTransactionFee => "INSUFFICIENT_TRANSACTION_FEE",
            Self::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
            Self::DuplicateTransaction => "DUPLICATE_TRANSACTION",
            Self::Busy => "BUSY",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::ReceiptNotFound => "RECEIPT_NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::Unknown => "UNKNOWN",
            Self::InvalidTokenId => "INVALID_TOKEN_ID",
            Self::TokenWasDeleted => "TOKEN_WAS_DELETED",
            Self::TokenHasNoPauseKey => "TOKEN_HAS_NO_PAUSE_KEY",
            Self::TokenAlreadyAssociatedToAccount => "TOKEN_ALREADY_ASSOCIATED_TO_ACCOUNT",
            Self::InvalidPendingAirdropId => "INVALID_PENDING_AIRDROP_ID",
            Self::PendingAirdropIdRepeated => "PENDING_AIRDROP_ID_REPEATED",
            Self::PendingAirdropIdListTooLong => "PENDING_AIRDROP_ID_LIST_TOO_LONG",
            Self::Unrecognized(_) => "UNRECOGNIZED",
        }
    }

    /// `true` for the one success value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_roundtrip_for_known_codes() {
        for code in [0, 1, 6, 9, 10, 12, 20, 21, 22, 30, 31, 32] {
            let decoded = ResponseCode::from_i32(code);
            assert_eq!(decoded.code(), code);
            assert!(!matches!(decoded, ResponseCode::Unrecognized(_)));
        }
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let decoded = ResponseCode::from_i32(9999);
        assert_eq!(decoded, ResponseCode::Unrecognized(9999));
        assert_eq!(decoded.code(), 9999);
        assert_eq!(decoded.name(), "UNRECOGNIZED");
    }

    #[test]
    fn display_carries_name_and_code() {
        assert_eq!(
            ResponseCode::TokenHasNoPauseKey.to_string(),
            "TOKEN_HAS_NO_PAUSE_KEY (22)"
        );
    }

    #[test]
    fn only_ok_is_ok() {
        assert!(ResponseCode::Ok.is_ok());
        assert!(!ResponseCode::Busy.is_ok());
        assert!(!ResponseCode::Unrecognized(0x7FFF).is_ok());
    }
}
