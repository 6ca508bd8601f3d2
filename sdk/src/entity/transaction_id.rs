//! Transaction identifiers.
//!
//! A transaction is identified by who pays for it and when it becomes
//! valid. The valid-start timestamp doubles as a uniqueness source: two
//! transactions from the same payer with the same valid start are the same
//! transaction as far as the network's duplicate detection is concerned.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::AccountId;

/// A ledger timestamp: seconds since the Unix epoch plus a nanosecond part.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Nanoseconds within the second, `0..=999_999_999`.
    pub nanos: i32,
}

impl Timestamp {
    /// Create a timestamp from its parts.
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos() as i32,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}

/// The identity of a transaction: payer account + valid-start timestamp.
///
/// Generated by the client at freeze time (or set explicitly beforehand)
/// and fixed for the transaction's whole life — the receipt query keys on
/// it. Displayed as `shard.realm.num@seconds.nanos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId {
    /// The account paying for the transaction.
    pub account_id: AccountId,
    /// When the transaction's validity window opens.
    pub valid_start: Timestamp,
}

impl TransactionId {
    /// Create a transaction ID from explicit parts.
    pub fn new(account_id: AccountId, valid_start: Timestamp) -> Self {
        Self {
            account_id,
            valid_start,
        }
    }

    /// Generate a transaction ID for the given payer with the current time
    /// as the valid start.
    pub fn generate(account_id: AccountId) -> Self {
        Self {
            account_id,
            valid_start: Timestamp::now(),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.account_id, self.valid_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let id = TransactionId::new(
            AccountId::new(0, 0, 2),
            Timestamp::new(1_700_000_000, 123),
        );
        assert_eq!(id.to_string(), "0.0.2@1700000000.000000123");
    }

    #[test]
    fn generate_uses_payer_and_current_time() {
        let before = Timestamp::now();
        let id = TransactionId::generate(AccountId::new(0, 0, 1001));
        let after = Timestamp::now();

        assert_eq!(id.account_id, AccountId::new(0, 0, 1001));
        assert!(id.valid_start >= before);
        assert!(id.valid_start <= after);
    }

    #[test]
    fn serde_json_roundtrip() {
        let id = TransactionId::new(AccountId::new(0, 0, 9), Timestamp::new(1, 2));
        let json = serde_json::to_string(&id).unwrap();
        let back: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
