//! # Typed Identifiers
//!
//! Every addressable thing on the Meridian ledger — accounts, tokens, NFTs,
//! consensus topics, files — is named by a `shard.realm.num` triple. These
//! are plain immutable value objects: structural equality, structural
//! hashing, no behavior beyond parsing and display. Keeping them dumb is
//! the point; the type is the validation.
//!
//! [`PendingAirdropId`] is the one composite: a sender, a receiver, and
//! exactly one asset (fungible token or NFT). Its exactly-one invariant is
//! enforced at construction and can never be violated afterwards.

pub mod account_id;
pub mod file_id;
pub mod nft_id;
pub mod pending_airdrop_id;
pub mod token_id;
pub mod topic_id;
pub mod transaction_id;

pub use account_id::AccountId;
pub use file_id::FileId;
pub use nft_id::NftId;
pub use pending_airdrop_id::{AirdropAsset, PendingAirdropId};
pub use token_id::TokenId;
pub use topic_id::TopicId;
pub use transaction_id::{Timestamp, TransactionId};

use thiserror::Error;

/// Errors produced while parsing or constructing identifiers.
#[derive(Debug, Error)]
pub enum IdError {
    /// The input string does not match the identifier's grammar.
    #[error("malformed {kind} '{input}': expected {expected}")]
    Parse {
        /// Which identifier type was being parsed.
        kind: &'static str,
        /// The offending input.
        input: String,
        /// A one-line description of the accepted grammar.
        expected: &'static str,
    },

    /// A pending airdrop was given both assets, or neither.
    #[error("exactly one of token_id or nft_id must be set")]
    AirdropAssetCardinality,
}

/// Parse a `shard.realm.num` triple. Shared by every entity ID's `FromStr`.
pub(crate) fn parse_triple(
    kind: &'static str,
    input: &str,
) -> Result<(u64, u64, u64), IdError> {
    let err = || IdError::Parse {
        kind,
        input: input.to_string(),
        expected: "shard.realm.num",
    };

    let mut parts = input.split('.');
    let shard = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let realm = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let num = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    if parts.next().is_some() {
        return Err(err());
    }
    Ok((shard, realm, num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_parsing() {
        assert_eq!(parse_triple("AccountId", "0.0.1001").unwrap(), (0, 0, 1001));
        assert_eq!(parse_triple("TokenId", "1.2.3").unwrap(), (1, 2, 3));

        for bad in ["", "0.0", "0.0.0.0", "a.b.c", "0.0.-5", "0..3"] {
            assert!(parse_triple("AccountId", bad).is_err(), "input {:?}", bad);
        }
    }
}
