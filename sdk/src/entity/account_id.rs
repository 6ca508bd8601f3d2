//! Account identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::IdError;

/// The `shard.realm.num` identity of a ledger account.
///
/// Accounts are the payers, senders, and receivers of everything in this
/// SDK: the operator paying for a transaction, the node the transaction is
/// routed to, the parties of a pending airdrop. Immutable once constructed;
/// equality and ordering are structural.
///
/// # Examples
///
/// ```
/// use meridian_sdk::entity::AccountId;
///
/// let id: AccountId = "0.0.1001".parse().unwrap();
/// assert_eq!(id, AccountId::new(0, 0, 1001));
/// assert_eq!(id.to_string(), "0.0.1001");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AccountId {
    /// The shard the account lives in.
    pub shard: u64,
    /// The realm within the shard.
    pub realm: u64,
    /// The account number within the realm.
    pub num: u64,
}

impl AccountId {
    /// Create an account ID from its three components.
    pub fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for AccountId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (shard, realm, num) = super::parse_triple("AccountId", s)?;
        Ok(Self { shard, realm, num })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        let id = AccountId::new(3, 7, 42);
        let parsed: AccountId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn structural_equality() {
        assert_eq!(AccountId::new(0, 0, 5), AccountId::new(0, 0, 5));
        assert_ne!(AccountId::new(0, 0, 5), AccountId::new(0, 0, 6));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("0.0".parse::<AccountId>().is_err());
        assert!("not-an-id".parse::<AccountId>().is_err());
    }

    #[test]
    fn serde_json_roundtrip() {
        let id = AccountId::new(0, 0, 1001);
        let json = serde_json::to_string(&id).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
