//! Token identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::IdError;

/// The `shard.realm.num` identity of a token class (fungible or NFT
/// collection). Immutable; equality is structural.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl TokenId {
    /// Create a token ID from its three components.
    pub fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for TokenId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (shard, realm, num) = super::parse_triple("TokenId", s)?;
        Ok(Self { shard, realm, num })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        let id = TokenId::new(0, 0, 5005);
        assert_eq!(id.to_string(), "0.0.5005");
        assert_eq!("0.0.5005".parse::<TokenId>().unwrap(), id);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("5005".parse::<TokenId>().is_err());
    }
}
