//! NFT identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{IdError, TokenId};

/// A unique non-fungible token: its collection's [`TokenId`] plus a serial
/// number. Displayed and parsed as `shard.realm.num/serial`.
///
/// Serials are assigned by the network starting at 1; serial 0 never refers
/// to a real NFT but is representable so wire values pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NftId {
    /// The collection this NFT belongs to.
    pub token_id: TokenId,
    /// The serial number within the collection.
    pub serial_number: u64,
}

impl NftId {
    /// Create an NFT ID from a collection and serial number.
    pub fn new(token_id: TokenId, serial_number: u64) -> Self {
        Self {
            token_id,
            serial_number,
        }
    }
}

impl fmt::Display for NftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_id, self.serial_number)
    }
}

impl FromStr for NftId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || IdError::Parse {
            kind: "NftId",
            input: s.to_string(),
            expected: "shard.realm.num/serial",
        };

        let (token_part, serial_part) = s.split_once('/').ok_or_else(err)?;
        let token_id: TokenId = token_part.parse().map_err(|_| err())?;
        let serial_number: u64 = serial_part.parse().map_err(|_| err())?;
        Ok(Self {
            token_id,
            serial_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        let id = NftId::new(TokenId::new(0, 0, 7007), 12);
        assert_eq!(id.to_string(), "0.0.7007/12");
        assert_eq!("0.0.7007/12".parse::<NftId>().unwrap(), id);
    }

    #[test]
    fn rejects_missing_serial() {
        assert!("0.0.7007".parse::<NftId>().is_err());
        assert!("0.0.7007/".parse::<NftId>().is_err());
        assert!("0.0.7007/1/2".parse::<NftId>().is_err());
    }
}
