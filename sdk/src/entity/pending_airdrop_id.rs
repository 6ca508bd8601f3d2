//! Pending airdrop identifiers.
//!
//! When an airdrop lands on an account that has not opted in, the network
//! parks the transfer as a *pending airdrop* instead of crediting it. A
//! [`PendingAirdropId`] is the reference the receiver later presents to
//! claim the parked asset: who sent it, who it is for, and exactly which
//! asset — a fungible token or one specific NFT.
//!
//! The "exactly one asset" rule is load-bearing. The wire format carries
//! two optional fields and the network rejects anything that sets both or
//! neither; here the rule is encoded in the type instead, so an invalid
//! combination is unrepresentable after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AccountId, IdError, NftId, TokenId};

/// The asset half of a pending airdrop: a fungible token class or one
/// specific NFT. Never both, never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirdropAsset {
    /// A fungible token class.
    Fungible(TokenId),
    /// One specific NFT.
    Nft(NftId),
}

/// A reference to one unclaimed airdrop, usable as a set element.
///
/// Immutable value object with structural equality and hashing over all
/// three components — the claim transaction relies on this to detect
/// duplicates.
///
/// # Examples
///
/// ```
/// use meridian_sdk::entity::{AccountId, PendingAirdropId, TokenId};
///
/// let id = PendingAirdropId::fungible(
///     AccountId::new(0, 0, 1001),
///     AccountId::new(0, 0, 2002),
///     TokenId::new(0, 0, 5005),
/// );
/// assert!(id.token_id().is_some());
/// assert!(id.nft_id().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingAirdropId {
    sender_id: AccountId,
    receiver_id: AccountId,
    asset: AirdropAsset,
}

impl PendingAirdropId {
    /// Reference a pending fungible-token airdrop.
    pub fn fungible(sender_id: AccountId, receiver_id: AccountId, token_id: TokenId) -> Self {
        Self {
            sender_id,
            receiver_id,
            asset: AirdropAsset::Fungible(token_id),
        }
    }

    /// Reference a pending NFT airdrop.
    pub fn nft(sender_id: AccountId, receiver_id: AccountId, nft_id: NftId) -> Self {
        Self {
            sender_id,
            receiver_id,
            asset: AirdropAsset::Nft(nft_id),
        }
    }

    /// Construct from the wire shape, where both asset fields are optional.
    ///
    /// Fails with [`IdError::AirdropAssetCardinality`] unless exactly one of
    /// the two is `Some`. This is the seam where the network's two-optionals
    /// representation is funneled into the checked enum.
    pub fn from_optional_assets(
        sender_id: AccountId,
        receiver_id: AccountId,
        token_id: Option<TokenId>,
        nft_id: Option<NftId>,
    ) -> Result<Self, IdError> {
        match (token_id, nft_id) {
            (Some(token), None) => Ok(Self::fungible(sender_id, receiver_id, token)),
            (None, Some(nft)) => Ok(Self::nft(sender_id, receiver_id, nft)),
            _ => Err(IdError::AirdropAssetCardinality),
        }
    }

    /// The account that initiated the airdrop.
    pub fn sender_id(&self) -> AccountId {
        self.sender_id
    }

    /// The account entitled to claim it.
    pub fn receiver_id(&self) -> AccountId {
        self.receiver_id
    }

    /// The asset being claimed.
    pub fn asset(&self) -> AirdropAsset {
        self.asset
    }

    /// The fungible token, if this references a fungible airdrop.
    pub fn token_id(&self) -> Option<TokenId> {
        match self.asset {
            AirdropAsset::Fungible(token) => Some(token),
            AirdropAsset::Nft(_) => None,
        }
    }

    /// The NFT, if this references an NFT airdrop.
    pub fn nft_id(&self) -> Option<NftId> {
        match self.asset {
            AirdropAsset::Fungible(_) => None,
            AirdropAsset::Nft(nft) => Some(nft),
        }
    }
}

impl fmt::Display for PendingAirdropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.asset {
            AirdropAsset::Fungible(token) => write!(
                f,
                "PendingAirdropId(sender={}, receiver={}, token={})",
                self.sender_id, self.receiver_id, token
            ),
            AirdropAsset::Nft(nft) => write!(
                f,
                "PendingAirdropId(sender={}, receiver={}, nft={})",
                self.sender_id, self.receiver_id, nft
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sender() -> AccountId {
        AccountId::new(0, 0, 1001)
    }

    fn receiver() -> AccountId {
        AccountId::new(0, 0, 2002)
    }

    #[test]
    fn exactly_one_asset_accepted() {
        let fungible = PendingAirdropId::from_optional_assets(
            sender(),
            receiver(),
            Some(TokenId::new(0, 0, 5005)),
            None,
        )
        .unwrap();
        assert_eq!(fungible.token_id(), Some(TokenId::new(0, 0, 5005)));
        assert_eq!(fungible.nft_id(), None);

        let nft = PendingAirdropId::from_optional_assets(
            sender(),
            receiver(),
            None,
            Some(NftId::new(TokenId::new(0, 0, 7007), 3)),
        )
        .unwrap();
        assert_eq!(nft.token_id(), None);
        assert!(nft.nft_id().is_some());
    }

    #[test]
    fn both_assets_rejected() {
        let result = PendingAirdropId::from_optional_assets(
            sender(),
            receiver(),
            Some(TokenId::new(0, 0, 5005)),
            Some(NftId::new(TokenId::new(0, 0, 7007), 3)),
        );
        match result {
            Err(IdError::AirdropAssetCardinality) => {}
            other => panic!("expected AirdropAssetCardinality, got {:?}", other),
        }
    }

    #[test]
    fn neither_asset_rejected() {
        let result = PendingAirdropId::from_optional_assets(sender(), receiver(), None, None);
        assert!(matches!(result, Err(IdError::AirdropAssetCardinality)));
    }

    #[test]
    fn structural_equality_over_all_fields() {
        let a = PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 5));
        let b = PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 5));
        let c = PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 6));
        let d = PendingAirdropId::nft(sender(), receiver(), NftId::new(TokenId::new(0, 0, 5), 1));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn usable_as_set_element() {
        let mut set = HashSet::new();
        set.insert(PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 5)));
        set.insert(PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 5)));
        set.insert(PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 6)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_names_the_asset_kind() {
        let f = PendingAirdropId::fungible(sender(), receiver(), TokenId::new(0, 0, 5));
        assert!(f.to_string().contains("token=0.0.5"));

        let n = PendingAirdropId::nft(sender(), receiver(), NftId::new(TokenId::new(0, 0, 7), 2));
        assert!(n.to_string().contains("nft=0.0.7/2"));
    }
}
