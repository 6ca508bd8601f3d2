//! Claim-airdrop transactions.
//!
//! The bounded-set variant: a claim carries between 1 and 10 pending
//! airdrop IDs with no structural duplicates. The two bounds are enforced
//! at different times on purpose:
//!
//! - **Max and uniqueness** on every add, with validate-before-mutate
//!   semantics — a rejected add leaves the stored list byte-for-byte as it
//!   was, so callers can recover without rebuilding the transaction.
//! - **Min** only at body build — an empty claim is a legitimate
//!   intermediate state while the caller is still collecting IDs, but it
//!   must never freeze.

use crate::client::{Channel, ChannelError};
use crate::config::{MAX_PENDING_AIRDROP_CLAIMS, MIN_PENDING_AIRDROP_CLAIMS};
use crate::entity::PendingAirdropId;
use crate::wire::body::BodyData;
use crate::wire::TransactionResponse;

use super::base::{BaseTransaction, LedgerTransaction, TransactionError};

/// Claims previously parked airdrops for their receiver.
///
/// # Examples
///
/// ```no_run
/// # use meridian_sdk::client::{Channel, Client};
/// # use meridian_sdk::entity::{AccountId, PendingAirdropId, TokenId};
/// # use meridian_sdk::transaction::{LedgerTransaction, TokenClaimAirdropTransaction};
/// # fn demo<C: Channel>(client: &Client<C>) -> Result<(), Box<dyn std::error::Error>> {
/// let pending = PendingAirdropId::fungible(
///     AccountId::new(0, 0, 1001),
///     AccountId::new(0, 0, 2002),
///     TokenId::new(0, 0, 5005),
/// );
///
/// let mut tx = TokenClaimAirdropTransaction::new();
/// tx.add_pending_airdrop_ids(vec![pending])?;
/// let receipt = tx.execute(client)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenClaimAirdropTransaction {
    base: BaseTransaction,
    pending_airdrop_ids: Vec<PendingAirdropId>,
}

impl TokenClaimAirdropTransaction {
    /// Create an empty claim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a claim pre-loaded with IDs. Applies the same validation as
    /// [`add_pending_airdrop_ids`](Self::add_pending_airdrop_ids).
    pub fn with_pending_airdrop_ids(
        pending_airdrop_ids: Vec<PendingAirdropId>,
    ) -> Result<Self, TransactionError> {
        let mut tx = Self::new();
        tx.add_pending_airdrop_ids(pending_airdrop_ids)?;
        Ok(tx)
    }

    /// Check max-cardinality and uniqueness over a candidate list.
    ///
    /// Uniqueness is a pairwise scan: the list is capped at ten elements,
    /// so the quadratic comparison is cheaper than hashing and keeps the
    /// first-duplicate-wins reporting simple.
    fn validate_batch(candidate: &[PendingAirdropId]) -> Result<(), TransactionError> {
        if candidate.len() > MAX_PENDING_AIRDROP_CLAIMS {
            return Err(TransactionError::TooManyAirdrops {
                max: MAX_PENDING_AIRDROP_CLAIMS,
                got: candidate.len(),
            });
        }
        for (i, id) in candidate.iter().enumerate() {
            if candidate[..i].contains(id) {
                return Err(TransactionError::DuplicateAirdrop { id: id.to_string() });
            }
        }
        Ok(())
    }

    /// Append IDs to the claim.
    ///
    /// The *combined* list (current + new) is validated for the cap and for
    /// duplicates before anything is committed; on failure the stored list
    /// is unchanged and the error names the first violation.
    pub fn add_pending_airdrop_ids(
        &mut self,
        pending_airdrop_ids: Vec<PendingAirdropId>,
    ) -> Result<&mut Self, TransactionError> {
        self.base.require_not_frozen()?;

        let mut candidate = self.pending_airdrop_ids.clone();
        candidate.extend(pending_airdrop_ids);
        Self::validate_batch(&candidate)?;

        self.pending_airdrop_ids = candidate;
        Ok(self)
    }

    /// Append a single ID. Same validation as the batch form.
    pub fn add_pending_airdrop_id(
        &mut self,
        pending_airdrop_id: PendingAirdropId,
    ) -> Result<&mut Self, TransactionError> {
        self.add_pending_airdrop_ids(vec![pending_airdrop_id])
    }

    /// The IDs currently queued for claiming, in insertion order.
    pub fn pending_airdrop_ids(&self) -> &[PendingAirdropId] {
        &self.pending_airdrop_ids
    }
}

impl LedgerTransaction for TokenClaimAirdropTransaction {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTransaction {
        &mut self.base
    }

    fn body_data(&self) -> Result<BodyData, TransactionError> {
        if self.pending_airdrop_ids.len() < MIN_PENDING_AIRDROP_CLAIMS {
            return Err(TransactionError::TooFewAirdrops {
                min: MIN_PENDING_AIRDROP_CLAIMS,
                got: self.pending_airdrop_ids.len(),
            });
        }
        Self::validate_batch(&self.pending_airdrop_ids)?;
        Ok(BodyData::TokenClaimAirdrop {
            pending_airdrops: self.pending_airdrop_ids.clone(),
        })
    }

    fn submit<C: Channel>(
        &self,
        channel: &C,
        envelope: &[u8],
    ) -> Result<TransactionResponse, ChannelError> {
        channel.claim_airdrop(envelope)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
