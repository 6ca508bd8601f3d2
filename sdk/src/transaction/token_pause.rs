//! Token pause transactions.

use tracing::warn;

use crate::client::{Channel, ChannelError, Client};
use crate::config::TOKEN_PAUSE_TRANSACTION_FEE;
use crate::entity::TokenId;
use crate::wire::body::BodyData;
use crate::wire::TransactionResponse;

use super::base::{BaseTransaction, LedgerTransaction, TransactionError};

/// Pauses all operations on a token.
///
/// Beyond the usual lifecycle, pausing has an execution-time pre-flight:
/// the token's metadata is fetched through the channel and the submission
/// is refused locally if the token is deleted or was created without a
/// pause key — both cases where the network would only reject it anyway,
/// after charging a fee. Pausing an already-paused token is *not* an
/// error; it is logged and submitted, and the network treats it as a
/// no-op.
///
/// # Examples
///
/// ```no_run
/// # use meridian_sdk::client::{Channel, Client};
/// # use meridian_sdk::entity::TokenId;
/// # use meridian_sdk::transaction::{LedgerTransaction, TokenPauseTransaction};
/// # fn demo<C: Channel>(client: &Client<C>) -> Result<(), Box<dyn std::error::Error>> {
/// let mut tx = TokenPauseTransaction::new();
/// tx.set_token_id(TokenId::new(0, 0, 5005))?;
/// let receipt = tx.execute(client)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenPauseTransaction {
    base: BaseTransaction,
    token_id: Option<TokenId>,
}

impl TokenPauseTransaction {
    /// Create an empty pause transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token to pause. Fails once frozen.
    pub fn set_token_id(&mut self, token_id: TokenId) -> Result<&mut Self, TransactionError> {
        self.base.require_not_frozen()?;
        self.token_id = Some(token_id);
        Ok(self)
    }

    /// The token to pause, if set.
    pub fn token_id(&self) -> Option<TokenId> {
        self.token_id
    }
}

impl LedgerTransaction for TokenPauseTransaction {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTransaction {
        &mut self.base
    }

    fn default_fee(&self) -> u64 {
        TOKEN_PAUSE_TRANSACTION_FEE
    }

    fn body_data(&self) -> Result<BodyData, TransactionError> {
        let token = self.token_id.ok_or(TransactionError::MissingTokenId)?;
        Ok(BodyData::TokenPause { token })
    }

    fn submit<C: Channel>(
        &self,
        channel: &C,
        envelope: &[u8],
    ) -> Result<TransactionResponse, ChannelError> {
        channel.pause_token(envelope)
    }

    /// Fetch the token's metadata and refuse doomed submissions locally.
    fn before_submit<C: Channel>(&self, client: &Client<C>) -> Result<(), TransactionError> {
        // body_data() has run by now, so the token is present; the fallback
        // only defends against direct calls out of lifecycle order.
        let token_id = self.token_id.ok_or(TransactionError::MissingTokenId)?;
        let info = client.channel().token_info(&token_id)?;

        if info.deleted {
            return Err(TransactionError::TokenDeleted { token_id });
        }
        if info.pause_key.is_none() {
            return Err(TransactionError::MissingPauseKey { token_id });
        }
        if info.paused {
            warn!(token = %token_id, "token is already paused; submitting anyway");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
