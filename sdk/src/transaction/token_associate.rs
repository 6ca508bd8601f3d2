//! Token associate transactions.

use crate::client::{Channel, ChannelError};
use crate::entity::{AccountId, TokenId};
use crate::wire::body::BodyData;
use crate::wire::TransactionResponse;

use super::base::{BaseTransaction, LedgerTransaction, TransactionError};

/// Associates an account with one or more tokens, opting it in to hold and
/// receive them.
///
/// Requires an account and a non-empty token list by body-build time; both
/// checks are final-stage, so a transaction may sit half-configured while
/// being assembled.
#[derive(Debug, Clone, Default)]
pub struct TokenAssociateTransaction {
    base: BaseTransaction,
    account_id: Option<AccountId>,
    token_ids: Vec<TokenId>,
}

impl TokenAssociateTransaction {
    /// Create an empty associate transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account to associate. Fails once frozen.
    pub fn set_account_id(&mut self, account_id: AccountId) -> Result<&mut Self, TransactionError> {
        self.base.require_not_frozen()?;
        self.account_id = Some(account_id);
        Ok(self)
    }

    /// Append one token to the association list. Fails once frozen.
    pub fn add_token_id(&mut self, token_id: TokenId) -> Result<&mut Self, TransactionError> {
        self.base.require_not_frozen()?;
        self.token_ids.push(token_id);
        Ok(self)
    }

    /// Replace the whole association list. Fails once frozen.
    pub fn set_token_ids(&mut self, token_ids: Vec<TokenId>) -> Result<&mut Self, TransactionError> {
        self.base.require_not_frozen()?;
        self.token_ids = token_ids;
        Ok(self)
    }

    /// The account being associated, if set.
    pub fn account_id(&self) -> Option<AccountId> {
        self.account_id
    }

    /// The tokens queued for association.
    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }
}

impl LedgerTransaction for TokenAssociateTransaction {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTransaction {
        &mut self.base
    }

    fn body_data(&self) -> Result<BodyData, TransactionError> {
        let account = self.account_id.ok_or(TransactionError::MissingAccountId)?;
        if self.token_ids.is_empty() {
            return Err(TransactionError::MissingTokenIds);
        }
        Ok(BodyData::TokenAssociate {
            account,
            tokens: self.token_ids.clone(),
        })
    }

    fn submit<C: Channel>(
        &self,
        channel: &C,
        envelope: &[u8],
    ) -> Result<TransactionResponse, ChannelError> {
        channel.associate_token(envelope)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_requires_account() {
        let mut tx = TokenAssociateTransaction::new();
        tx.add_token_id(TokenId::new(0, 0, 5)).unwrap();
        assert!(matches!(
            tx.body_data(),
            Err(TransactionError::MissingAccountId)
        ));
    }

    #[test]
    fn body_requires_tokens() {
        let mut tx = TokenAssociateTransaction::new();
        tx.set_account_id(AccountId::new(0, 0, 2002)).unwrap();
        assert!(matches!(
            tx.body_data(),
            Err(TransactionError::MissingTokenIds)
        ));
    }

    #[test]
    fn complete_body_builds() {
        let mut tx = TokenAssociateTransaction::new();
        tx.set_account_id(AccountId::new(0, 0, 2002)).unwrap();
        tx.add_token_id(TokenId::new(0, 0, 5)).unwrap();
        tx.add_token_id(TokenId::new(0, 0, 6)).unwrap();

        match tx.body_data().unwrap() {
            BodyData::TokenAssociate { account, tokens } => {
                assert_eq!(account, AccountId::new(0, 0, 2002));
                assert_eq!(tokens, vec![TokenId::new(0, 0, 5), TokenId::new(0, 0, 6)]);
            }
            other => panic!("wrong body: {:?}", other),
        }
    }

    #[test]
    fn set_token_ids_replaces() {
        let mut tx = TokenAssociateTransaction::new();
        tx.add_token_id(TokenId::new(0, 0, 5)).unwrap();
        tx.set_token_ids(vec![TokenId::new(0, 0, 7)]).unwrap();
        assert_eq!(tx.token_ids(), &[TokenId::new(0, 0, 7)]);
    }
}
