//! # Client & Channel
//!
//! The seam between this SDK and the network. The [`Channel`] trait is the
//! whole transport contract: one method per RPC the transaction variants
//! need, each taking the serialized envelope (or a query argument) and
//! returning the network's raw reply. gRPC plumbing, TLS, retries, node
//! failover — all of that lives behind an implementation of this trait and
//! none of it leaks into the core.
//!
//! [`Client`] is the caller-facing bundle: a channel, an optional operator
//! identity (the default payer and signer), and an optional default node.
//! There is no ambient global client — every API that needs one takes it as
//! an explicit parameter.
//!
//! The trait is synchronous on purpose. The transaction lifecycle is a
//! sequence of blocking steps with exactly one network round trip inside
//! `execute`; an async surface here would push `async` through every
//! signature in the crate to dress up what is, for the caller, a blocking
//! call. Implementations that wrap an async transport can block_on
//! internally.

use thiserror::Error;

use crate::crypto::keys::{PrivateKey, PublicKey};
use crate::entity::{AccountId, TokenId, TransactionId};
use crate::wire::{TokenInfo, TransactionResponse, WireReceipt};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A transport-level failure: the request never produced a usable network
/// reply. Precheck and receipt *statuses* are not channel errors — they are
/// successful transports of bad news, surfaced by the transaction layer.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The transport could not complete the call.
    #[error("transport failure: {message}")]
    Transport {
        /// Implementation-specific description (connection refused, deadline
        /// exceeded, ...).
        message: String,
    },

    /// The channel has no implementation for the requested operation.
    #[error("operation not supported by this channel: {operation}")]
    Unsupported {
        /// The RPC that was attempted.
        operation: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// Per-service RPC surface the transaction variants dispatch through.
///
/// Envelope-taking methods correspond one-to-one to transaction kinds; the
/// two query methods serve receipt polling and the token-pause pre-flight.
pub trait Channel {
    /// Submit a token pause envelope.
    fn pause_token(&self, envelope: &[u8]) -> Result<TransactionResponse, ChannelError>;

    /// Submit a token associate envelope.
    fn associate_token(&self, envelope: &[u8]) -> Result<TransactionResponse, ChannelError>;

    /// Submit a claim-airdrop envelope.
    fn claim_airdrop(&self, envelope: &[u8]) -> Result<TransactionResponse, ChannelError>;

    /// Fetch metadata for a token.
    fn token_info(&self, token_id: &TokenId) -> Result<TokenInfo, ChannelError>;

    /// Fetch the receipt for a previously submitted transaction.
    fn receipt(&self, transaction_id: &TransactionId) -> Result<WireReceipt, ChannelError>;
}

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// The client's default identity: the account that pays fees and the key
/// that signs when nobody else has.
#[derive(Debug)]
pub struct Operator {
    /// The fee-paying account.
    pub account_id: AccountId,
    /// The operator's private key.
    pub private_key: PrivateKey,
}

impl Operator {
    /// Derive the operator's public key.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// A handle on the network: channel + operator identity + default node.
///
/// Owns its own state exclusively; two clients never share anything. The
/// operator is optional until [`set_operator`](Self::set_operator) — a
/// client without one can still freeze transactions whose IDs were set
/// explicitly, but cannot generate transaction IDs or auto-sign.
pub struct Client<C: Channel> {
    channel: C,
    operator: Option<Operator>,
    default_node: Option<AccountId>,
}

impl<C: Channel> Client<C> {
    /// Create a client over a channel, with no operator and no default node.
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            operator: None,
            default_node: None,
        }
    }

    /// Configure the operator identity. Replaces any previous operator.
    pub fn set_operator(&mut self, account_id: AccountId, private_key: PrivateKey) {
        self.operator = Some(Operator {
            account_id,
            private_key,
        });
    }

    /// Configure the node transactions default to when none is set on them.
    pub fn set_default_node(&mut self, node_account_id: AccountId) {
        self.default_node = Some(node_account_id);
    }

    /// The configured operator, if any.
    pub fn operator(&self) -> Option<&Operator> {
        self.operator.as_ref()
    }

    /// The operator's account, if an operator is configured.
    pub fn operator_account_id(&self) -> Option<AccountId> {
        self.operator.as_ref().map(|op| op.account_id)
    }

    /// The default node, if one is configured.
    pub fn default_node_account_id(&self) -> Option<AccountId> {
        self.default_node
    }

    /// Generate a fresh transaction ID paid by the operator, with the
    /// current time as valid start. `None` without an operator.
    pub fn generate_transaction_id(&self) -> Option<TransactionId> {
        self.operator
            .as_ref()
            .map(|op| TransactionId::generate(op.account_id))
    }

    /// The underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::PrivateKey;

    /// A channel that refuses everything — enough to exercise client state.
    struct DeadChannel;

    impl Channel for DeadChannel {
        fn pause_token(&self, _: &[u8]) -> Result<TransactionResponse, ChannelError> {
            Err(ChannelError::Unsupported {
                operation: "pause_token",
            })
        }
        fn associate_token(&self, _: &[u8]) -> Result<TransactionResponse, ChannelError> {
            Err(ChannelError::Unsupported {
                operation: "associate_token",
            })
        }
        fn claim_airdrop(&self, _: &[u8]) -> Result<TransactionResponse, ChannelError> {
            Err(ChannelError::Unsupported {
                operation: "claim_airdrop",
            })
        }
        fn token_info(&self, _: &TokenId) -> Result<TokenInfo, ChannelError> {
            Err(ChannelError::Unsupported {
                operation: "token_info",
            })
        }
        fn receipt(&self, _: &TransactionId) -> Result<WireReceipt, ChannelError> {
            Err(ChannelError::Unsupported {
                operation: "receipt",
            })
        }
    }

    #[test]
    fn fresh_client_has_no_identity() {
        let client = Client::new(DeadChannel);
        assert!(client.operator().is_none());
        assert!(client.operator_account_id().is_none());
        assert!(client.default_node_account_id().is_none());
        assert!(client.generate_transaction_id().is_none());
    }

    #[test]
    fn operator_enables_transaction_ids() {
        let mut client = Client::new(DeadChannel);
        client.set_operator(AccountId::new(0, 0, 1001), PrivateKey::generate_ed25519());

        let id = client.generate_transaction_id().unwrap();
        assert_eq!(id.account_id, AccountId::new(0, 0, 1001));
    }

    #[test]
    fn default_node_is_stored() {
        let mut client = Client::new(DeadChannel);
        client.set_default_node(AccountId::new(0, 0, 3));
        assert_eq!(
            client.default_node_account_id(),
            Some(AccountId::new(0, 0, 3))
        );
    }

    #[test]
    fn set_operator_replaces_previous() {
        let mut client = Client::new(DeadChannel);
        client.set_operator(AccountId::new(0, 0, 1), PrivateKey::generate_ed25519());
        client.set_operator(AccountId::new(0, 0, 2), PrivateKey::generate_ecdsa());
        assert_eq!(client.operator_account_id(), Some(AccountId::new(0, 0, 2)));
    }
}
