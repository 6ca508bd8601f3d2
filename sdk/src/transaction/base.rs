//! The transaction state machine.
//!
//! [`BaseTransaction`] holds the fields every transaction kind shares and
//! the one-way frozen flag; [`LedgerTransaction`] is the trait the variants
//! implement to plug in their domain body, their fee default, their channel
//! method, and (optionally) an execution-time pre-flight. The lifecycle
//! methods — `freeze_with`, `sign`, `execute` — are provided by the trait
//! so every variant behaves identically where it matters.
//!
//! The frozen flag is not a boolean next to the bytes; it *is* the bytes.
//! `body_bytes: Option<Vec<u8>>` being `Some` means frozen, which makes the
//! invariant "frozen implies canonical bytes exist" structural.

use tracing::{debug, info};

use crate::client::{Channel, ChannelError, Client};
use crate::config::DEFAULT_TRANSACTION_VALID_DURATION_SECS;
use crate::crypto::keys::{KeyError, PrivateKey, PublicKey};
use crate::entity::{AccountId, TokenId, TransactionId};
use crate::wire::body::{encode_signed_transaction, BodyData, SignaturePair, TransactionBody};
use crate::wire::{ResponseCode, TransactionResponse};
use thiserror::Error;

use super::receipt::TransactionReceipt;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the transaction lifecycle and variant validation.
///
/// The variants group into the taxonomy callers should handle differently:
/// state errors (`Immutable`, `NotFrozen`, `Missing*`) are programming
/// errors to fix, cardinality errors are local validation that never
/// touched the network, domain preconditions failed a pre-flight query,
/// and `Network`/`Precheck`/`ReceiptStatus` are the remote's verdicts.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A setter was called after freeze.
    #[error("transaction is immutable; it has been frozen")]
    Immutable,

    /// `sign` was called before `freeze_with`.
    #[error("transaction must be frozen before signing")]
    NotFrozen,

    /// A transaction ID was needed but no operator is configured to
    /// generate one (and none was set explicitly).
    #[error("no operator configured on the client")]
    MissingOperator,

    /// No node account ID was set and the client has no default.
    #[error("no node account ID available: set one explicitly or configure the client")]
    MissingNodeId,

    /// A token pause body was built without a token.
    #[error("Token ID is required for pausing a token.")]
    MissingTokenId,

    /// A token associate body was built without an account.
    #[error("account ID is required for token association")]
    MissingAccountId,

    /// A token associate body was built with an empty token list.
    #[error("at least one token ID is required for association")]
    MissingTokenIds,

    /// An add would push the pending airdrop list over the cap.
    #[error("up to {max} airdrops can be claimed at once (got {got})")]
    TooManyAirdrops {
        /// The network's cap.
        max: usize,
        /// The size the list would have had.
        got: usize,
    },

    /// An add would introduce a structurally equal pending airdrop ID.
    #[error("duplicate pending airdrop ID: {id}")]
    DuplicateAirdrop {
        /// Display form of the repeated ID.
        id: String,
    },

    /// A claim body was built with fewer IDs than the minimum.
    #[error("at least {min} airdrop must be claimed (got {got})")]
    TooFewAirdrops {
        /// The network's floor.
        min: usize,
        /// How many were present.
        got: usize,
    },

    /// Pre-flight found the token deleted.
    #[error("cannot pause a deleted token: {token_id}")]
    TokenDeleted {
        /// The deleted token.
        token_id: TokenId,
    },

    /// Pre-flight found no pause key on the token.
    #[error("token {token_id} has no pause key and cannot be paused")]
    MissingPauseKey {
        /// The token without a pause authority.
        token_id: TokenId,
    },

    /// A key operation failed during signing.
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// The channel could not complete a call.
    #[error("network error: {0}")]
    Network(#[from] ChannelError),

    /// The node rejected the submission before consensus.
    #[error("transaction failed precheck: {0}")]
    Precheck(ResponseCode),

    /// Consensus processed the transaction but the receipt reports failure.
    #[error("receipt reported failure: {0}")]
    ReceiptStatus(ResponseCode),
}

// ---------------------------------------------------------------------------
// BaseTransaction
// ---------------------------------------------------------------------------

/// The common state every transaction variant embeds: identity fields,
/// fee and validity settings, the signature collection, and the frozen
/// body bytes.
#[derive(Debug, Clone)]
pub struct BaseTransaction {
    transaction_id: Option<TransactionId>,
    node_account_id: Option<AccountId>,
    fee: Option<u64>,
    valid_duration_secs: u64,
    memo: String,
    body_bytes: Option<Vec<u8>>,
    signatures: Vec<SignaturePair>,
}

impl Default for BaseTransaction {
    fn default() -> Self {
        Self {
            transaction_id: None,
            node_account_id: None,
            fee: None,
            valid_duration_secs: DEFAULT_TRANSACTION_VALID_DURATION_SECS,
            memo: String::new(),
            body_bytes: None,
            signatures: Vec::new(),
        }
    }
}

impl BaseTransaction {
    /// `true` once the body bytes have been computed. One-way.
    pub fn is_frozen(&self) -> bool {
        self.body_bytes.is_some()
    }

    /// The canonical body bytes, once frozen.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body_bytes.as_deref()
    }

    /// The signature pairs collected so far, in signing order.
    pub fn signatures(&self) -> &[SignaturePair] {
        &self.signatures
    }

    /// The transaction ID, once set or resolved at freeze.
    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.transaction_id
    }

    /// The node the transaction targets, once set or resolved at freeze.
    pub fn node_account_id(&self) -> Option<AccountId> {
        self.node_account_id
    }

    /// The explicit fee, if one was set.
    pub fn fee(&self) -> Option<u64> {
        self.fee
    }

    /// The validity window length in seconds.
    pub fn valid_duration_secs(&self) -> u64 {
        self.valid_duration_secs
    }

    /// The memo.
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Gate for every mutation, shared with the variants' own setters.
    pub(crate) fn require_not_frozen(&self) -> Result<(), TransactionError> {
        if self.is_frozen() {
            return Err(TransactionError::Immutable);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LedgerTransaction
// ---------------------------------------------------------------------------

/// The seam between the shared lifecycle and a concrete transaction kind.
///
/// Variants supply the four hooks; the lifecycle methods are provided and
/// identical across kinds. `body_data` doubles as final validation — it is
/// the only place minimum-cardinality and required-field checks run, so a
/// transaction can pass through arbitrarily incomplete states while being
/// built but can never freeze in one.
pub trait LedgerTransaction {
    /// The embedded common state.
    fn base(&self) -> &BaseTransaction;

    /// Mutable access to the embedded common state.
    fn base_mut(&mut self) -> &mut BaseTransaction;

    /// Validate the domain fields and produce the kind-specific body.
    fn body_data(&self) -> Result<BodyData, TransactionError>;

    /// Submit the envelope through the channel method bound to this kind.
    fn submit<C: Channel>(
        &self,
        channel: &C,
        envelope: &[u8],
    ) -> Result<TransactionResponse, ChannelError>;

    /// The fee applied when the caller sets none.
    fn default_fee(&self) -> u64 {
        crate::config::DEFAULT_TRANSACTION_FEE
    }

    /// Execution-time pre-flight against externally fetched state. Runs
    /// after freeze, before any submission. Default: nothing to check.
    fn before_submit<C: Channel>(&self, _client: &Client<C>) -> Result<(), TransactionError> {
        Ok(())
    }

    // -- provided lifecycle -------------------------------------------------

    /// Set the transaction ID explicitly. Fails once frozen.
    fn set_transaction_id(
        &mut self,
        transaction_id: TransactionId,
    ) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        self.base().require_not_frozen()?;
        self.base_mut().transaction_id = Some(transaction_id);
        Ok(self)
    }

    /// Set the target node explicitly. Fails once frozen.
    fn set_node_account_id(
        &mut self,
        node_account_id: AccountId,
    ) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        self.base().require_not_frozen()?;
        self.base_mut().node_account_id = Some(node_account_id);
        Ok(self)
    }

    /// Set the maximum fee. Fails once frozen.
    fn set_transaction_fee(&mut self, fee: u64) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        self.base().require_not_frozen()?;
        self.base_mut().fee = Some(fee);
        Ok(self)
    }

    /// Set the validity window length. Fails once frozen.
    fn set_valid_duration_secs(&mut self, seconds: u64) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        self.base().require_not_frozen()?;
        self.base_mut().valid_duration_secs = seconds;
        Ok(self)
    }

    /// Set the memo. Fails once frozen.
    fn set_transaction_memo(&mut self, memo: impl Into<String>) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        self.base().require_not_frozen()?;
        self.base_mut().memo = memo.into();
        Ok(self)
    }

    /// Freeze the transaction: resolve identity fields from the client
    /// where unset, build and serialize the body, and reject all further
    /// mutation. Calling on an already frozen transaction is a no-op.
    ///
    /// Validation runs before any state is touched, so a failed freeze
    /// leaves the transaction exactly as it was.
    fn freeze_with<C: Channel>(&mut self, client: &Client<C>) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        if self.base().is_frozen() {
            return Ok(self);
        }

        let data = self.body_data()?;

        let transaction_id = match self.base().transaction_id() {
            Some(id) => id,
            None => client
                .generate_transaction_id()
                .ok_or(TransactionError::MissingOperator)?,
        };
        let node_account_id = self
            .base()
            .node_account_id()
            .or_else(|| client.default_node_account_id())
            .ok_or(TransactionError::MissingNodeId)?;

        let body = TransactionBody {
            transaction_id,
            node_account_id,
            fee: self.base().fee().unwrap_or_else(|| self.default_fee()),
            valid_duration_secs: self.base().valid_duration_secs(),
            memo: self.base().memo().to_string(),
            data,
        };
        let bytes = body.to_bytes();

        debug!(
            transaction_id = %transaction_id,
            node = %node_account_id,
            body_len = bytes.len(),
            "transaction frozen"
        );

        let base = self.base_mut();
        base.transaction_id = Some(transaction_id);
        base.node_account_id = Some(node_account_id);
        base.body_bytes = Some(bytes);
        Ok(self)
    }

    /// Sign the frozen body bytes and append a `(prefix, signature)` pair.
    ///
    /// Requires [`freeze_with`](Self::freeze_with) to have run — there is
    /// no implicit freeze here. Idempotent per key: if this key's prefix is
    /// already in the collection, nothing is appended.
    fn sign(&mut self, private_key: &PrivateKey) -> Result<&mut Self, TransactionError>
    where
        Self: Sized,
    {
        let public_key = private_key.public_key();
        let prefix = public_key.to_bytes_raw();

        if self.is_signed_by(&public_key) {
            debug!(key = %public_key, "key already signed this transaction, skipping");
            return Ok(self);
        }

        let signature = match self.base().body_bytes() {
            Some(body) => private_key.sign(body),
            None => return Err(TransactionError::NotFrozen),
        };

        self.base_mut().signatures.push(SignaturePair {
            public_key_prefix: prefix,
            signature,
            key_kind: private_key.kind(),
        });
        Ok(self)
    }

    /// `true` iff a collected signature pair's prefix equals this key's
    /// raw bytes.
    fn is_signed_by(&self, public_key: &PublicKey) -> bool {
        let prefix = public_key.to_bytes_raw();
        self.base()
            .signatures()
            .iter()
            .any(|pair| pair.public_key_prefix == prefix)
    }

    /// Submit the transaction and return its decoded receipt.
    ///
    /// Freezes first if needed, runs the variant pre-flight, signs with the
    /// operator key if its signature is absent, then submits through the
    /// channel. A non-OK precheck aborts before any receipt fetch; a non-OK
    /// receipt status is surfaced as [`TransactionError::ReceiptStatus`].
    /// No retries happen here — retry policy belongs to the channel's owner.
    fn execute<C: Channel>(&mut self, client: &Client<C>) -> Result<TransactionReceipt, TransactionError>
    where
        Self: Sized,
    {
        self.freeze_with(client)?;
        self.before_submit(client)?;

        {
            let operator = client.operator().ok_or(TransactionError::MissingOperator)?;
            if !self.is_signed_by(&operator.public_key()) {
                self.sign(&operator.private_key)?;
            }
        }

        let transaction_id = self
            .base()
            .transaction_id()
            .ok_or(TransactionError::NotFrozen)?;
        let envelope = {
            let base = self.base();
            let body = base.body_bytes().ok_or(TransactionError::NotFrozen)?;
            encode_signed_transaction(body, base.signatures())
        };

        let response = self.submit(client.channel(), &envelope)?;
        let precheck = ResponseCode::from_i32(response.precheck_code);
        if !precheck.is_ok() {
            return Err(TransactionError::Precheck(precheck));
        }

        info!(transaction_id = %transaction_id, "submission prechecked OK, fetching receipt");

        let wire = client.channel().receipt(&transaction_id)?;
        let receipt = TransactionReceipt::from_wire(&wire, Some(transaction_id));
        if !receipt.status.is_ok() {
            return Err(TransactionError::ReceiptStatus(receipt.status));
        }
        Ok(receipt)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Timestamp, TokenId};
    use crate::transaction::TokenAssociateTransaction;
    use crate::wire::{TokenInfo, WireReceipt};

    /// A channel that prechecks everything OK and returns a success receipt.
    struct OkChannel;

    impl Channel for OkChannel {
        fn pause_token(&self, _: &[u8]) -> Result<TransactionResponse, ChannelError> {
            Ok(TransactionResponse::ok())
        }
        fn associate_token(&self, _: &[u8]) -> Result<TransactionResponse, ChannelError> {
            Ok(TransactionResponse::ok())
        }
        fn claim_airdrop(&self, _: &[u8]) -> Result<TransactionResponse, ChannelError> {
            Ok(TransactionResponse::ok())
        }
        fn token_info(&self, _: &TokenId) -> Result<TokenInfo, ChannelError> {
            Err(ChannelError::Unsupported {
                operation: "token_info",
            })
        }
        fn receipt(&self, _: &TransactionId) -> Result<WireReceipt, ChannelError> {
            Ok(WireReceipt::default())
        }
    }

    fn operator_client() -> Client<OkChannel> {
        let mut client = Client::new(OkChannel);
        client.set_operator(AccountId::new(0, 0, 1001), PrivateKey::generate_ed25519());
        client.set_default_node(AccountId::new(0, 0, 3));
        client
    }

    fn buildable_tx() -> TokenAssociateTransaction {
        let mut tx = TokenAssociateTransaction::new();
        tx.set_account_id(AccountId::new(0, 0, 2002)).unwrap();
        tx.add_token_id(TokenId::new(0, 0, 5005)).unwrap();
        tx
    }

    #[test]
    fn freeze_is_idempotent() {
        let client = operator_client();
        let mut tx = buildable_tx();

        tx.freeze_with(&client).unwrap();
        let bytes_first = tx.base().body_bytes().unwrap().to_vec();
        tx.freeze_with(&client).unwrap();
        assert_eq!(tx.base().body_bytes().unwrap(), bytes_first.as_slice());
    }

    #[test]
    fn setters_fail_after_freeze() {
        let client = operator_client();
        let mut tx = buildable_tx();
        tx.freeze_with(&client).unwrap();

        assert!(matches!(
            tx.set_transaction_memo("too late"),
            Err(TransactionError::Immutable)
        ));
        assert!(matches!(
            tx.set_transaction_fee(1),
            Err(TransactionError::Immutable)
        ));
        assert!(matches!(
            tx.set_node_account_id(AccountId::new(0, 0, 9)),
            Err(TransactionError::Immutable)
        ));
        assert!(matches!(
            tx.set_valid_duration_secs(30),
            Err(TransactionError::Immutable)
        ));
        assert!(matches!(
            tx.set_transaction_id(TransactionId::new(
                AccountId::new(0, 0, 1),
                Timestamp::new(1, 0)
            )),
            Err(TransactionError::Immutable)
        ));
    }

    #[test]
    fn sign_before_freeze_is_rejected() {
        let mut tx = buildable_tx();
        let key = PrivateKey::generate_ed25519();
        match tx.sign(&key) {
            Err(TransactionError::NotFrozen) => {}
            other => panic!("expected NotFrozen, got {:?}", other),
        }
    }

    #[test]
    fn sign_is_idempotent_per_key() {
        let client = operator_client();
        let mut tx = buildable_tx();
        tx.freeze_with(&client).unwrap();

        let key = PrivateKey::generate_ed25519();
        tx.sign(&key).unwrap();
        tx.sign(&key).unwrap();
        assert_eq!(tx.base().signatures().len(), 1);

        // A second, distinct key appends a second pair.
        let other = PrivateKey::generate_ecdsa();
        tx.sign(&other).unwrap();
        assert_eq!(tx.base().signatures().len(), 2);
    }

    #[test]
    fn is_signed_by_matches_prefixes() {
        let client = operator_client();
        let mut tx = buildable_tx();
        tx.freeze_with(&client).unwrap();

        let key = PrivateKey::generate_ecdsa();
        assert!(!tx.is_signed_by(&key.public_key()));
        tx.sign(&key).unwrap();
        assert!(tx.is_signed_by(&key.public_key()));
        assert!(!tx.is_signed_by(&PrivateKey::generate_ed25519().public_key()));
    }

    #[test]
    fn signatures_verify_against_body_bytes() {
        let client = operator_client();
        let mut tx = buildable_tx();
        tx.freeze_with(&client).unwrap();

        let ed = PrivateKey::generate_ed25519();
        let ec = PrivateKey::generate_ecdsa();
        tx.sign(&ed).unwrap();
        tx.sign(&ec).unwrap();

        let body = tx.base().body_bytes().unwrap();
        for pair in tx.base().signatures() {
            let key = match pair.key_kind {
                crate::crypto::keys::KeyKind::Ed25519 => {
                    PublicKey::from_bytes_ed25519(&pair.public_key_prefix).unwrap()
                }
                crate::crypto::keys::KeyKind::EcdsaSecp256k1 => {
                    PublicKey::from_bytes_ecdsa(&pair.public_key_prefix).unwrap()
                }
            };
            key.verify(&pair.signature, body).unwrap();
        }
    }

    #[test]
    fn freeze_without_operator_fails_when_id_unset() {
        let mut client = Client::new(OkChannel);
        client.set_default_node(AccountId::new(0, 0, 3));

        let mut tx = buildable_tx();
        match tx.freeze_with(&client) {
            Err(TransactionError::MissingOperator) => {}
            other => panic!("expected MissingOperator, got {:?}", other),
        }
        // Failed freeze leaves the transaction unfrozen and mutable.
        assert!(!tx.base().is_frozen());
        tx.set_transaction_memo("still mutable").unwrap();
    }

    #[test]
    fn freeze_without_node_fails() {
        let mut client = Client::new(OkChannel);
        client.set_operator(AccountId::new(0, 0, 1001), PrivateKey::generate_ed25519());

        let mut tx = buildable_tx();
        match tx.freeze_with(&client) {
            Err(TransactionError::MissingNodeId) => {}
            other => panic!("expected MissingNodeId, got {:?}", other),
        }
    }

    #[test]
    fn explicit_ids_survive_freeze() {
        let client = operator_client();
        let explicit = TransactionId::new(AccountId::new(0, 0, 777), Timestamp::new(123, 456));

        let mut tx = buildable_tx();
        tx.set_transaction_id(explicit).unwrap();
        tx.set_node_account_id(AccountId::new(0, 0, 8)).unwrap();
        tx.freeze_with(&client).unwrap();

        assert_eq!(tx.base().transaction_id(), Some(explicit));
        assert_eq!(tx.base().node_account_id(), Some(AccountId::new(0, 0, 8)));
    }

    #[test]
    fn execute_auto_signs_with_operator_only_when_absent() {
        let client = operator_client();

        // Case 1: operator has not signed — execute adds exactly one pair.
        let mut tx = buildable_tx();
        tx.execute(&client).unwrap();
        assert_eq!(tx.base().signatures().len(), 1);
        let operator_key = client.operator().unwrap().public_key();
        assert!(tx.is_signed_by(&operator_key));

        // Case 2: operator signed manually — execute adds nothing.
        let mut tx = buildable_tx();
        tx.freeze_with(&client).unwrap();
        tx.sign(&client.operator().unwrap().private_key.clone()).unwrap();
        tx.execute(&client).unwrap();
        assert_eq!(tx.base().signatures().len(), 1);
    }
}
