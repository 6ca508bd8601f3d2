//! # Transaction Module
//!
//! The build/freeze/sign/execute state machine and its concrete variants.
//! Everything a caller submits to the Meridian network goes through here.
//!
//! ## Architecture
//!
//! ```text
//! base.rs                — BaseTransaction state + the LedgerTransaction trait
//! token_pause.rs         — Pause all operations on a token
//! token_associate.rs     — Associate an account with tokens
//! token_claim_airdrop.rs — Claim parked airdrops (the bounded-set variant)
//! receipt.rs             — Typed TransactionReceipt decoded from the wire
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: construct a variant, set domain fields with chained
//!    setters. Everything is mutable.
//! 2. **Freeze**: `freeze_with(&client)` resolves the transaction ID and
//!    node from the client where unset, serializes the body to canonical
//!    bytes, and closes the door: every setter fails from here on.
//! 3. **Sign**: `sign(&key)` appends one `(public key prefix, signature)`
//!    pair per distinct key. Signing requires a frozen transaction; there
//!    is no implicit freeze hiding in the signature path.
//! 4. **Execute**: `execute(&client)` freezes if needed, runs the variant's
//!    pre-flight, auto-signs with the operator if its signature is missing,
//!    submits through the channel, and decodes the receipt.
//!
//! ## Design Decisions
//!
//! - Freezing is modeled as "body bytes exist": one `Option<Vec<u8>>` is
//!   the entire state flag, so the flag and the bytes cannot disagree.
//! - `sign` is idempotent per key. Both families sign deterministically
//!   over fixed body bytes, so a duplicate pair would carry zero
//!   information; re-signing with a known key is a logged no-op.
//! - Validation is split: cardinality caps and duplicates fail on the
//!   mutating call (leaving state untouched), minimums fail only at body
//!   build. A half-built transaction may be empty; a submitted one may not.

pub mod base;
pub mod receipt;
pub mod token_associate;
pub mod token_claim_airdrop;
pub mod token_pause;

pub use base::{BaseTransaction, LedgerTransaction, TransactionError};
pub use receipt::TransactionReceipt;
pub use token_associate::TokenAssociateTransaction;
pub use token_claim_airdrop::TokenClaimAirdropTransaction;
pub use token_pause::TokenPauseTransaction;
