//! # Wire Formats
//!
//! The byte shapes this SDK produces for the network and the structures it
//! consumes back. Two very different disciplines live here:
//!
//! - **Canonical encoding** ([`body`]) — the bytes signatures cover. These
//!   are hand-encoded, deterministic, and versioned: fixed-width
//!   little-endian integers, `u32` length prefixes, one-byte discriminants.
//!   serde never touches them, because a serializer whose output can drift
//!   between versions has no business under a signature.
//! - **Response projections** ([`receipt`], [`status`]) — plain structs the
//!   channel collaborator fills in from the network's replies. These are
//!   inputs to decoding, not signature material, so they get the ordinary
//!   serde treatment.

pub mod body;
pub mod receipt;
pub mod status;

pub use body::{encode_signed_transaction, BodyData, SignaturePair, TransactionBody};
pub use receipt::{TokenInfo, TransactionResponse, WireEntityId, WireReceipt};
pub use status::ResponseCode;
