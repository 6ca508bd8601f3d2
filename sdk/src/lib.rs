// Copyright (c) 2026 Meridian Foundation. MIT License.
// See LICENSE for details.

//! # Meridian SDK — Ledger Client Library
//!
//! The official Rust client for the Meridian ledger: build a transaction,
//! freeze it into byte-exact immutability, collect signatures from one or
//! more keys, submit it, and decode the receipt that comes back.
//!
//! Meridian speaks two signature dialects, Ed25519 and ECDSA over
//! secp256k1, and this crate treats both as first-class citizens behind a
//! single key abstraction. Entities are addressed by `shard.realm.num`
//! triples, and every submitted transaction resolves to a typed
//! [`transaction::TransactionReceipt`].
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! ledger client:
//!
//! - **crypto**: the dual-family key abstraction and its DER plumbing.
//! - **entity**: typed identifiers for accounts, tokens, NFTs, topics,
//!   files, transactions, and pending airdrops.
//! - **wire**: the canonical byte formats the network consumes and produces.
//! - **transaction**: the build/freeze/sign/execute state machine and its
//!   concrete variants.
//! - **client**: operator identity, node selection, and the `Channel` seam
//!   where gRPC transport plugs in.
//! - **config**: protocol constants and fee defaults.
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: construct a variant and set its domain fields.
//! 2. **Freeze**: `freeze_with(&client)` fixes the transaction ID and node,
//!    serializes the body to canonical bytes, and rejects all further
//!    mutation.
//! 3. **Sign**: `sign(&key)` any number of keys; one pair per key.
//! 4. **Execute**: `execute(&client)` auto-signs with the operator if
//!    needed, submits, and returns the decoded receipt.
//!
//! ## Design Philosophy
//!
//! 1. Freezing is a one-way door. Setters fail loudly afterwards.
//! 2. Canonical bytes are hand-encoded and deterministic; serde never
//!    touches anything a signature covers.
//! 3. Transport is someone else's problem. The core takes a
//!    [`client::Channel`] and never opens a socket itself.
//! 4. If it can reach the network, it has tests against a mock channel first.

pub mod client;
pub mod config;
pub mod crypto;
pub mod entity;
pub mod transaction;
pub mod wire;
