//! # Protocol Constants
//!
//! Every magic number the SDK relies on lives here. If you're hardcoding a
//! constant somewhere else, move it — future readers grep this file first.
//!
//! Fee values are denominated in the ledger's smallest unit. They are
//! client-side *defaults*, not consensus rules: the network will charge what
//! it charges, these just cap what the payer is willing to spend.

// ---------------------------------------------------------------------------
// Transaction Defaults
// ---------------------------------------------------------------------------

/// Default maximum fee attached to a transaction when the caller sets none.
pub const DEFAULT_TRANSACTION_FEE: u64 = 2_000_000;

/// Default fee for token pause transactions. Pausing is an administrative
/// operation and the network prices it far above ordinary transfers.
pub const TOKEN_PAUSE_TRANSACTION_FEE: u64 = 3_000_000_000;

/// How long a transaction stays valid after its valid-start timestamp,
/// in seconds. The network rejects submissions outside this window.
pub const DEFAULT_TRANSACTION_VALID_DURATION_SECS: u64 = 120;

// ---------------------------------------------------------------------------
// Pending Airdrop Claims
// ---------------------------------------------------------------------------

/// Minimum number of pending airdrop IDs a claim transaction must carry.
/// Enforced at body-build time, not on every intermediate mutation.
pub const MIN_PENDING_AIRDROP_CLAIMS: usize = 1;

/// Maximum number of pending airdrop IDs a single claim can cover.
/// Enforced incrementally: an add that would exceed this fails and leaves
/// the list untouched.
pub const MAX_PENDING_AIRDROP_CLAIMS: usize = 10;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 seed and public key length in bytes.
pub const ED25519_KEY_LENGTH: usize = 32;

/// ECDSA secp256k1 private scalar length in bytes.
pub const ECDSA_SCALAR_LENGTH: usize = 32;

/// ECDSA secp256k1 compressed public point length in bytes. This is the
/// canonical raw export form.
pub const ECDSA_COMPRESSED_POINT_LENGTH: usize = 33;

/// ECDSA secp256k1 uncompressed public point length in bytes. Accepted on
/// input, never produced on output.
pub const ECDSA_UNCOMPRESSED_POINT_LENGTH: usize = 65;

/// Signature length for both families: Ed25519 and compact-form ECDSA are
/// each exactly 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Wire Format
// ---------------------------------------------------------------------------

/// Version byte prefixed to every canonical transaction body. Bump on any
/// change to the deterministic encoding — old bytes must never re-parse
/// silently under new rules.
pub const WIRE_BODY_VERSION: u8 = 1;
