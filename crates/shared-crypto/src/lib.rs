//! # Shared Crypto
//!
//! Signing and hashing primitives used to build and sign ledger
//! transactions.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Proposal, envelope and endorsement signatures |
//! | `hashing` | SHA-256 | Transaction ids, proposal hashes |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing
//! - Secret seeds are zeroized when key pairs are dropped

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{compute_txn_id, generate_nonce, sha256, Hash, NONCE_LENGTH};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, SEED_LENGTH};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
