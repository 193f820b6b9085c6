//! # Adapters
//!
//! In-process implementations of the outbound ports.

pub mod crypto;
pub mod orderer;
pub mod peer;

pub use crypto::Ed25519CryptoProvider;
pub use orderer::{InMemoryOrderer, OrdererBehavior};
pub use peer::{InMemoryPeer, PeerBehavior};
