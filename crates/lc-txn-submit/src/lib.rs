//! # LC Transaction Submission
//!
//! Client-side transaction submission for a permissioned ledger channel.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Drive a chaincode invocation through the endorse-order pipeline:
//! - Build and sign a proposal under a fresh transaction id
//! - Fan the proposal out to endorsing peers concurrently
//! - Validate the responses and fold the endorsements into a transaction
//! - Sign the transaction payload and broadcast it to every orderer
//!
//! ## Concurrency
//!
//! | Concern | Approach |
//! |---------|----------|
//! | Peer / orderer fan-out | One task per target, bounded by a semaphore |
//! | Slow nodes | Per-request deadline, reported as a timeout |
//! | Membership changes | Registry behind `RwLock`; operations use snapshots |
//!
//! ## Module Structure
//!
//! ```text
//! lc-txn-submit/
//! ├── domain/     # Ids, headers, proposal builders, assembly, errors
//! ├── ports/      # API trait + peer/orderer/crypto traits
//! ├── adapters/   # In-memory peer and orderer, Ed25519 provider
//! ├── service/    # Channel service, membership, signer, fan-out
//! └── config.rs   # Fan-out limits and policies
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    Ed25519CryptoProvider, InMemoryOrderer, InMemoryPeer, OrdererBehavior, PeerBehavior,
};
pub use config::{ConfigError, FanOutConfig, SubmitConfig, DEFAULT_MAX_IN_FLIGHT};
pub use domain::{
    build_channel_header, create_transaction, partition_outcomes, AssembledTransaction,
    AssemblyError, AssemblyPolicy, BroadcastError, BroadcastPolicy, BroadcastResult,
    ChaincodeInvokeRequest, DispatchError, InstantiateRequest, MembershipError, OrdererAck,
    ProposalError, ProposalOutcome, SendError, SigningError, SigningIdentity, TargetFailure,
    TransactionId, TransactionProposal, TransactionProposalResponse, TransportError,
};
pub use ports::{CryptoProvider, Orderer, Peer, TransactionSubmissionApi};
pub use service::{Broadcaster, ChannelMembership, ChannelService, ProposalDispatcher, Signer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
