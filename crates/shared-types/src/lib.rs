//! # Shared Types Crate
//!
//! Wire protocol messages for the ledger network, plus the immutable
//! `SignedEnvelope` handed to ordering nodes.
//!
//! ## Design Principles
//!
//! - **Fixed Contract**: Every message carries the network's protobuf field
//!   tags. Nothing here may be renumbered.
//! - **Protobuf Semantics**: Empty byte strings decode to default messages.
//!   Callers that need presence checks must do them explicitly.
//! - **Single Source of Truth**: Subsystem crates never define wire types.
//!
//! ## Module Map
//!
//! ```text
//! common       Header, ChannelHeader, SignatureHeader, Payload, Envelope
//! proposal     Proposal, SignedProposal, ProposalResponse, Endorsement
//! chaincode    ChaincodeId, ChaincodeSpec, deployment/invocation specs
//! transaction  Transaction, TransactionAction, endorsed action payloads
//! identity     SerializedIdentity (the creator field)
//! orderer      BroadcastResponse
//! envelope     SignedEnvelope (domain wrapper)
//! codec        named decode helpers
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chaincode;
pub mod codec;
pub mod common;
pub mod envelope;
pub mod errors;
pub mod identity;
pub mod orderer;
pub mod proposal;
pub mod transaction;

pub use chaincode::*;
pub use codec::*;
pub use common::*;
pub use envelope::SignedEnvelope;
pub use errors::CodecError;
pub use identity::SerializedIdentity;
pub use orderer::BroadcastResponse;
pub use proposal::*;
pub use transaction::*;

/// Re-exported so downstream crates share one timestamp type.
pub use prost_types::Timestamp;
