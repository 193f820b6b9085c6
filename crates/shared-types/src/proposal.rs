//! # Proposal Messages
//!
//! Request/response messages exchanged with endorsing peers.

use crate::chaincode::ChaincodeId;
use prost::Message;
use prost_types::Timestamp;
use std::collections::HashMap;

/// A request for endorsement.
#[derive(Clone, PartialEq, Message)]
pub struct Proposal {
    /// Encoded `Header`.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    /// Encoded `ChaincodeProposalPayload` for chaincode proposals.
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    /// Optional type-specific extension.
    #[prost(bytes = "vec", tag = "3")]
    pub extension: Vec<u8>,
}

/// A proposal plus the creator's signature, ready for transport.
#[derive(Clone, PartialEq, Message)]
pub struct SignedProposal {
    /// Encoded `Proposal`.
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_bytes: Vec<u8>,
    /// Signature over `proposal_bytes`.
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

/// Channel header extension for endorser transactions.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeHeaderExtension {
    /// Deprecated visibility control; always empty.
    #[prost(bytes = "vec", tag = "1")]
    pub payload_visibility: Vec<u8>,
    /// Chaincode targeted by the proposal.
    #[prost(message, optional, tag = "2")]
    pub chaincode_id: Option<ChaincodeId>,
}

/// Chaincode input plus data that must not reach the ledger.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeProposalPayload {
    /// Encoded `ChaincodeInvocationSpec`.
    #[prost(bytes = "vec", tag = "1")]
    pub input: Vec<u8>,
    /// Private inputs, stripped before the transaction is assembled.
    #[prost(map = "string, bytes", tag = "2")]
    pub transient_map: HashMap<String, Vec<u8>>,
}

impl ChaincodeProposalPayload {
    /// Copy suitable for the ledger: transient data removed.
    pub fn without_transient(&self) -> Self {
        Self {
            input: self.input.clone(),
            transient_map: HashMap::new(),
        }
    }
}

/// Status, message and result returned by chaincode.
#[derive(Clone, PartialEq, Message)]
pub struct Response {
    /// Status code; 200 means success.
    #[prost(int32, tag = "1")]
    pub status: i32,
    /// Human readable message.
    #[prost(string, tag = "2")]
    pub message: String,
    /// Result bytes.
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

/// A peer's signed approval of the simulated result.
#[derive(Clone, PartialEq, Message)]
pub struct Endorsement {
    /// Encoded `SerializedIdentity` of the endorser.
    #[prost(bytes = "vec", tag = "1")]
    pub endorser: Vec<u8>,
    /// Signature over `ProposalResponse.payload || endorser`.
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

/// Payload endorsed by a peer.
#[derive(Clone, PartialEq, Message)]
pub struct ProposalResponsePayload {
    /// Hash binding the response to the proposal.
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_hash: Vec<u8>,
    /// Encoded chaincode action (read/write set, events, response).
    #[prost(bytes = "vec", tag = "2")]
    pub extension: Vec<u8>,
}

/// What an endorsing peer sends back.
#[derive(Clone, PartialEq, Message)]
pub struct ProposalResponse {
    /// Message protocol version.
    #[prost(int32, tag = "1")]
    pub version: i32,
    /// Creation time at the peer.
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<Timestamp>,
    /// Chaincode response.
    #[prost(message, optional, tag = "4")]
    pub response: Option<Response>,
    /// Encoded `ProposalResponsePayload`.
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,
    /// The peer's endorsement, absent when the peer declined.
    #[prost(message, optional, tag = "6")]
    pub endorsement: Option<Endorsement>,
}

impl ProposalResponse {
    /// Status code; an absent response record reads as 0.
    pub fn status(&self) -> i32 {
        self.response.as_ref().map_or(0, |r| r.status)
    }

    /// Response message; empty when the response record is absent.
    pub fn message(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.message.as_str())
    }
}
