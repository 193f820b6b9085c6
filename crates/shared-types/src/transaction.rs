//! # Transaction Messages
//!
//! The ledger transaction body built from a proposal and its endorsements.

use crate::proposal::Endorsement;
use prost::Message;

/// One or more actions submitted atomically.
#[derive(Clone, PartialEq, Message)]
pub struct Transaction {
    /// Actions in submission order.
    #[prost(message, repeated, tag = "1")]
    pub actions: Vec<TransactionAction>,
}

/// A single action bound to its creator.
#[derive(Clone, PartialEq, Message)]
pub struct TransactionAction {
    /// Encoded `SignatureHeader` of the proposal creator.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    /// Encoded `ChaincodeActionPayload`.
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
}

/// Proposal input plus the endorsed result.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeActionPayload {
    /// Encoded `ChaincodeProposalPayload` with the transient map removed.
    #[prost(bytes = "vec", tag = "1")]
    pub chaincode_proposal_payload: Vec<u8>,
    /// Result and its endorsements.
    #[prost(message, optional, tag = "2")]
    pub action: Option<ChaincodeEndorsedAction>,
}

/// The endorsed response payload and who endorsed it.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeEndorsedAction {
    /// Encoded `ProposalResponsePayload` the endorsers signed.
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_response_payload: Vec<u8>,
    /// One endorsement per responding peer.
    #[prost(message, repeated, tag = "2")]
    pub endorsements: Vec<Endorsement>,
}

impl Transaction {
    /// Endorsements across every action.
    pub fn endorsement_count(&self) -> usize {
        self.actions
            .iter()
            .filter_map(|a| ChaincodeActionPayload::decode(a.payload.as_slice()).ok())
            .filter_map(|p| p.action)
            .map(|a| a.endorsements.len())
            .sum()
    }
}
