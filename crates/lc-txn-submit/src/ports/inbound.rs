//! # Inbound Ports
//!
//! The API the submission service offers to applications.

use crate::domain::{
    AssembledTransaction, AssemblyError, BroadcastError, BroadcastResult, ChaincodeInvokeRequest,
    DispatchError, InstantiateRequest, ProposalError, ProposalOutcome, SendError, SigningError,
    TransactionId, TransactionProposal, TransactionProposalResponse,
};
use crate::ports::outbound::Peer;
use async_trait::async_trait;
use shared_types::SignedEnvelope;
use std::sync::Arc;

/// Transaction submission API.
#[async_trait]
pub trait TransactionSubmissionApi: Send + Sync {
    /// Build and sign an invoke proposal.
    fn build_transaction_proposal(
        &self,
        request: &ChaincodeInvokeRequest,
    ) -> Result<TransactionProposal, ProposalError>;

    /// Build and sign an instantiate proposal for `targets`.
    fn build_instantiate_proposal(
        &self,
        request: &InstantiateRequest,
        targets: &[Arc<dyn Peer>],
    ) -> Result<TransactionProposal, ProposalError>;

    /// Send `proposal` to every target concurrently.
    ///
    /// Returns one outcome per target in target order. A failed peer never
    /// aborts the others.
    async fn send_proposal(
        &self,
        proposal: &TransactionProposal,
        targets: &[Arc<dyn Peer>],
    ) -> Vec<ProposalOutcome>;

    /// Build an invoke proposal and send it to `targets`, or to every
    /// channel peer when `None`. An empty target set fails with `NoPeers`.
    async fn send_transaction_proposal(
        &self,
        request: &ChaincodeInvokeRequest,
        targets: Option<&[Arc<dyn Peer>]>,
    ) -> Result<(Vec<ProposalOutcome>, TransactionId), DispatchError>;

    /// Build an instantiate proposal and send it to `targets`.
    async fn send_instantiate_proposal(
        &self,
        request: &InstantiateRequest,
        targets: &[Arc<dyn Peer>],
    ) -> Result<(Vec<ProposalOutcome>, TransactionId), ProposalError>;

    /// Fold endorsement responses into a transaction.
    fn create_transaction(
        &self,
        responses: &[TransactionProposalResponse],
    ) -> Result<AssembledTransaction, AssemblyError>;

    /// Sign serialized payload bytes into an envelope.
    fn sign_payload(&self, payload: &[u8]) -> Result<SignedEnvelope, SigningError>;

    /// Send `envelope` to every channel orderer concurrently.
    async fn broadcast_envelope(
        &self,
        envelope: &SignedEnvelope,
    ) -> Result<BroadcastResult, BroadcastError>;

    /// Wrap, sign and broadcast an assembled transaction.
    async fn send_transaction(
        &self,
        transaction: Option<&AssembledTransaction>,
    ) -> Result<BroadcastResult, SendError>;
}
