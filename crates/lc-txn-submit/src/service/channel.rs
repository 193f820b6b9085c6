//! # Channel Service
//!
//! Application service implementing `TransactionSubmissionApi` for one
//! channel.
//!
//! ## Flow
//!
//! ```text
//! build_transaction_proposal ─▶ send_proposal ─▶ create_transaction ─▶ send_transaction
//!        (sign)                  (fan-out peers)     (validate+fold)      (sign+fan-out orderers)
//! ```

use crate::config::{ConfigError, SubmitConfig};
use crate::domain::{
    create_transaction, instantiate_proposal, invoke_proposal, validate_instantiate_request,
    AssembledTransaction, AssemblyError, AssemblyPolicy, BroadcastError, BroadcastResult,
    ChaincodeInvokeRequest, DispatchError, InstantiateRequest, MembershipError, ProposalError,
    ProposalOutcome, SendError, SigningError, TransactionId, TransactionProposal,
    TransactionProposalResponse,
};
use crate::ports::inbound::TransactionSubmissionApi;
use crate::ports::outbound::{Orderer, Peer};
use crate::service::broadcaster::Broadcaster;
use crate::service::dispatcher::ProposalDispatcher;
use crate::service::membership::ChannelMembership;
use crate::service::signer::Signer;
use async_trait::async_trait;
use prost::Message;
use shared_types::{
    decode_channel_header, decode_header, Payload, Proposal, SignedEnvelope, SignedProposal,
};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

/// Transaction submission for one channel.
pub struct ChannelService {
    channel_id: String,
    membership: Arc<ChannelMembership>,
    signer: Signer,
    dispatcher: ProposalDispatcher,
    broadcaster: Broadcaster,
    assembly: AssemblyPolicy,
}

impl ChannelService {
    /// Create a service for `channel_id`.
    ///
    /// # Errors
    /// Rejects an empty channel id or an invalid config.
    pub fn new(
        channel_id: impl Into<String>,
        signer: Signer,
        config: SubmitConfig,
    ) -> Result<Self, ConfigError> {
        let channel_id = channel_id.into();
        if channel_id.is_empty() {
            return Err(ConfigError::MissingChannelId);
        }
        config.validate()?;

        let membership = Arc::new(ChannelMembership::new());
        let broadcaster = Broadcaster::new(
            Arc::clone(&membership),
            config.orderer_fan_out.clone(),
            config.broadcast_policy,
        );
        info!(
            "[lc-txn] Channel service ready for {} (broadcast policy {})",
            channel_id, config.broadcast_policy
        );

        Ok(Self {
            channel_id,
            membership,
            signer,
            dispatcher: ProposalDispatcher::new(config.peer_fan_out),
            broadcaster,
            assembly: config.assembly,
        })
    }

    /// Channel this service submits to.
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Shared membership registry.
    pub fn membership(&self) -> &Arc<ChannelMembership> {
        &self.membership
    }

    /// Register a peer.
    pub fn add_peer(&self, peer: Arc<dyn Peer>) -> Result<(), MembershipError> {
        self.membership.add_peer(peer)
    }

    /// Unregister a peer.
    pub fn remove_peer(&self, url: &str) -> Option<Arc<dyn Peer>> {
        self.membership.remove_peer(url)
    }

    /// Register an orderer.
    pub fn add_orderer(&self, orderer: Arc<dyn Orderer>) -> Result<(), MembershipError> {
        self.membership.add_orderer(orderer)
    }

    /// Unregister an orderer.
    pub fn remove_orderer(&self, url: &str) -> Option<Arc<dyn Orderer>> {
        self.membership.remove_orderer(url)
    }

    /// Fresh transaction id for the configured identity.
    pub fn new_txn_id(&self) -> Result<TransactionId, SigningError> {
        self.signer.new_txn_id()
    }

    fn sign_proposal(
        &self,
        txn_id: TransactionId,
        proposal: Proposal,
    ) -> Result<TransactionProposal, ProposalError> {
        let proposal_bytes = proposal.encode_to_vec();
        let signature = self.signer.sign(&proposal_bytes)?;
        Ok(TransactionProposal {
            txn_id,
            proposal: Some(proposal),
            signed_proposal: SignedProposal {
                proposal_bytes,
                signature,
            },
        })
    }
}

#[async_trait]
impl TransactionSubmissionApi for ChannelService {
    fn build_transaction_proposal(
        &self,
        request: &ChaincodeInvokeRequest,
    ) -> Result<TransactionProposal, ProposalError> {
        let creator = self.signer.creator()?;
        let txn_id = TransactionId::generate(&creator);
        let proposal = invoke_proposal(
            &self.channel_id,
            &txn_id,
            &creator,
            request,
            SystemTime::now(),
        )?;
        debug!(
            "[lc-txn] Built proposal {} for {}:{}",
            txn_id, request.chaincode_id, request.fcn
        );
        self.sign_proposal(txn_id, proposal)
    }

    fn build_instantiate_proposal(
        &self,
        request: &InstantiateRequest,
        targets: &[Arc<dyn Peer>],
    ) -> Result<TransactionProposal, ProposalError> {
        validate_instantiate_request(request, targets.len())?;
        let creator = self.signer.creator()?;
        let txn_id = TransactionId::generate(&creator);
        let proposal = instantiate_proposal(
            &self.channel_id,
            &txn_id,
            &creator,
            request,
            SystemTime::now(),
        )?;
        debug!(
            "[lc-txn] Built instantiate proposal {} for {}@{}",
            txn_id, request.chaincode_name, request.chaincode_version
        );
        self.sign_proposal(txn_id, proposal)
    }

    async fn send_proposal(
        &self,
        proposal: &TransactionProposal,
        targets: &[Arc<dyn Peer>],
    ) -> Vec<ProposalOutcome> {
        self.dispatcher.send_proposal(proposal, targets).await
    }

    async fn send_transaction_proposal(
        &self,
        request: &ChaincodeInvokeRequest,
        targets: Option<&[Arc<dyn Peer>]>,
    ) -> Result<(Vec<ProposalOutcome>, TransactionId), DispatchError> {
        let defaults;
        let targets = match targets {
            Some(targets) => targets,
            None => {
                defaults = self.membership.peers();
                defaults.as_slice()
            }
        };
        if targets.is_empty() {
            return Err(DispatchError::NoPeers);
        }

        let proposal = self.build_transaction_proposal(request)?;
        let outcomes = self.dispatcher.send_proposal(&proposal, targets).await;
        Ok((outcomes, proposal.txn_id))
    }

    async fn send_instantiate_proposal(
        &self,
        request: &InstantiateRequest,
        targets: &[Arc<dyn Peer>],
    ) -> Result<(Vec<ProposalOutcome>, TransactionId), ProposalError> {
        let proposal = self.build_instantiate_proposal(request, targets)?;
        let outcomes = self.dispatcher.send_proposal(&proposal, targets).await;
        Ok((outcomes, proposal.txn_id))
    }

    fn create_transaction(
        &self,
        responses: &[TransactionProposalResponse],
    ) -> Result<AssembledTransaction, AssemblyError> {
        create_transaction(responses, &self.assembly)
    }

    fn sign_payload(&self, payload: &[u8]) -> Result<SignedEnvelope, SigningError> {
        self.signer.sign_payload(payload)
    }

    async fn broadcast_envelope(
        &self,
        envelope: &SignedEnvelope,
    ) -> Result<BroadcastResult, BroadcastError> {
        self.broadcaster.broadcast_envelope(envelope).await
    }

    async fn send_transaction(
        &self,
        transaction: Option<&AssembledTransaction>,
    ) -> Result<BroadcastResult, SendError> {
        if self.membership.orderer_count() == 0 {
            return Err(SendError::NoOrderers);
        }
        let transaction = transaction.ok_or(SendError::NilTransaction)?;
        let proposal = transaction
            .proposal()
            .proposal
            .as_ref()
            .ok_or(SendError::NilProposal)?;

        let header = decode_header(&proposal.header).map_err(|_| SendError::HeaderUnmarshal)?;
        let channel_header =
            decode_channel_header(&header.channel_header).map_err(|_| SendError::HeaderUnmarshal)?;

        let payload = Payload {
            header: Some(header),
            data: transaction.transaction().encode_to_vec(),
        };
        let envelope = self.signer.sign_payload(&payload.encode_to_vec())?;
        debug!(
            "[lc-txn] Sending transaction {} on channel {}",
            channel_header.tx_id, channel_header.channel_id
        );

        Ok(self.broadcaster.broadcast_envelope(&envelope).await?)
    }
}
