//! In-memory endorsing peer.
//!
//! Implements the `Peer` port without a network. Endorsements are real
//! Ed25519 signatures so assembled transactions can be checked end to end.

use crate::domain::TransportError;
use crate::ports::outbound::Peer;
use async_trait::async_trait;
use parking_lot::RwLock;
use prost::Message;
use shared_crypto::{sha256, Ed25519KeyPair, Ed25519PublicKey};
use shared_types::{
    Endorsement, Proposal, ProposalResponse, ProposalResponsePayload, Response,
    SerializedIdentity, SignedProposal, Status,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// How the peer answers proposals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerBehavior {
    /// Simulate and endorse.
    Endorse,
    /// Answer with a chaincode error and no endorsement.
    Reject {
        /// Status code to return.
        status: i32,
        /// Message to return.
        message: String,
    },
    /// Answer 200 but leave the endorsement out.
    WithholdEndorsement,
    /// Fail at the transport level.
    Unreachable,
}

/// Peer that endorses in process.
pub struct InMemoryPeer {
    url: String,
    name: String,
    roles: Vec<String>,
    msp_id: String,
    keypair: Ed25519KeyPair,
    behavior: RwLock<PeerBehavior>,
    latency: Duration,
    received: AtomicUsize,
}

impl InMemoryPeer {
    /// Endorsing peer at `url` with a fresh key.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            name: url.clone(),
            url,
            roles: vec!["endorser".to_string()],
            msp_id: "PeerOrgMSP".to_string(),
            keypair: Ed25519KeyPair::generate(),
            behavior: RwLock::new(PeerBehavior::Endorse),
            latency: Duration::ZERO,
            received: AtomicUsize::new(0),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the roles.
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Delay every answer by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Start with `behavior`.
    pub fn with_behavior(self, behavior: PeerBehavior) -> Self {
        *self.behavior.write() = behavior;
        self
    }

    /// Change behavior at runtime.
    pub fn set_behavior(&self, behavior: PeerBehavior) {
        *self.behavior.write() = behavior;
    }

    /// Proposals received so far.
    pub fn proposals_received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    /// Serialized identity placed in the endorsement.
    pub fn endorser_identity(&self) -> Vec<u8> {
        SerializedIdentity::new(
            self.msp_id.clone(),
            self.keypair.public_key().as_bytes().to_vec(),
        )
        .to_bytes()
    }

    /// Key endorsements can be verified with.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    fn endorse(&self, proposal: &SignedProposal) -> ProposalResponse {
        if Proposal::decode(proposal.proposal_bytes.as_slice()).is_err() {
            warn!("[lc-txn] Peer {} received malformed proposal", self.url);
            return response_without_endorsement(
                Status::BadRequest.code(),
                "failed to unmarshal proposal",
            );
        }

        let payload = ProposalResponsePayload {
            proposal_hash: sha256(&proposal.proposal_bytes).to_vec(),
            extension: b"simulated".to_vec(),
        }
        .encode_to_vec();

        let endorser = self.endorser_identity();
        let mut signed = payload.clone();
        signed.extend_from_slice(&endorser);

        ProposalResponse {
            version: 1,
            timestamp: Some(SystemTime::now().into()),
            response: Some(Response {
                status: Status::Success.code(),
                message: "OK".to_string(),
                payload: Vec::new(),
            }),
            payload,
            endorsement: Some(Endorsement {
                endorser,
                signature: self.keypair.sign(&signed).to_vec(),
            }),
        }
    }
}

fn response_without_endorsement(status: i32, message: &str) -> ProposalResponse {
    ProposalResponse {
        version: 1,
        timestamp: Some(SystemTime::now().into()),
        response: Some(Response {
            status,
            message: message.to_string(),
            payload: Vec::new(),
        }),
        payload: Vec::new(),
        endorsement: None,
    }
}

#[async_trait]
impl Peer for InMemoryPeer {
    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> &[String] {
        &self.roles
    }

    async fn process_proposal(
        &self,
        proposal: &SignedProposal,
    ) -> Result<ProposalResponse, TransportError> {
        self.received.fetch_add(1, Ordering::SeqCst);
        debug!("[lc-txn] Peer {} processing proposal", self.url);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let behavior = self.behavior.read().clone();
        match behavior {
            PeerBehavior::Endorse => Ok(self.endorse(proposal)),
            PeerBehavior::Reject { status, message } => {
                Ok(response_without_endorsement(status, &message))
            }
            PeerBehavior::WithholdEndorsement => Ok(response_without_endorsement(
                Status::Success.code(),
                "OK",
            )),
            PeerBehavior::Unreachable => Err(TransportError::Unreachable(self.url.clone())),
        }
    }
}
