//! # Outbound Ports
//!
//! Traits for the network and key material the submission core depends on.
//! Every node is addressed by URL, which is also its registry key.

use crate::domain::{SigningError, SigningIdentity, TransportError};
use async_trait::async_trait;
use shared_types::{BroadcastResponse, ProposalResponse, SignedEnvelope, SignedProposal};

/// An endorsing peer.
#[async_trait]
pub trait Peer: Send + Sync {
    /// Address and registry key.
    fn url(&self) -> &str;

    /// Display name; defaults to the URL.
    fn name(&self) -> &str {
        self.url()
    }

    /// Roles the peer plays on the channel.
    fn roles(&self) -> &[String] {
        &[]
    }

    /// Simulate and endorse a signed proposal.
    async fn process_proposal(
        &self,
        proposal: &SignedProposal,
    ) -> Result<ProposalResponse, TransportError>;
}

/// An ordering node.
#[async_trait]
pub trait Orderer: Send + Sync {
    /// Address and registry key.
    fn url(&self) -> &str;

    /// Submit an envelope for ordering.
    async fn send_broadcast(
        &self,
        envelope: &SignedEnvelope,
    ) -> Result<BroadcastResponse, TransportError>;
}

/// Produces signatures for the client identity.
pub trait CryptoProvider: Send + Sync {
    /// Sign `message` with the private key of `identity`.
    fn sign(&self, message: &[u8], identity: &SigningIdentity) -> Result<Vec<u8>, SigningError>;
}
