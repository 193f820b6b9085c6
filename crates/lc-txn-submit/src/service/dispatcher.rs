//! Proposal dispatch to endorsing peers.

use crate::config::FanOutConfig;
use crate::domain::{
    ProposalOutcome, TargetFailure, TransactionProposal, TransactionProposalResponse,
};
use crate::ports::outbound::Peer;
use crate::service::fanout::fan_out;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends one signed proposal to many peers.
pub struct ProposalDispatcher {
    fan_out: FanOutConfig,
}

impl ProposalDispatcher {
    /// Dispatcher with the given limits.
    pub fn new(fan_out: FanOutConfig) -> Self {
        Self { fan_out }
    }

    /// Send `proposal` to every target. One outcome per target, in target
    /// order.
    pub async fn send_proposal(
        &self,
        proposal: &TransactionProposal,
        targets: &[Arc<dyn Peer>],
    ) -> Vec<ProposalOutcome> {
        debug!(
            "[lc-txn] Dispatching proposal {} to {} peers",
            proposal.txn_id,
            targets.len()
        );

        let signed = Arc::new(proposal.signed_proposal.clone());
        let results = fan_out(targets, &self.fan_out, |peer: Arc<dyn Peer>| {
            let signed = Arc::clone(&signed);
            async move { peer.process_proposal(&signed).await }
        })
        .await;

        targets
            .iter()
            .zip(results)
            .map(|(peer, result)| match result {
                Ok(proposal_response) => Ok(TransactionProposalResponse {
                    endorser: peer.url().to_string(),
                    proposal: proposal.clone(),
                    proposal_response,
                }),
                Err(error) => {
                    warn!("[lc-txn] Peer {} failed: {}", peer.url(), error);
                    Err(TargetFailure {
                        target: peer.url().to_string(),
                        error,
                    })
                }
            })
            .collect()
    }
}
