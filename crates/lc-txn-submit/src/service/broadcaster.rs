//! Envelope broadcast to ordering nodes.
//!
//! Every orderer in the membership snapshot is contacted concurrently and
//! the broadcast waits for all of them (or their deadlines) before the
//! policy is applied. A negative acknowledgement counts as a failure.

use crate::config::FanOutConfig;
use crate::domain::{
    BroadcastError, BroadcastPolicy, BroadcastResult, OrdererAck, TargetFailure, TransportError,
};
use crate::ports::outbound::Orderer;
use crate::service::fanout::fan_out;
use crate::service::membership::ChannelMembership;
use shared_types::SignedEnvelope;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Broadcasts envelopes to the channel's orderers.
pub struct Broadcaster {
    membership: Arc<ChannelMembership>,
    fan_out: FanOutConfig,
    policy: BroadcastPolicy,
}

impl Broadcaster {
    /// Broadcaster over `membership`.
    pub fn new(
        membership: Arc<ChannelMembership>,
        fan_out: FanOutConfig,
        policy: BroadcastPolicy,
    ) -> Self {
        Self {
            membership,
            fan_out,
            policy,
        }
    }

    /// Policy in force.
    pub fn policy(&self) -> BroadcastPolicy {
        self.policy
    }

    /// Send `envelope` to every current orderer.
    pub async fn broadcast_envelope(
        &self,
        envelope: &SignedEnvelope,
    ) -> Result<BroadcastResult, BroadcastError> {
        let orderers = self.membership.orderers();
        if orderers.is_empty() {
            return Err(BroadcastError::NoOrderers);
        }

        let started = Instant::now();
        let shared = Arc::new(envelope.clone());
        let results = fan_out(&orderers, &self.fan_out, |orderer: Arc<dyn Orderer>| {
            let envelope = Arc::clone(&shared);
            async move {
                let ack = orderer.send_broadcast(&envelope).await?;
                if ack.is_success() {
                    Ok(ack)
                } else {
                    Err(TransportError::Rejected {
                        status: ack.status,
                        info: ack.info,
                    })
                }
            }
        })
        .await;

        let mut acknowledgements = Vec::with_capacity(orderers.len());
        let mut failures = Vec::new();
        for (orderer, result) in orderers.iter().zip(results) {
            match result {
                Ok(response) => acknowledgements.push(OrdererAck {
                    orderer: orderer.url().to_string(),
                    response,
                }),
                Err(error) => {
                    debug!("[lc-txn] Orderer {} failed: {}", orderer.url(), error);
                    failures.push(TargetFailure {
                        target: orderer.url().to_string(),
                        error,
                    });
                }
            }
        }

        let attempted = orderers.len();
        let succeeded = acknowledgements.len();
        if !self.policy.is_met(succeeded, attempted) {
            warn!(
                "[lc-txn] Broadcast failed: {}/{} orderers accepted (policy {})",
                succeeded, attempted, self.policy
            );
            return Err(BroadcastError::PolicyNotMet {
                policy: self.policy,
                attempted,
                succeeded,
                failures,
            });
        }

        info!(
            "[lc-txn] Broadcast accepted by {}/{} orderers in {:?}",
            succeeded,
            attempted,
            started.elapsed()
        );
        Ok(BroadcastResult {
            policy: self.policy,
            acknowledgements,
            failures,
        })
    }
}
