//! In-memory ordering node.
//!
//! Implements the `Orderer` port and records what it receives.

use crate::domain::TransportError;
use crate::ports::outbound::Orderer;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared_types::{BroadcastResponse, SignedEnvelope, Status};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// How the orderer answers broadcasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdererBehavior {
    /// Acknowledge with 200.
    Accept,
    /// Acknowledge with a failure status.
    Reject {
        /// Status to return.
        status: Status,
        /// Detail to return.
        info: String,
    },
    /// Fail at the transport level.
    Unreachable,
}

/// Orderer that accepts envelopes in process.
pub struct InMemoryOrderer {
    url: String,
    behavior: RwLock<OrdererBehavior>,
    latency: Duration,
    received: AtomicUsize,
    last_envelope: Mutex<Option<SignedEnvelope>>,
}

impl InMemoryOrderer {
    /// Accepting orderer at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            behavior: RwLock::new(OrdererBehavior::Accept),
            latency: Duration::ZERO,
            received: AtomicUsize::new(0),
            last_envelope: Mutex::new(None),
        }
    }

    /// Delay every acknowledgement by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Start with `behavior`.
    pub fn with_behavior(self, behavior: OrdererBehavior) -> Self {
        *self.behavior.write() = behavior;
        self
    }

    /// Change behavior at runtime.
    pub fn set_behavior(&self, behavior: OrdererBehavior) {
        *self.behavior.write() = behavior;
    }

    /// Envelopes received so far.
    pub fn envelopes_received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    /// Most recent envelope.
    pub fn last_envelope(&self) -> Option<SignedEnvelope> {
        self.last_envelope.lock().clone()
    }
}

#[async_trait]
impl Orderer for InMemoryOrderer {
    fn url(&self) -> &str {
        &self.url
    }

    async fn send_broadcast(
        &self,
        envelope: &SignedEnvelope,
    ) -> Result<BroadcastResponse, TransportError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let behavior = self.behavior.read().clone();
        if behavior == OrdererBehavior::Unreachable {
            return Err(TransportError::Unreachable(self.url.clone()));
        }

        self.received.fetch_add(1, Ordering::SeqCst);
        *self.last_envelope.lock() = Some(envelope.clone());
        debug!("[lc-txn] Orderer {} received envelope", self.url);

        match behavior {
            OrdererBehavior::Reject { status, info } => Ok(BroadcastResponse {
                status: status.code(),
                info,
            }),
            _ => Ok(BroadcastResponse::success()),
        }
    }
}
