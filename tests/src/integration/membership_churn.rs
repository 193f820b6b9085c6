//! # Membership Churn
//!
//! Peers and orderers join and leave while submissions are in flight.
//! Each broadcast works on the membership snapshot taken when it started.

#[cfg(test)]
mod tests {
    use crate::fixtures::{orderer_url, peer_url, TestNetwork};
    use async_trait::async_trait;
    use lc_txn_submit::{
        partition_outcomes, BroadcastError, ChaincodeInvokeRequest, ChannelMembership,
        InMemoryOrderer, InMemoryPeer, Orderer, SendError, TransactionSubmissionApi,
        TransportError,
    };
    use shared_types::{BroadcastResponse, SignedEnvelope};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Orderer that unregisters another orderer when it is contacted.
    struct EvictingOrderer {
        url: String,
        membership: Arc<ChannelMembership>,
        evict: String,
    }

    #[async_trait]
    impl Orderer for EvictingOrderer {
        fn url(&self) -> &str {
            &self.url
        }

        async fn send_broadcast(
            &self,
            _envelope: &SignedEnvelope,
        ) -> Result<BroadcastResponse, TransportError> {
            self.membership.remove_orderer(&self.evict);
            Ok(BroadcastResponse::success())
        }
    }

    #[tokio::test]
    async fn test_broadcast_uses_snapshot_taken_at_start() -> anyhow::Result<()> {
        let network = TestNetwork::new(1, 0)?;
        let service = &network.service;

        let victim = Arc::new(
            InMemoryOrderer::new(orderer_url(1)).with_latency(Duration::from_millis(50)),
        );
        service.add_orderer(Arc::new(EvictingOrderer {
            url: orderer_url(0),
            membership: Arc::clone(service.membership()),
            evict: orderer_url(1),
        }))?;
        service.add_orderer(victim.clone())?;

        let (outcomes, _) = service
            .send_transaction_proposal(&ChaincodeInvokeRequest::new("cc", "f"), None)
            .await?;
        let tx = service.create_transaction(&partition_outcomes(outcomes).0)?;

        let first = service.send_transaction(Some(&tx)).await?;
        assert_eq!(first.attempted(), 2);
        assert_eq!(victim.envelopes_received(), 1);
        assert_eq!(service.membership().orderer_count(), 1);

        let second = service.send_transaction(Some(&tx)).await?;
        assert_eq!(second.attempted(), 1);
        assert_eq!(victim.envelopes_received(), 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_churn_during_broadcasts() -> anyhow::Result<()> {
        const STABLE: usize = 4;
        const CHURNING: usize = 16;
        const ROUNDS: usize = 25;

        let network = TestNetwork::new(1, STABLE)?;
        let service = Arc::clone(&network.service);

        let (outcomes, _) = service
            .send_transaction_proposal(&ChaincodeInvokeRequest::new("cc", "f"), None)
            .await?;
        let tx = service.create_transaction(&partition_outcomes(outcomes).0)?;

        let done = Arc::new(AtomicBool::new(false));
        let churn = {
            let service = Arc::clone(&service);
            let done = Arc::clone(&done);
            tokio::spawn(async move {
                let mut round = 0usize;
                while !done.load(Ordering::SeqCst) {
                    let url = orderer_url(STABLE + round % CHURNING);
                    if service.remove_orderer(&url).is_none() {
                        let orderer =
                            InMemoryOrderer::new(url).with_latency(Duration::from_millis(1));
                        let _ = service.add_orderer(Arc::new(orderer));
                    }
                    round += 1;
                    tokio::task::yield_now().await;
                }
            })
        };

        let sends = (0..ROUNDS).map(|_| service.send_transaction(Some(&tx)));
        let results = futures::future::join_all(sends).await;
        done.store(true, Ordering::SeqCst);
        churn.await?;

        for result in results {
            let result = result?;
            assert!(result.attempted() >= STABLE);
            assert!(result.attempted() <= STABLE + CHURNING);
            assert_eq!(result.failed(), 0);
        }
        let stable_received: usize = network.orderers.iter().map(|o| o.envelopes_received()).sum();
        assert_eq!(stable_received, STABLE * ROUNDS);
        Ok(())
    }

    #[tokio::test]
    async fn test_removing_last_orderer() -> anyhow::Result<()> {
        let network = TestNetwork::new(1, 1)?;
        let service = &network.service;

        let (outcomes, _) = service
            .send_transaction_proposal(&ChaincodeInvokeRequest::new("cc", "f"), None)
            .await?;
        let tx = service.create_transaction(&partition_outcomes(outcomes).0)?;

        assert!(service.remove_orderer(&orderer_url(0)).is_some());
        assert_eq!(
            service.send_transaction(Some(&tx)).await.unwrap_err(),
            SendError::NoOrderers
        );

        let envelope = service.sign_payload(b"payload")?;
        assert_eq!(
            service.broadcast_envelope(&envelope).await.unwrap_err(),
            BroadcastError::NoOrderers
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_peer_added_later_joins_default_targets() -> anyhow::Result<()> {
        let network = TestNetwork::new(1, 0)?;
        let service = &network.service;
        let request = ChaincodeInvokeRequest::new("cc", "f");

        let (before, _) = service.send_transaction_proposal(&request, None).await?;
        assert_eq!(before.len(), 1);

        let late = Arc::new(InMemoryPeer::new(peer_url(7)));
        service.add_peer(late.clone())?;
        let (after, _) = service.send_transaction_proposal(&request, None).await?;
        assert_eq!(after.len(), 2);
        assert_eq!(late.proposals_received(), 1);

        service.remove_peer(&peer_url(0));
        service.remove_peer(&peer_url(7));
        assert!(service.send_transaction_proposal(&request, None).await.is_err());
        Ok(())
    }
}
