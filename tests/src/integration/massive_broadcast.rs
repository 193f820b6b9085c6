//! # Massive Broadcast
//!
//! Broadcast to 10,000 orderers. With every orderer contacted concurrently,
//! wall-clock time tracks the slowest orderer rather than the orderer count.
//!
//! `TEST_MASSIVE_ORDERER_COUNT` overrides the orderer count.

#[cfg(test)]
mod tests {
    use crate::fixtures::{orderer_url, peer_url, TestNetwork};
    use lc_txn_submit::{
        partition_outcomes, ChaincodeInvokeRequest, InMemoryOrderer, InMemoryPeer,
        OrdererBehavior, SubmitConfig, TransactionSubmissionApi,
    };
    use std::time::{Duration, Instant};
    use tracing::info;

    const DEFAULT_ORDERERS: usize = 10_000;
    const SMALL_ORDERERS: usize = 10;
    const ORDERER_LATENCY: Duration = Duration::from_millis(100);

    fn orderer_count() -> usize {
        std::env::var("TEST_MASSIVE_ORDERER_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ORDERERS)
    }

    fn massive_config() -> SubmitConfig {
        let mut config = SubmitConfig::default();
        config.orderer_fan_out.timeout_ms = 20_000;
        config
    }

    async fn timed_broadcast(
        orderers: Vec<InMemoryOrderer>,
    ) -> anyhow::Result<(TestNetwork, Duration)> {
        let network = TestNetwork::build(
            vec![InMemoryPeer::new(peer_url(0))],
            orderers,
            massive_config(),
        )?;

        let (outcomes, _) = network
            .service
            .send_transaction_proposal(&ChaincodeInvokeRequest::new("cc", "f"), None)
            .await?;
        let tx = network
            .service
            .create_transaction(&partition_outcomes(outcomes).0)?;

        let started = Instant::now();
        let result = network.service.send_transaction(Some(&tx)).await?;
        let elapsed = started.elapsed();
        assert_eq!(result.attempted(), network.orderers.len());
        Ok((network, elapsed))
    }

    fn slow_orderers(count: usize) -> Vec<InMemoryOrderer> {
        (0..count)
            .map(|i| InMemoryOrderer::new(orderer_url(i)).with_latency(ORDERER_LATENCY))
            .collect()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_broadcast_to_ten_thousand_orderers() -> anyhow::Result<()> {
        let count = orderer_count();

        let (_, small) = timed_broadcast(slow_orderers(SMALL_ORDERERS)).await?;
        let (network, large) = timed_broadcast(slow_orderers(count)).await?;
        info!(
            "[lc-tests] {} orderers: {:?}, {} orderers: {:?}",
            SMALL_ORDERERS, small, count, large
        );

        assert_eq!(network.envelopes_received(), count);
        // Sequential delivery would take count * latency.
        assert!(large < ORDERER_LATENCY * 50, "broadcast took {large:?}");
        assert!(large < small + Duration::from_secs(5));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_massive_broadcast_with_partial_outage() -> anyhow::Result<()> {
        let count = orderer_count();
        let orderers = (0..count)
            .map(|i| {
                let orderer = InMemoryOrderer::new(orderer_url(i));
                if i % 2 == 1 {
                    orderer.with_behavior(OrdererBehavior::Unreachable)
                } else {
                    orderer
                }
            })
            .collect();

        let (network, _) = timed_broadcast(orderers).await?;
        let accepted = network
            .orderers
            .iter()
            .filter(|o| o.envelopes_received() == 1)
            .count();
        assert_eq!(accepted, count.div_ceil(2));
        Ok(())
    }
}
