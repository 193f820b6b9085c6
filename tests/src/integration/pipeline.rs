//! # Submission Pipeline
//!
//! ```text
//! [Client] ──SignedProposal──→ [Peers] ──ProposalResponse──→ [Client]
//!                                                               │ assemble
//!                                                               ↓
//! [Orderers] ←──────────────── SignedEnvelope ──────────── [Client]
//! ```
//!
//! Checks what actually reaches the orderers: a signed envelope whose
//! payload carries the proposal header and a transaction holding every
//! endorsement.

#[cfg(test)]
mod tests {
    use crate::fixtures::{TestNetwork, CHANNEL_ID};
    use lc_txn_submit::{
        partition_outcomes, ChaincodeInvokeRequest, InstantiateRequest, Peer,
        TransactionSubmissionApi,
    };
    use prost::Message;
    use shared_crypto::Ed25519PublicKey;
    use shared_types::{
        decode_channel_header, ChaincodeActionPayload, ChaincodeInvocationSpec,
        ChaincodeProposalPayload, HeaderType, Payload, Transaction, LIFECYCLE_CHAINCODE,
    };
    use std::sync::Arc;

    fn decode_body(payload: &Payload) -> ChaincodeActionPayload {
        let tx = Transaction::decode(payload.data.as_slice()).unwrap();
        assert_eq!(tx.actions.len(), 1);
        ChaincodeActionPayload::decode(tx.actions[0].payload.as_slice()).unwrap()
    }

    #[tokio::test]
    async fn test_full_pipeline_reaches_every_orderer() -> anyhow::Result<()> {
        let network = TestNetwork::new(3, 2)?;
        let service = &network.service;

        let request = ChaincodeInvokeRequest::new("mycc", "move").with_args(["a", "b", "10"]);
        let (outcomes, txn_id) = service.send_transaction_proposal(&request, None).await?;
        let (responses, failures) = partition_outcomes(outcomes);
        assert_eq!(responses.len(), 3);
        assert!(failures.is_empty());

        let tx = service.create_transaction(&responses)?;
        assert_eq!(tx.txn_id(), &txn_id);
        assert_eq!(tx.endorsement_count(), 3);

        let result = service.send_transaction(Some(&tx)).await?;
        assert_eq!(result.attempted(), 2);
        assert_eq!(result.succeeded(), 2);

        let client_key = Ed25519PublicKey::from_slice(network.identity.public_key())?;
        for orderer in &network.orderers {
            let envelope = orderer.last_envelope().expect("orderer saw no envelope");
            client_key.verify(envelope.payload(), envelope.signature())?;

            let payload = Payload::decode(envelope.payload())?;
            let header = payload.header.clone().expect("payload header");
            let channel_header = decode_channel_header(&header.channel_header)?;
            assert_eq!(channel_header.tx_id, txn_id.as_str());
            assert_eq!(channel_header.channel_id, CHANNEL_ID);
            assert_eq!(channel_header.kind(), Some(HeaderType::EndorserTransaction));

            let action = decode_body(&payload).action.expect("endorsed action");
            assert_eq!(action.endorsements.len(), 3);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_endorsements_verify_against_peer_keys() -> anyhow::Result<()> {
        let network = TestNetwork::new(2, 1)?;
        let service = &network.service;

        let (outcomes, _) = service
            .send_transaction_proposal(&ChaincodeInvokeRequest::new("mycc", "query"), None)
            .await?;
        let (responses, _) = partition_outcomes(outcomes);
        let tx = service.create_transaction(&responses)?;

        let action_payload =
            ChaincodeActionPayload::decode(tx.transaction().actions[0].payload.as_slice())?;
        let action = action_payload.action.expect("endorsed action");

        for endorsement in &action.endorsements {
            let peer = network
                .peers
                .iter()
                .find(|p| p.endorser_identity() == endorsement.endorser)
                .expect("endorsement from unknown peer");
            let mut signed = action.proposal_response_payload.clone();
            signed.extend_from_slice(&endorsement.endorser);
            peer.public_key().verify(&signed, &endorsement.signature)?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_transient_data_never_reaches_orderers() -> anyhow::Result<()> {
        let network = TestNetwork::new(1, 1)?;
        let service = &network.service;

        let request = ChaincodeInvokeRequest::new("mycc", "store")
            .with_transient("private-key", b"do not order".to_vec());
        let proposal = service.build_transaction_proposal(&request)?;
        let targets: Vec<Arc<dyn Peer>> = vec![network.peers[0].clone()];
        let (responses, _) = partition_outcomes(service.send_proposal(&proposal, &targets).await);

        let tx = service.create_transaction(&responses)?;
        service.send_transaction(Some(&tx)).await?;

        let envelope = network.orderers[0].last_envelope().expect("envelope");
        let payload = Payload::decode(envelope.payload())?;
        let body = decode_body(&payload);
        let stored = ChaincodeProposalPayload::decode(body.chaincode_proposal_payload.as_slice())?;
        assert!(stored.transient_map.is_empty());

        let spec = ChaincodeInvocationSpec::decode(stored.input.as_slice())?;
        let args = spec.chaincode_spec.and_then(|s| s.input).expect("input").args;
        assert_eq!(args, vec![b"store".to_vec()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_instantiate_through_lifecycle() -> anyhow::Result<()> {
        let network = TestNetwork::new(2, 1)?;
        let service = &network.service;
        let targets: Vec<Arc<dyn Peer>> = network
            .peers
            .iter()
            .map(|p| p.clone() as Arc<dyn Peer>)
            .collect();

        let mut request = InstantiateRequest::new("mycc", "github.com/example/mycc", "1.0");
        request.args = vec![b"init".to_vec(), b"a".to_vec(), b"100".to_vec()];
        let (outcomes, txn_id) = service.send_instantiate_proposal(&request, &targets).await?;
        let (responses, _) = partition_outcomes(outcomes);
        assert_eq!(responses.len(), 2);

        let tx = service.create_transaction(&responses)?;
        assert_eq!(tx.txn_id(), &txn_id);

        let proposal_payload = ChaincodeProposalPayload::decode(
            tx.proposal().proposal.as_ref().expect("proposal").payload.as_slice(),
        )?;
        let spec = ChaincodeInvocationSpec::decode(proposal_payload.input.as_slice())?;
        let chaincode_spec = spec.chaincode_spec.expect("spec");
        assert_eq!(
            chaincode_spec.chaincode_id.expect("id").name,
            LIFECYCLE_CHAINCODE
        );

        assert_eq!(service.send_transaction(Some(&tx)).await?.succeeded(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_service_behind_trait_object() -> anyhow::Result<()> {
        let network = TestNetwork::new(1, 1)?;
        let api: Arc<dyn TransactionSubmissionApi> = network.service.clone();

        let proposal = api.build_transaction_proposal(&ChaincodeInvokeRequest::new("cc", "f"))?;
        let targets: Vec<Arc<dyn Peer>> = vec![network.peers[0].clone()];
        let (responses, _) = partition_outcomes(api.send_proposal(&proposal, &targets).await);
        let tx = api.create_transaction(&responses)?;

        let payload = Payload {
            header: None,
            data: tx.transaction().encode_to_vec(),
        };
        let envelope = api.sign_payload(&payload.encode_to_vec())?;
        let result = api.broadcast_envelope(&envelope).await?;
        assert_eq!(result.succeeded(), 1);
        assert_eq!(network.orderers[0].last_envelope(), Some(envelope));
        Ok(())
    }

    #[tokio::test]
    async fn test_each_proposal_gets_fresh_txn_id() -> anyhow::Result<()> {
        let network = TestNetwork::new(1, 0)?;
        let request = ChaincodeInvokeRequest::new("cc", "f");
        let a = network.service.build_transaction_proposal(&request)?;
        let b = network.service.build_transaction_proposal(&request)?;
        assert_ne!(a.txn_id, b.txn_id);
        assert_ne!(a.txn_id.nonce(), b.txn_id.nonce());
        Ok(())
    }
}
