//! # Submission Benchmarks
//!
//! | Stage | Measured |
//! |-------|----------|
//! | Proposal | Build + sign one invoke proposal |
//! | Assembly | Fold N endorsement responses into a transaction |
//! | Broadcast | Sign + fan out one envelope to N orderers |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lc_txn_submit::{
    partition_outcomes, ChaincodeInvokeRequest, ChannelService, Ed25519CryptoProvider,
    InMemoryOrderer, InMemoryPeer, Peer, Signer, SubmitConfig, TransactionProposalResponse,
    TransactionSubmissionApi,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn service() -> ChannelService {
    let provider = Ed25519CryptoProvider::new();
    let signer = Signer::new(provider.generate_identity("Org1MSP"), Arc::new(provider));
    ChannelService::new("benchchannel", signer, SubmitConfig::default())
        .expect("valid benchmark config")
}

fn endorsed_responses(
    runtime: &Runtime,
    service: &ChannelService,
    peers: usize,
) -> Vec<TransactionProposalResponse> {
    let targets: Vec<Arc<dyn Peer>> = (0..peers)
        .map(|i| Arc::new(InMemoryPeer::new(format!("peer{i}"))) as Arc<dyn Peer>)
        .collect();
    let request = ChaincodeInvokeRequest::new("benchcc", "invoke").with_args(["a", "b", "1"]);
    let proposal = service
        .build_transaction_proposal(&request)
        .expect("proposal");
    let outcomes = runtime.block_on(service.send_proposal(&proposal, &targets));
    partition_outcomes(outcomes).0
}

fn bench_build_proposal(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-txn-proposal");
    let service = service();
    let request = ChaincodeInvokeRequest::new("benchcc", "invoke").with_args(["a", "b", "1"]);

    group.bench_function("build_and_sign", |b| {
        b.iter(|| black_box(service.build_transaction_proposal(&request).is_ok()))
    });
    group.finish();
}

fn bench_create_transaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-txn-assembly");
    let runtime = Runtime::new().expect("tokio runtime");
    let service = service();

    for peers in [1usize, 4, 16, 64] {
        let responses = endorsed_responses(&runtime, &service, peers);
        group.throughput(Throughput::Elements(peers as u64));
        group.bench_with_input(
            BenchmarkId::new("create_transaction", peers),
            &responses,
            |b, responses| b.iter(|| black_box(service.create_transaction(responses).is_ok())),
        );
    }
    group.finish();
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-txn-broadcast");
    group.measurement_time(Duration::from_secs(10));
    let runtime = Runtime::new().expect("tokio runtime");

    for orderers in [10usize, 100, 1_000] {
        let service = service();
        for i in 0..orderers {
            service
                .add_orderer(Arc::new(InMemoryOrderer::new(format!("orderer{i}"))))
                .expect("unique orderer");
        }
        let envelope = service.sign_payload(b"benchmark payload").expect("signed");

        group.throughput(Throughput::Elements(orderers as u64));
        group.bench_with_input(
            BenchmarkId::new("broadcast_envelope", orderers),
            &envelope,
            |b, envelope| {
                b.iter(|| black_box(runtime.block_on(service.broadcast_envelope(envelope)).is_ok()))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_proposal,
    bench_create_transaction,
    bench_broadcast
);
criterion_main!(benches);
