//! # Domain Entities
//!
//! Records that flow through the pipeline:
//!
//! ```text
//! ChaincodeInvokeRequest ──build──▶ TransactionProposal ──endorse──▶ TransactionProposalResponse*
//!                                                                          │
//!                     BroadcastResult ◀──broadcast── SignedEnvelope ◀──assemble── AssembledTransaction
//! ```

use crate::domain::errors::{TargetFailure, TransportError};
use crate::domain::value_objects::{BroadcastPolicy, TransactionId};
use shared_types::{BroadcastResponse, Proposal, ProposalResponse, SignedProposal, Transaction};
use std::collections::HashMap;

/// A chaincode invocation to be proposed for endorsement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChaincodeInvokeRequest {
    /// Chaincode name.
    pub chaincode_id: String,
    /// Function to call; sent as the first argument.
    pub fcn: String,
    /// Remaining arguments.
    pub args: Vec<Vec<u8>>,
    /// Private inputs visible to endorsers only.
    pub transient_map: HashMap<String, Vec<u8>>,
}

impl ChaincodeInvokeRequest {
    /// Call `fcn` on `chaincode_id` without arguments.
    pub fn new(chaincode_id: impl Into<String>, fcn: impl Into<String>) -> Self {
        Self {
            chaincode_id: chaincode_id.into(),
            fcn: fcn.into(),
            ..Default::default()
        }
    }

    /// Append string arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_vec()));
        self
    }

    /// Add a transient entry.
    pub fn with_transient(mut self, key: impl Into<String>, value: Vec<u8>) -> Self {
        self.transient_map.insert(key.into(), value);
        self
    }
}

/// Chaincode instantiation through the lifecycle chaincode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantiateRequest {
    /// Name to register the chaincode under.
    pub chaincode_name: String,
    /// Source path of the installed package.
    pub chaincode_path: String,
    /// Installed version.
    pub chaincode_version: String,
    /// Init arguments.
    pub args: Vec<Vec<u8>>,
    /// Encoded endorsement policy; peer default when absent.
    pub policy: Option<Vec<u8>>,
}

impl InstantiateRequest {
    /// Instantiate `name` at `path`/`version` with no init arguments.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            chaincode_name: name.into(),
            chaincode_path: path.into(),
            chaincode_version: version.into(),
            ..Default::default()
        }
    }
}

/// A built and signed proposal. Built once, sent to many peers unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionProposal {
    /// Identifier shared by every endorsement of this proposal.
    pub txn_id: TransactionId,
    /// Decoded proposal; `None` only for hand-built records.
    pub proposal: Option<Proposal>,
    /// Wire form sent to peers.
    pub signed_proposal: SignedProposal,
}

/// One peer's answer to a proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionProposalResponse {
    /// URL of the endorsing peer.
    pub endorser: String,
    /// The proposal that was endorsed.
    pub proposal: TransactionProposal,
    /// What the peer returned.
    pub proposal_response: ProposalResponse,
}

impl TransactionProposalResponse {
    /// Status reported by the peer.
    pub fn status(&self) -> i32 {
        self.proposal_response.status()
    }
}

/// Outcome of sending a proposal to one peer.
pub type ProposalOutcome = Result<TransactionProposalResponse, TargetFailure>;

/// Split dispatch outcomes into responses and transport failures.
pub fn partition_outcomes(
    outcomes: Vec<ProposalOutcome>,
) -> (Vec<TransactionProposalResponse>, Vec<TargetFailure>) {
    let mut responses = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(response) => responses.push(response),
            Err(failure) => failures.push(failure),
        }
    }
    (responses, failures)
}

/// A transaction ready to be signed and ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledTransaction {
    proposal: TransactionProposal,
    transaction: Transaction,
}

impl AssembledTransaction {
    /// Pair the originating proposal with its transaction body.
    pub fn new(proposal: TransactionProposal, transaction: Transaction) -> Self {
        Self {
            proposal,
            transaction,
        }
    }

    /// Transaction id, taken from the proposal.
    pub fn txn_id(&self) -> &TransactionId {
        &self.proposal.txn_id
    }

    /// Originating proposal.
    pub fn proposal(&self) -> &TransactionProposal {
        &self.proposal
    }

    /// Transaction body.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Endorsements carried by the body.
    pub fn endorsement_count(&self) -> usize {
        self.transaction.endorsement_count()
    }
}

/// An orderer's acceptance of an envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdererAck {
    /// URL of the orderer.
    pub orderer: String,
    /// Its acknowledgement.
    pub response: BroadcastResponse,
}

/// Per-orderer outcomes of a broadcast that satisfied its policy.
#[derive(Debug, Clone, PartialEq)]
pub struct BroadcastResult {
    /// Policy the result was judged against.
    pub policy: BroadcastPolicy,
    /// Orderers that accepted.
    pub acknowledgements: Vec<OrdererAck>,
    /// Orderers that failed or rejected.
    pub failures: Vec<TargetFailure>,
}

impl BroadcastResult {
    /// Orderers contacted.
    pub fn attempted(&self) -> usize {
        self.acknowledgements.len() + self.failures.len()
    }

    /// Orderers that accepted.
    pub fn succeeded(&self) -> usize {
        self.acknowledgements.len()
    }

    /// Orderers that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Failures caused by the deadline.
    pub fn timed_out(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.error, TransportError::Timeout(_)))
            .count()
    }
}
