//! # Domain Errors
//!
//! One error enum per stage of the submission pipeline. Messages that
//! callers match on (assembly and send-transaction failures) are kept
//! verbatim across releases.

use crate::domain::value_objects::BroadcastPolicy;
use thiserror::Error;

/// Failure reaching or hearing back from a single peer or orderer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The node could not be contacted.
    #[error("node {0} unreachable")]
    Unreachable(String),

    /// The node answered but refused the request.
    #[error("node rejected request with status {status}: {info}")]
    Rejected {
        /// Status code returned by the node.
        status: i32,
        /// Detail returned by the node.
        info: String,
    },

    /// No answer within the configured deadline.
    #[error("request timed out after {0}ms")]
    Timeout(u64),

    /// The task driving the request died.
    #[error("request task failed: {0}")]
    TaskFailed(String),
}

/// A transport failure attributed to the node it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFailure {
    /// URL of the failing node.
    pub target: String,
    /// What went wrong.
    pub error: TransportError,
}

impl std::fmt::Display for TargetFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.target, self.error)
    }
}

/// Signing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// No user identity was configured on the client.
    #[error("User context not set")]
    NoIdentity,

    /// No crypto provider was configured on the client.
    #[error("Crypto provider not set")]
    NoCryptoProvider,

    /// The provider rejected the key or failed to sign.
    #[error("signing failed: {0}")]
    Provider(String),
}

/// Proposal construction failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProposalError {
    /// A required request parameter was empty.
    #[error("Missing '{0}' parameter")]
    MissingParameter(&'static str),

    /// Instantiate was requested without any target peers.
    #[error("Missing peer objects for instantiate CC proposal")]
    MissingTargets,

    /// The creator could not sign the proposal.
    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// Failures before a proposal is fanned out to peers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No targets were given and the channel has no peers.
    #[error("peers not set")]
    NoPeers,

    /// The proposal could not be built.
    #[error(transparent)]
    Proposal(#[from] ProposalError),
}

/// Membership registry failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MembershipError {
    /// A peer with this URL is already registered.
    #[error("Peer with URL {0} already exists")]
    DuplicatePeer(String),

    /// An orderer with this URL is already registered.
    #[error("Orderer with URL {0} already exists")]
    DuplicateOrderer(String),

    /// Members are keyed by URL, so it cannot be empty.
    #[error("member URL must not be empty")]
    EmptyUrl,
}

/// Failures turning endorsement responses into a transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssemblyError {
    /// Nothing to assemble.
    #[error("At least one proposal response is necessary")]
    EmptyResponseSet,

    /// A response's proposal header is not a valid `Header`.
    #[error("Could not unmarshal the proposal header")]
    HeaderUnmarshal {
        /// Endorser whose response failed.
        endorser: String,
    },

    /// A response's proposal payload is not a valid chaincode payload.
    #[error("Could not unmarshal the proposal payload")]
    PayloadUnmarshal {
        /// Endorser whose response failed.
        endorser: String,
    },

    /// A peer answered with a non-success status.
    #[error("Proposal response was not successful, error code {code}, msg {message}")]
    EndorsementRejected {
        /// Endorser that rejected.
        endorser: String,
        /// Status code it returned.
        code: i32,
        /// Message it returned.
        message: String,
    },

    /// A successful response carried no usable endorsement.
    #[error("repeated field endorsements has nil element")]
    MissingEndorsement {
        /// Endorser whose endorsement is missing.
        endorser: String,
    },

    /// Fewer responses than the assembly policy requires.
    #[error("Insufficient endorsements: {got}/{required}")]
    InsufficientResponses {
        /// Responses supplied.
        got: usize,
        /// Responses required.
        required: usize,
    },

    /// Responses disagree with the first one.
    #[error("Proposal response from {endorser} is inconsistent: {reason}")]
    InconsistentResponses {
        /// Endorser that disagrees.
        endorser: String,
        /// Which field differs.
        reason: String,
    },
}

/// Broadcast failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BroadcastError {
    /// The channel has no orderers.
    #[error("orderers not set")]
    NoOrderers,

    /// Too few orderers accepted the envelope.
    #[error("broadcast failed: {succeeded}/{attempted} orderers accepted (policy {policy})")]
    PolicyNotMet {
        /// Policy in force.
        policy: BroadcastPolicy,
        /// Orderers contacted.
        attempted: usize,
        /// Orderers that accepted.
        succeeded: usize,
        /// Every failing orderer and why.
        failures: Vec<TargetFailure>,
    },
}

/// Failures of the end-to-end send-transaction operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The channel has no orderers.
    #[error("orderers is nil")]
    NoOrderers,

    /// No transaction was supplied.
    #[error("Transaction is nil")]
    NilTransaction,

    /// The transaction carries no proposal.
    #[error("proposal is nil")]
    NilProposal,

    /// The proposal header could not be decoded.
    #[error("Could not unmarshal the proposal header")]
    HeaderUnmarshal,

    /// The payload could not be signed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The broadcast did not satisfy its policy.
    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
}
