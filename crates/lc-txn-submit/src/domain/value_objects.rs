//! # Value Objects
//!
//! Transaction identifiers, the client signing identity and the policies
//! governing assembly and broadcast.

use serde::{Deserialize, Serialize};
use shared_crypto::{compute_txn_id, generate_nonce};
use shared_types::SerializedIdentity;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Transaction identifier plus the nonce it was derived from.
///
/// The id is the hex SHA-256 of `nonce || creator`, so it is unique per
/// nonce and binds the transaction to its creator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TransactionId {
    id: String,
    nonce: Vec<u8>,
}

impl TransactionId {
    /// Wrap an existing id and nonce.
    pub fn new(id: impl Into<String>, nonce: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            nonce,
        }
    }

    /// Fresh id for `creator` (a serialized identity).
    pub fn generate(creator: &[u8]) -> Self {
        let nonce = generate_nonce();
        let id = compute_txn_id(&nonce, creator);
        Self { id, nonce }
    }

    /// The id string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Nonce bytes.
    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    /// True when no id has been assigned.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// The client's enrolled identity: MSP, public certificate or key, and the
/// private key used by the crypto provider.
#[derive(Clone)]
pub struct SigningIdentity {
    msp_id: String,
    public_key: Vec<u8>,
    private_key: Zeroizing<Vec<u8>>,
}

impl SigningIdentity {
    /// Build from raw parts.
    pub fn new(msp_id: impl Into<String>, public_key: Vec<u8>, private_key: Vec<u8>) -> Self {
        Self {
            msp_id: msp_id.into(),
            public_key,
            private_key: Zeroizing::new(private_key),
        }
    }

    /// MSP the identity belongs to.
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    /// Public half.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Private key material, for crypto providers only.
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// The `creator` bytes embedded in signature headers.
    pub fn serialized(&self) -> Vec<u8> {
        SerializedIdentity::new(self.msp_id.clone(), self.public_key.clone()).to_bytes()
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("msp_id", &self.msp_id)
            .field("public_key", &hex::encode(&self.public_key))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// How many orderers must accept an envelope for a broadcast to succeed.
///
/// The broadcaster always waits for every orderer before applying it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastPolicy {
    /// At least one orderer accepts.
    #[default]
    AnySucceeds,
    /// Every orderer accepts.
    AllSucceed,
    /// At least `n` orderers accept, and never fewer than one.
    Quorum(usize),
}

impl BroadcastPolicy {
    /// Whether `succeeded` acceptances out of `attempted` satisfy the policy.
    pub fn is_met(&self, succeeded: usize, attempted: usize) -> bool {
        match self {
            Self::AnySucceeds => succeeded >= 1,
            Self::AllSucceed => attempted > 0 && succeeded == attempted,
            Self::Quorum(n) => succeeded >= (*n).max(1),
        }
    }
}

impl fmt::Display for BroadcastPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnySucceeds => f.write_str("any"),
            Self::AllSucceed => f.write_str("all"),
            Self::Quorum(n) => write!(f, "quorum:{n}"),
        }
    }
}

impl FromStr for BroadcastPolicy {
    type Err = String;

    /// Parses `any`, `all` or `quorum:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::AnySucceeds),
            "all" => Ok(Self::AllSucceed),
            other => other
                .strip_prefix("quorum:")
                .and_then(|n| n.parse::<usize>().ok())
                .map(Self::Quorum)
                .ok_or_else(|| format!("unknown broadcast policy '{s}'")),
        }
    }
}

/// Extra checks applied when assembling a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyPolicy {
    /// Minimum number of endorsement responses.
    pub min_responses: usize,
    /// Require every response to match the first one's transaction id and
    /// response payload.
    pub require_consistent_responses: bool,
}

impl Default for AssemblyPolicy {
    fn default() -> Self {
        Self {
            min_responses: 1,
            require_consistent_responses: false,
        }
    }
}
