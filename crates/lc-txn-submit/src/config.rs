//! # Submission Configuration
//!
//! Fan-out limits, deadlines and policies for the submission service.
//!
//! Environment overrides:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LC_MAX_IN_FLIGHT` | `max_in_flight` for peers and orderers |
//! | `LC_PEER_TIMEOUT_MS` | `peer_fan_out.timeout_ms` |
//! | `LC_ORDERER_TIMEOUT_MS` | `orderer_fan_out.timeout_ms` |
//! | `LC_BROADCAST_POLICY` | `broadcast_policy` (`any`, `all`, `quorum:N`) |
//! | `LC_MIN_ENDORSEMENTS` | `assembly.min_responses` |

use crate::domain::{AssemblyPolicy, BroadcastPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Default cap on concurrent requests per fan-out.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 16_384;

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Invalid configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A fan-out would never start a request.
    #[error("{0}: max_in_flight must be at least 1")]
    ZeroInFlight(&'static str),

    /// A fan-out would time out immediately.
    #[error("{0}: timeout_ms must be at least 1")]
    ZeroTimeout(&'static str),

    /// A quorum of zero is always met.
    #[error("broadcast quorum must be at least 1")]
    ZeroQuorum,

    /// Assembly needs at least one response.
    #[error("min_responses must be at least 1")]
    ZeroMinResponses,

    /// The service is bound to one channel.
    #[error("channel id must not be empty")]
    MissingChannelId,
}

/// Limits for one concurrent fan-out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOutConfig {
    /// Maximum requests in flight at once.
    pub max_in_flight: usize,
    /// Deadline for each request.
    pub timeout_ms: u64,
}

impl FanOutConfig {
    /// Per-request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn validate(&self, which: &'static str) -> Result<(), ConfigError> {
        if self.max_in_flight == 0 {
            return Err(ConfigError::ZeroInFlight(which));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout(which));
        }
        Ok(())
    }
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Submission service configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Proposal fan-out to peers.
    pub peer_fan_out: FanOutConfig,
    /// Envelope fan-out to orderers.
    pub orderer_fan_out: FanOutConfig,
    /// Acceptances needed for a broadcast to succeed.
    pub broadcast_policy: BroadcastPolicy,
    /// Extra assembly checks.
    pub assembly: AssemblyPolicy,
}

impl SubmitConfig {
    /// Create a config for testing (short deadlines).
    pub fn for_testing() -> Self {
        Self {
            peer_fan_out: FanOutConfig {
                max_in_flight: 1_024,
                timeout_ms: 2_000,
            },
            orderer_fan_out: FanOutConfig {
                max_in_flight: 1_024,
                timeout_ms: 2_000,
            },
            ..Default::default()
        }
    }

    /// Defaults with `LC_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from `lookup`. Unparseable values are logged and
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LC_MAX_IN_FLIGHT") {
            match value.parse() {
                Ok(n) => {
                    self.peer_fan_out.max_in_flight = n;
                    self.orderer_fan_out.max_in_flight = n;
                }
                Err(_) => warn!("[lc-txn] Ignoring invalid LC_MAX_IN_FLIGHT '{}'", value),
            }
        }
        if let Some(value) = lookup("LC_PEER_TIMEOUT_MS") {
            match value.parse() {
                Ok(ms) => self.peer_fan_out.timeout_ms = ms,
                Err(_) => warn!("[lc-txn] Ignoring invalid LC_PEER_TIMEOUT_MS '{}'", value),
            }
        }
        if let Some(value) = lookup("LC_ORDERER_TIMEOUT_MS") {
            match value.parse() {
                Ok(ms) => self.orderer_fan_out.timeout_ms = ms,
                Err(_) => warn!("[lc-txn] Ignoring invalid LC_ORDERER_TIMEOUT_MS '{}'", value),
            }
        }
        if let Some(value) = lookup("LC_BROADCAST_POLICY") {
            match value.parse() {
                Ok(policy) => {
                    info!("[lc-txn] Broadcast policy set to {}", policy);
                    self.broadcast_policy = policy;
                }
                Err(e) => warn!("[lc-txn] Ignoring LC_BROADCAST_POLICY: {}", e),
            }
        }
        if let Some(value) = lookup("LC_MIN_ENDORSEMENTS") {
            match value.parse() {
                Ok(n) => self.assembly.min_responses = n,
                Err(_) => warn!("[lc-txn] Ignoring invalid LC_MIN_ENDORSEMENTS '{}'", value),
            }
        }
    }

    /// Reject values the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.peer_fan_out.validate("peer_fan_out")?;
        self.orderer_fan_out.validate("orderer_fan_out")?;
        if self.broadcast_policy == BroadcastPolicy::Quorum(0) {
            return Err(ConfigError::ZeroQuorum);
        }
        if self.assembly.min_responses == 0 {
            return Err(ConfigError::ZeroMinResponses);
        }
        Ok(())
    }
}
