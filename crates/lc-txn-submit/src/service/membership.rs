//! Channel membership registry.
//!
//! Peers and orderers keyed by URL. Mutations may race with in-flight
//! submissions; readers take a snapshot and work on that, so a member
//! added or removed mid-broadcast affects only later broadcasts.

use crate::domain::MembershipError;
use crate::ports::outbound::{Orderer, Peer};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Peers and orderers of one channel.
#[derive(Default)]
pub struct ChannelMembership {
    peers: RwLock<HashMap<String, Arc<dyn Peer>>>,
    orderers: RwLock<HashMap<String, Arc<dyn Orderer>>>,
}

impl ChannelMembership {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer. URLs are unique.
    pub fn add_peer(&self, peer: Arc<dyn Peer>) -> Result<(), MembershipError> {
        let url = peer.url().to_string();
        if url.is_empty() {
            return Err(MembershipError::EmptyUrl);
        }
        let mut peers = self.peers.write();
        if peers.contains_key(&url) {
            return Err(MembershipError::DuplicatePeer(url));
        }
        info!("[lc-txn] Added peer {}", url);
        peers.insert(url, peer);
        Ok(())
    }

    /// Unregister a peer, returning it if it was present.
    pub fn remove_peer(&self, url: &str) -> Option<Arc<dyn Peer>> {
        let removed = self.peers.write().remove(url);
        if removed.is_some() {
            info!("[lc-txn] Removed peer {}", url);
        }
        removed
    }

    /// Register an orderer. URLs are unique.
    pub fn add_orderer(&self, orderer: Arc<dyn Orderer>) -> Result<(), MembershipError> {
        let url = orderer.url().to_string();
        if url.is_empty() {
            return Err(MembershipError::EmptyUrl);
        }
        let mut orderers = self.orderers.write();
        if orderers.contains_key(&url) {
            return Err(MembershipError::DuplicateOrderer(url));
        }
        debug!("[lc-txn] Added orderer {}", url);
        orderers.insert(url, orderer);
        Ok(())
    }

    /// Unregister an orderer, returning it if it was present.
    pub fn remove_orderer(&self, url: &str) -> Option<Arc<dyn Orderer>> {
        let removed = self.orderers.write().remove(url);
        if removed.is_some() {
            debug!("[lc-txn] Removed orderer {}", url);
        }
        removed
    }

    /// Snapshot of the current peers.
    pub fn peers(&self) -> Vec<Arc<dyn Peer>> {
        self.peers.read().values().cloned().collect()
    }

    /// Snapshot of the current orderers.
    pub fn orderers(&self) -> Vec<Arc<dyn Orderer>> {
        self.orderers.read().values().cloned().collect()
    }

    /// Peers that play `role`.
    pub fn peers_with_role(&self, role: &str) -> Vec<Arc<dyn Peer>> {
        self.peers
            .read()
            .values()
            .filter(|p| p.roles().iter().any(|r| r == role))
            .cloned()
            .collect()
    }

    /// Look up a peer by URL.
    pub fn peer(&self, url: &str) -> Option<Arc<dyn Peer>> {
        self.peers.read().get(url).cloned()
    }

    /// Number of peers.
    pub fn peer_count(&self) -> usize {
        self.peers.read().len()
    }

    /// Number of orderers.
    pub fn orderer_count(&self) -> usize {
        self.orderers.read().len()
    }
}
