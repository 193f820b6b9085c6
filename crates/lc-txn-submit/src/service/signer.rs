//! Client-side signer.
//!
//! Pairs the user identity with a crypto provider. Either may be missing
//! on a freshly created client; every signing call then fails with a
//! `SigningError` instead of producing an unsigned message.

use crate::domain::{SigningError, SigningIdentity, TransactionId};
use crate::ports::outbound::CryptoProvider;
use shared_types::SignedEnvelope;
use std::sync::Arc;
use tracing::debug;

/// Identity plus crypto provider.
#[derive(Clone, Default)]
pub struct Signer {
    identity: Option<SigningIdentity>,
    provider: Option<Arc<dyn CryptoProvider>>,
}

impl Signer {
    /// Fully configured signer.
    pub fn new(identity: SigningIdentity, provider: Arc<dyn CryptoProvider>) -> Self {
        Self {
            identity: Some(identity),
            provider: Some(provider),
        }
    }

    /// Set the identity.
    pub fn with_identity(mut self, identity: SigningIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Set the crypto provider.
    pub fn with_provider(mut self, provider: Arc<dyn CryptoProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// The configured identity.
    pub fn identity(&self) -> Result<&SigningIdentity, SigningError> {
        self.identity.as_ref().ok_or(SigningError::NoIdentity)
    }

    /// Serialized identity used as `creator` in headers.
    pub fn creator(&self) -> Result<Vec<u8>, SigningError> {
        Ok(self.identity()?.serialized())
    }

    /// Fresh transaction id bound to this identity.
    pub fn new_txn_id(&self) -> Result<TransactionId, SigningError> {
        Ok(TransactionId::generate(&self.creator()?))
    }

    /// Sign raw bytes.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SigningError> {
        let identity = self.identity()?;
        let provider = self
            .provider
            .as_ref()
            .ok_or(SigningError::NoCryptoProvider)?;
        provider.sign(message, identity)
    }

    /// Sign serialized payload bytes into an envelope.
    pub fn sign_payload(&self, payload: &[u8]) -> Result<SignedEnvelope, SigningError> {
        let signature = self.sign(payload)?;
        debug!("[lc-txn] Signed payload of {} bytes", payload.len());
        Ok(SignedEnvelope::new(payload.to_vec(), signature))
    }
}
