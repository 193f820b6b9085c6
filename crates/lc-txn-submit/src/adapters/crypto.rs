//! Ed25519 crypto provider.
//!
//! Implements the `CryptoProvider` port over `shared-crypto`.

use crate::domain::{SigningError, SigningIdentity};
use crate::ports::outbound::CryptoProvider;
use shared_crypto::Ed25519KeyPair;

/// Signs with the identity's Ed25519 seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519CryptoProvider;

impl Ed25519CryptoProvider {
    /// Create a provider.
    pub fn new() -> Self {
        Self
    }

    /// Enroll a fresh random identity under `msp_id`.
    pub fn generate_identity(&self, msp_id: &str) -> SigningIdentity {
        let keypair = Ed25519KeyPair::generate();
        SigningIdentity::new(
            msp_id,
            keypair.public_key().as_bytes().to_vec(),
            keypair.to_seed().to_vec(),
        )
    }
}

impl CryptoProvider for Ed25519CryptoProvider {
    fn sign(&self, message: &[u8], identity: &SigningIdentity) -> Result<Vec<u8>, SigningError> {
        let keypair = Ed25519KeyPair::from_seed_slice(identity.private_key())
            .map_err(|e| SigningError::Provider(e.to_string()))?;
        Ok(keypair.sign(message).to_vec())
    }
}
