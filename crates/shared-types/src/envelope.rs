//! # `SignedEnvelope`
//!
//! The final unit handed to ordering nodes: serialized payload bytes plus
//! the creator's signature over exactly those bytes.
//!
//! ## Properties
//!
//! - **Immutable**: Fields are private; the envelope is built once.
//! - **Transport Neutral**: Converts losslessly to and from the wire `Envelope`.

use crate::common::Envelope;
use prost::Message;
use serde::{Deserialize, Serialize};

/// A payload and its signature, ready for broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    payload: Vec<u8>,
    signature: Vec<u8>,
}

impl SignedEnvelope {
    /// Pair a payload with its signature.
    pub fn new(payload: Vec<u8>, signature: Vec<u8>) -> Self {
        Self { payload, signature }
    }

    /// Serialized payload bytes (what was signed).
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Signature over `payload`.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Wire form.
    pub fn to_wire(&self) -> Envelope {
        Envelope {
            payload: self.payload.clone(),
            signature: self.signature.clone(),
        }
    }

    /// Wire encoding of the envelope.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_wire().encode_to_vec()
    }
}

impl From<Envelope> for SignedEnvelope {
    fn from(envelope: Envelope) -> Self {
        Self::new(envelope.payload, envelope.signature)
    }
}
