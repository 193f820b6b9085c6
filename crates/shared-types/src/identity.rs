//! # Identity Messages

use prost::Message;

/// A member identity as embedded in signature headers and endorsements.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct SerializedIdentity {
    /// Membership service provider the identity belongs to.
    #[prost(string, tag = "1")]
    pub mspid: String,
    /// Identity material (certificate or public key bytes).
    #[prost(bytes = "vec", tag = "2")]
    pub id_bytes: Vec<u8>,
}

impl SerializedIdentity {
    /// Build an identity for `mspid` from raw material.
    pub fn new(mspid: impl Into<String>, id_bytes: Vec<u8>) -> Self {
        Self {
            mspid: mspid.into(),
            id_bytes,
        }
    }

    /// Wire encoding used for the `creator` and `endorser` fields.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}
