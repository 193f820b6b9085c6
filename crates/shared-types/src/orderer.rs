//! # Orderer Messages

use crate::common::Status;
use prost::Message;

/// Acknowledgement returned by an ordering node for one envelope.
#[derive(Clone, PartialEq, Message)]
pub struct BroadcastResponse {
    /// `Status` as an integer.
    #[prost(int32, tag = "1")]
    pub status: i32,
    /// Additional detail on failure.
    #[prost(string, tag = "2")]
    pub info: String,
}

impl BroadcastResponse {
    /// A success acknowledgement.
    pub fn success() -> Self {
        Self {
            status: Status::Success.code(),
            info: String::new(),
        }
    }

    /// True when the orderer accepted the envelope.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success.code()
    }
}
