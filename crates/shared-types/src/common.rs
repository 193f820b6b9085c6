//! # Common Messages
//!
//! Headers, payloads and envelopes shared by every transaction type.
//!
//! ```text
//! Envelope { payload, signature }
//!     └── Payload { header, data }
//!             └── Header { channel_header, signature_header }
//!                     ├── ChannelHeader { type, channel_id, tx_id, epoch, timestamp, extension }
//!                     └── SignatureHeader { creator, nonce }
//! ```

use prost::{Enumeration, Message};
use prost_types::Timestamp;

/// Kind of transaction carried by a channel header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum HeaderType {
    /// Opaque message.
    Message = 0,
    /// Channel configuration.
    Config = 1,
    /// Channel configuration update.
    ConfigUpdate = 2,
    /// Endorsed chaincode transaction.
    EndorserTransaction = 3,
    /// Ordering service management transaction.
    OrdererTransaction = 4,
    /// Deliver seek request.
    DeliverSeekInfo = 5,
    /// Packaged chaincode.
    ChaincodePackage = 6,
    /// Peer administration.
    PeerAdminOperation = 8,
}

/// Response status codes used by peers and orderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum Status {
    /// Unset.
    Unknown = 0,
    /// The canonical OK value.
    Success = 200,
    /// Malformed request.
    BadRequest = 400,
    /// Caller not authorized.
    Forbidden = 403,
    /// Unknown resource.
    NotFound = 404,
    /// Request exceeds the size limit.
    RequestEntityTooLarge = 413,
    /// Server side failure.
    InternalServerError = 500,
    /// Service temporarily unavailable.
    ServiceUnavailable = 503,
}

impl Status {
    /// Numeric code as carried on the wire.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Header carried by proposals and payloads.
#[derive(Clone, PartialEq, Message)]
pub struct Header {
    /// Encoded `ChannelHeader`.
    #[prost(bytes = "vec", tag = "1")]
    pub channel_header: Vec<u8>,
    /// Encoded `SignatureHeader`.
    #[prost(bytes = "vec", tag = "2")]
    pub signature_header: Vec<u8>,
}

/// Channel-scoped header: what, where, and when.
#[derive(Clone, PartialEq, Message)]
pub struct ChannelHeader {
    /// `HeaderType` as an integer.
    #[prost(int32, tag = "1")]
    pub header_type: i32,
    /// Message protocol version.
    #[prost(int32, tag = "2")]
    pub version: i32,
    /// Creation time at the sender.
    #[prost(message, optional, tag = "3")]
    pub timestamp: Option<Timestamp>,
    /// Channel the message is bound to.
    #[prost(string, tag = "4")]
    pub channel_id: String,
    /// Transaction identifier.
    #[prost(string, tag = "5")]
    pub tx_id: String,
    /// Ledger generation counter.
    #[prost(uint64, tag = "6")]
    pub epoch: u64,
    /// Type-specific extension (chaincode header extension for endorser transactions).
    #[prost(bytes = "vec", tag = "7")]
    pub extension: Vec<u8>,
    /// Hash of the client TLS certificate, when mutual TLS is used.
    #[prost(bytes = "vec", tag = "8")]
    pub tls_cert_hash: Vec<u8>,
}

impl ChannelHeader {
    /// Decoded header type, if the integer is a known variant.
    pub fn kind(&self) -> Option<HeaderType> {
        HeaderType::try_from(self.header_type).ok()
    }
}

/// Identity of the message creator plus a replay nonce.
#[derive(Clone, PartialEq, Message)]
pub struct SignatureHeader {
    /// Encoded `SerializedIdentity` of the creator.
    #[prost(bytes = "vec", tag = "1")]
    pub creator: Vec<u8>,
    /// Random bytes, used once.
    #[prost(bytes = "vec", tag = "2")]
    pub nonce: Vec<u8>,
}

/// The signed portion of an envelope.
#[derive(Clone, PartialEq, Message)]
pub struct Payload {
    /// Header copied from the originating proposal.
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    /// Encoded body (a `Transaction` for endorser transactions).
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// Wire envelope submitted to ordering nodes.
#[derive(Clone, PartialEq, Message)]
pub struct Envelope {
    /// Encoded `Payload`.
    #[prost(bytes = "vec", tag = "1")]
    pub payload: Vec<u8>,
    /// Creator's signature over `payload`.
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}
