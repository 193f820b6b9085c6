//! # Codec Helpers
//!
//! Thin wrappers over `prost` that attach the message name to decode
//! failures.

use crate::common::{ChannelHeader, Header};
use crate::errors::CodecError;
use crate::proposal::{ChaincodeHeaderExtension, ChaincodeProposalPayload};
use prost::Message;

/// Decode `bytes` as `M`, naming the message in the error.
pub fn decode_message<M: Message + Default>(
    bytes: &[u8],
    what: &'static str,
) -> Result<M, CodecError> {
    M::decode(bytes).map_err(|e| CodecError::Decode {
        what,
        reason: e.to_string(),
    })
}

/// Decode a proposal or payload `Header`.
pub fn decode_header(bytes: &[u8]) -> Result<Header, CodecError> {
    decode_message(bytes, "Header")
}

/// Decode a `ChannelHeader`.
pub fn decode_channel_header(bytes: &[u8]) -> Result<ChannelHeader, CodecError> {
    decode_message(bytes, "ChannelHeader")
}

/// Decode a `ChaincodeHeaderExtension`.
pub fn decode_chaincode_header_extension(
    bytes: &[u8],
) -> Result<ChaincodeHeaderExtension, CodecError> {
    decode_message(bytes, "ChaincodeHeaderExtension")
}

/// Decode a `ChaincodeProposalPayload`.
pub fn decode_chaincode_proposal_payload(
    bytes: &[u8],
) -> Result<ChaincodeProposalPayload, CodecError> {
    decode_message(bytes, "ChaincodeProposalPayload")
}
