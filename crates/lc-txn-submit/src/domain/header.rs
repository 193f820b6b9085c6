//! # Header Construction
//!
//! Channel and signature headers shared by proposals and envelopes.

use crate::domain::errors::ProposalError;
use crate::domain::value_objects::TransactionId;
use prost::Message;
use prost_types::Timestamp;
use shared_types::{
    ChaincodeHeaderExtension, ChaincodeId, ChannelHeader, Header, HeaderType, SignatureHeader,
};
use std::time::SystemTime;

/// Build a channel header.
///
/// Channel id and transaction id are mandatory; the timestamp is carried
/// through at full precision.
pub fn build_channel_header(
    header_type: HeaderType,
    channel_id: &str,
    txn_id: &str,
    epoch: u64,
    timestamp: SystemTime,
) -> Result<ChannelHeader, ProposalError> {
    if channel_id.is_empty() {
        return Err(ProposalError::MissingParameter("channelId"));
    }
    if txn_id.is_empty() {
        return Err(ProposalError::MissingParameter("txId"));
    }

    Ok(ChannelHeader {
        header_type: header_type as i32,
        version: 0,
        timestamp: Some(Timestamp::from(timestamp)),
        channel_id: channel_id.to_string(),
        tx_id: txn_id.to_string(),
        epoch,
        extension: Vec::new(),
        tls_cert_hash: Vec::new(),
    })
}

/// Channel header for a chaincode proposal, with the target chaincode in
/// its extension.
pub fn build_chaincode_channel_header(
    header_type: HeaderType,
    channel_id: &str,
    txn_id: &str,
    epoch: u64,
    timestamp: SystemTime,
    chaincode_id: &ChaincodeId,
) -> Result<ChannelHeader, ProposalError> {
    let mut header = build_channel_header(header_type, channel_id, txn_id, epoch, timestamp)?;
    header.extension = ChaincodeHeaderExtension {
        payload_visibility: Vec::new(),
        chaincode_id: Some(chaincode_id.clone()),
    }
    .encode_to_vec();
    Ok(header)
}

/// Signature header binding `creator` and the transaction nonce.
pub fn build_signature_header(txn_id: &TransactionId, creator: &[u8]) -> SignatureHeader {
    SignatureHeader {
        creator: creator.to_vec(),
        nonce: txn_id.nonce().to_vec(),
    }
}

/// Combine both headers into a `Header`.
pub fn build_header(channel_header: &ChannelHeader, signature_header: &SignatureHeader) -> Header {
    Header {
        channel_header: channel_header.encode_to_vec(),
        signature_header: signature_header.encode_to_vec(),
    }
}
