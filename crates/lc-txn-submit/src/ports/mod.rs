//! # Ports
//!
//! Hexagonal boundaries: the API offered to applications (inbound) and the
//! peers, orderers and signers it depends on (outbound).

pub mod inbound;
pub mod outbound;

pub use inbound::TransactionSubmissionApi;
pub use outbound::{CryptoProvider, Orderer, Peer};
