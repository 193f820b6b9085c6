//! # Submission Service
//!
//! Application layer: the channel service and the components it wires
//! together.
//!
//! ## Components
//!
//! - `ChannelService` implements `TransactionSubmissionApi`
//! - `ChannelMembership` holds the peer and orderer registry
//! - `Signer` pairs the user identity with a crypto provider
//! - `ProposalDispatcher` and `Broadcaster` fan out to peers and orderers

mod broadcaster;
mod channel;
mod dispatcher;
mod fanout;
mod membership;
mod signer;

pub use broadcaster::Broadcaster;
pub use channel::ChannelService;
pub use dispatcher::ProposalDispatcher;
pub use membership::ChannelMembership;
pub use signer::Signer;
