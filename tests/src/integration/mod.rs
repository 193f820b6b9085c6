//! # Integration Scenarios
//!
//! Drive `ChannelService` end to end against in-memory peers and orderers.

pub mod massive_broadcast;
pub mod membership_churn;
pub mod pipeline;
