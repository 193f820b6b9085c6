//! # Domain Invariants
//!
//! Rules every endorsement response must satisfy before it may be folded
//! into a transaction.

use crate::domain::entities::TransactionProposalResponse;
use crate::domain::errors::AssemblyError;
use shared_types::{Endorsement, Status};

/// Invariant: the peer reported success.
pub fn invariant_successful_status(
    response: &TransactionProposalResponse,
) -> Result<(), AssemblyError> {
    let code = response.status();
    if code == Status::Success.code() {
        return Ok(());
    }
    Err(AssemblyError::EndorsementRejected {
        endorser: response.endorser.clone(),
        code,
        message: response.proposal_response.message().to_string(),
    })
}

/// Invariant: the response carries an endorsement with a signature.
pub fn invariant_endorsement_present(
    response: &TransactionProposalResponse,
) -> Result<&Endorsement, AssemblyError> {
    match &response.proposal_response.endorsement {
        Some(endorsement) if !endorsement.signature.is_empty() => Ok(endorsement),
        _ => Err(AssemblyError::MissingEndorsement {
            endorser: response.endorser.clone(),
        }),
    }
}

/// Invariant: `other` endorses the same transaction with the same result
/// as `first`.
pub fn invariant_consistent_with(
    first: &TransactionProposalResponse,
    other: &TransactionProposalResponse,
) -> Result<(), AssemblyError> {
    if other.proposal.txn_id != first.proposal.txn_id {
        return Err(AssemblyError::InconsistentResponses {
            endorser: other.endorser.clone(),
            reason: format!(
                "transaction id {} differs from {}",
                other.proposal.txn_id, first.proposal.txn_id
            ),
        });
    }
    if other.proposal_response.payload != first.proposal_response.payload {
        return Err(AssemblyError::InconsistentResponses {
            endorser: other.endorser.clone(),
            reason: "response payload differs".to_string(),
        });
    }
    Ok(())
}

/// Invariant: enough responses were collected.
pub fn invariant_min_responses(got: usize, required: usize) -> Result<(), AssemblyError> {
    if got < required {
        return Err(AssemblyError::InsufficientResponses { got, required });
    }
    Ok(())
}
