//! # Transaction Assembly
//!
//! Validates a set of endorsement responses and folds them into a
//! `Transaction`.
//!
//! Checks run over the whole set in stages, so the error reported is the
//! first failing stage rather than the first failing response:
//!
//! 1. every proposal header and payload decodes
//! 2. every status is 200
//! 3. every response carries a signed endorsement
//! 4. the assembly policy (response count, then consistency)

use crate::domain::entities::{AssembledTransaction, TransactionProposalResponse};
use crate::domain::errors::AssemblyError;
use crate::domain::invariants::{
    invariant_consistent_with, invariant_endorsement_present, invariant_min_responses,
    invariant_successful_status,
};
use crate::domain::value_objects::AssemblyPolicy;
use prost::Message;
use shared_types::{
    decode_chaincode_proposal_payload, decode_channel_header, decode_header,
    ChaincodeActionPayload, ChaincodeEndorsedAction, ChaincodeProposalPayload, Header,
    Transaction, TransactionAction,
};

/// Build a transaction from endorsement responses.
pub fn create_transaction(
    responses: &[TransactionProposalResponse],
    policy: &AssemblyPolicy,
) -> Result<AssembledTransaction, AssemblyError> {
    let first = responses.first().ok_or(AssemblyError::EmptyResponseSet)?;

    let mut decoded = None;
    for response in responses {
        let parts = decode_proposal(response)?;
        decoded.get_or_insert(parts);
    }
    let (header, payload) = decoded.ok_or(AssemblyError::EmptyResponseSet)?;

    for response in responses {
        invariant_successful_status(response)?;
    }

    let endorsements = responses
        .iter()
        .map(|r| invariant_endorsement_present(r).cloned())
        .collect::<Result<Vec<_>, _>>()?;

    invariant_min_responses(responses.len(), policy.min_responses)?;
    if policy.require_consistent_responses {
        for response in &responses[1..] {
            invariant_consistent_with(first, response)?;
        }
    }

    let action_payload = ChaincodeActionPayload {
        chaincode_proposal_payload: payload.without_transient().encode_to_vec(),
        action: Some(ChaincodeEndorsedAction {
            proposal_response_payload: first.proposal_response.payload.clone(),
            endorsements,
        }),
    };
    let transaction = Transaction {
        actions: vec![TransactionAction {
            header: header.signature_header,
            payload: action_payload.encode_to_vec(),
        }],
    };

    Ok(AssembledTransaction::new(first.proposal.clone(), transaction))
}

/// Decode the header (including its channel header) and the chaincode
/// payload of the proposal behind `response`.
fn decode_proposal(
    response: &TransactionProposalResponse,
) -> Result<(Header, ChaincodeProposalPayload), AssemblyError> {
    let header_error = || AssemblyError::HeaderUnmarshal {
        endorser: response.endorser.clone(),
    };
    let proposal = response.proposal.proposal.as_ref().ok_or_else(header_error)?;

    let header = decode_header(&proposal.header).map_err(|_| header_error())?;
    decode_channel_header(&header.channel_header).map_err(|_| header_error())?;

    let payload =
        decode_chaincode_proposal_payload(&proposal.payload).map_err(|_| {
            AssemblyError::PayloadUnmarshal {
                endorser: response.endorser.clone(),
            }
        })?;

    Ok((header, payload))
}
