//! # Proposal Construction
//!
//! Turns invoke and instantiate requests into unsigned `Proposal`s.
//! Signing happens in the service layer, which owns the identity.

use crate::domain::entities::{ChaincodeInvokeRequest, InstantiateRequest};
use crate::domain::errors::ProposalError;
use crate::domain::header::{build_chaincode_channel_header, build_header, build_signature_header};
use crate::domain::value_objects::TransactionId;
use prost::Message;
use shared_types::{
    ChaincodeDeploymentSpec, ChaincodeId, ChaincodeInput, ChaincodeInvocationSpec,
    ChaincodeProposalPayload, ChaincodeSpec, ChaincodeType, HeaderType, Proposal,
    LIFECYCLE_CHAINCODE, LIFECYCLE_DEPLOY,
};
use std::collections::HashMap;
use std::time::SystemTime;

/// Proposals are not bound to a ledger epoch.
const PROPOSAL_EPOCH: u64 = 0;

/// Check instantiate parameters in the order callers expect errors.
pub fn validate_instantiate_request(
    request: &InstantiateRequest,
    target_count: usize,
) -> Result<(), ProposalError> {
    if request.chaincode_name.is_empty() {
        return Err(ProposalError::MissingParameter("chaincodeName"));
    }
    if request.chaincode_path.is_empty() {
        return Err(ProposalError::MissingParameter("chaincodePath"));
    }
    if request.chaincode_version.is_empty() {
        return Err(ProposalError::MissingParameter("chaincodeVersion"));
    }
    if target_count == 0 {
        return Err(ProposalError::MissingTargets);
    }
    Ok(())
}

/// Wrap an invocation spec in an endorser-transaction proposal.
pub fn create_chaincode_proposal(
    channel_id: &str,
    txn_id: &TransactionId,
    creator: &[u8],
    invocation: &ChaincodeInvocationSpec,
    transient_map: HashMap<String, Vec<u8>>,
    timestamp: SystemTime,
) -> Result<Proposal, ProposalError> {
    let chaincode_id = invocation
        .chaincode_spec
        .as_ref()
        .and_then(|spec| spec.chaincode_id.clone())
        .unwrap_or_default();

    let channel_header = build_chaincode_channel_header(
        HeaderType::EndorserTransaction,
        channel_id,
        txn_id.as_str(),
        PROPOSAL_EPOCH,
        timestamp,
        &chaincode_id,
    )?;
    let signature_header = build_signature_header(txn_id, creator);
    let header = build_header(&channel_header, &signature_header);

    let payload = ChaincodeProposalPayload {
        input: invocation.encode_to_vec(),
        transient_map,
    };

    Ok(Proposal {
        header: header.encode_to_vec(),
        payload: payload.encode_to_vec(),
        extension: Vec::new(),
    })
}

/// Proposal for a chaincode invocation. The function name travels as the
/// first argument.
pub fn invoke_proposal(
    channel_id: &str,
    txn_id: &TransactionId,
    creator: &[u8],
    request: &ChaincodeInvokeRequest,
    timestamp: SystemTime,
) -> Result<Proposal, ProposalError> {
    if request.chaincode_id.is_empty() {
        return Err(ProposalError::MissingParameter("chaincodeId"));
    }

    let mut args = Vec::with_capacity(request.args.len() + 1);
    args.push(request.fcn.as_bytes().to_vec());
    args.extend(request.args.iter().cloned());

    let invocation = invocation_spec(ChaincodeId::named(request.chaincode_id.clone()), args);
    create_chaincode_proposal(
        channel_id,
        txn_id,
        creator,
        &invocation,
        request.transient_map.clone(),
        timestamp,
    )
}

/// Proposal asking the lifecycle chaincode to deploy an installed
/// chaincode on the channel.
pub fn instantiate_proposal(
    channel_id: &str,
    txn_id: &TransactionId,
    creator: &[u8],
    request: &InstantiateRequest,
    timestamp: SystemTime,
) -> Result<Proposal, ProposalError> {
    let deployment = ChaincodeDeploymentSpec {
        chaincode_spec: Some(ChaincodeSpec {
            chaincode_type: ChaincodeType::Golang as i32,
            chaincode_id: Some(ChaincodeId {
                path: request.chaincode_path.clone(),
                name: request.chaincode_name.clone(),
                version: request.chaincode_version.clone(),
            }),
            input: Some(ChaincodeInput {
                args: request.args.clone(),
            }),
            timeout: 0,
        }),
        code_package: Vec::new(),
    };

    let mut args = vec![
        LIFECYCLE_DEPLOY.as_bytes().to_vec(),
        channel_id.as_bytes().to_vec(),
        deployment.encode_to_vec(),
    ];
    if let Some(policy) = &request.policy {
        args.push(policy.clone());
    }

    let invocation = invocation_spec(ChaincodeId::named(LIFECYCLE_CHAINCODE), args);
    create_chaincode_proposal(
        channel_id,
        txn_id,
        creator,
        &invocation,
        HashMap::new(),
        timestamp,
    )
}

fn invocation_spec(chaincode_id: ChaincodeId, args: Vec<Vec<u8>>) -> ChaincodeInvocationSpec {
    ChaincodeInvocationSpec {
        chaincode_spec: Some(ChaincodeSpec {
            chaincode_type: ChaincodeType::Golang as i32,
            chaincode_id: Some(chaincode_id),
            input: Some(ChaincodeInput { args }),
            timeout: 0,
        }),
    }
}
