//! # Chaincode Messages
//!
//! Identification and invocation of chaincode (smart contracts).

use prost::{Enumeration, Message};

/// Name of the lifecycle system chaincode that handles deployment.
pub const LIFECYCLE_CHAINCODE: &str = "lscc";

/// Lifecycle function that instantiates chaincode on a channel.
pub const LIFECYCLE_DEPLOY: &str = "deploy";

/// Chaincode implementation language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum ChaincodeType {
    /// Not specified.
    Undefined = 0,
    /// Go chaincode.
    Golang = 1,
    /// Node.js chaincode.
    Node = 2,
    /// Chaincode archive.
    Car = 3,
    /// Java chaincode.
    Java = 4,
}

/// Identifies a chaincode.
#[derive(Clone, PartialEq, Eq, Hash, Message)]
pub struct ChaincodeId {
    /// Source path (used at install and instantiate time).
    #[prost(string, tag = "1")]
    pub path: String,
    /// Registered name.
    #[prost(string, tag = "2")]
    pub name: String,
    /// Version string.
    #[prost(string, tag = "3")]
    pub version: String,
}

impl ChaincodeId {
    /// Identify by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Function name and arguments, each as raw bytes.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeInput {
    /// First element is the function name by convention.
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub args: Vec<Vec<u8>>,
}

/// What to run and with which input.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeSpec {
    /// `ChaincodeType` as an integer.
    #[prost(int32, tag = "1")]
    pub chaincode_type: i32,
    /// Target chaincode.
    #[prost(message, optional, tag = "2")]
    pub chaincode_id: Option<ChaincodeId>,
    /// Invocation input.
    #[prost(message, optional, tag = "3")]
    pub input: Option<ChaincodeInput>,
    /// Execution timeout in milliseconds (0 = peer default).
    #[prost(int32, tag = "4")]
    pub timeout: i32,
}

/// Chaincode spec plus its code package, used by deploy.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeDeploymentSpec {
    /// What is being deployed.
    #[prost(message, optional, tag = "1")]
    pub chaincode_spec: Option<ChaincodeSpec>,
    /// Packaged source; empty for instantiate.
    #[prost(bytes = "vec", tag = "3")]
    pub code_package: Vec<u8>,
}

/// Wrapper around the spec of a chaincode call.
#[derive(Clone, PartialEq, Message)]
pub struct ChaincodeInvocationSpec {
    /// The call.
    #[prost(message, optional, tag = "1")]
    pub chaincode_spec: Option<ChaincodeSpec>,
}
