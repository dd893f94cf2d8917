//! Message protocol between the worker client and the background prover.
//!
//! One request, one response per worker instance. The response mirrors the
//! snarkjs `fullProve` result: either `{success: true, proof, publicSignals}`
//! or `{success: false, error}`.

use serde::{Deserialize, Serialize};

use crate::inputs::CircuitInputs;
use crate::proof::ProverProof;

/// Request sent to the background prover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProveRequest {
    /// Circuit inputs for the registration witness.
    pub inputs: CircuitInputs,
}

/// Response from the background prover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveResponse {
    /// Whether proving succeeded.
    pub success: bool,
    /// The proof, present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<ProverProof>,
    /// The public signal vector, present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_signals: Option<Vec<String>>,
    /// The error message, present when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProveResponse {
    /// A success response.
    pub fn ok(proof: ProverProof, public_signals: Vec<String>) -> Self {
        Self {
            success: true,
            proof: Some(proof),
            public_signals: Some(public_signals),
            error: None,
        }
    }

    /// A failure response carrying the reported message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            proof: None,
            public_signals: None,
            error: Some(message.into()),
        }
    }
}
