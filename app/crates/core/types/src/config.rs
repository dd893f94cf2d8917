//! Artifact location configuration.

use serde::{Deserialize, Serialize};

/// Default path of the compiled registration circuit.
pub const DEFAULT_CIRCUIT_WASM_PATH: &str = "/zkeERC/circuits/RegistrationCircuit.wasm";
/// Default path of the Groth16 proving key.
pub const DEFAULT_CIRCUIT_ZKEY_PATH: &str = "/zkeERC/circuits/RegistrationCircuit.groth16.zkey";

/// Locations of the two circuit artifacts the prover fetches.
///
/// Passed by value wherever artifacts are needed; there is no global loader
/// state, so tests and workers can carry independent configurations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitArtifacts {
    /// URL of the compiled circuit program.
    pub wasm_url: String,
    /// URL of the proving key.
    pub zkey_url: String,
}

impl Default for CircuitArtifacts {
    fn default() -> Self {
        Self {
            wasm_url: DEFAULT_CIRCUIT_WASM_PATH.into(),
            zkey_url: DEFAULT_CIRCUIT_ZKEY_PATH.into(),
        }
    }
}
