//! The JS-facing API.

use prover::{ProofOrchestrator, ProofWorkerClient};
use wasm_bindgen::prelude::*;

use crate::backend::RegistrationWorkerSpawner;

/// Initialize the WASM module: panic hook plus console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_log::init(wasm_log::Config::new(log::Level::Debug));
}

/// Get the module version.
#[wasm_bindgen]
pub fn version() -> String {
    String::from(env!("CARGO_PKG_VERSION"))
}

/// Generate a registration proof for `address` on chain `chain_id`.
///
/// Resolves to `{ proof, userKeys }`; the proof carries a `kind` tag telling
/// the caller whether the real prover ran or the deterministic placeholder
/// was substituted.
#[wasm_bindgen]
pub async fn generate_registration_proof(
    address: String,
    chain_id: u64,
) -> Result<JsValue, JsValue> {
    let client = ProofWorkerClient::new(RegistrationWorkerSpawner::default());
    let outcome = ProofOrchestrator::new(client)
        .generate_registration_proof(&address, chain_id)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
}
