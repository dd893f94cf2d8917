//! Circuit input assembly.

use keys::{CircuitField, PrivateKey, PublicKey, field_to_decimal};
use types::{Address, CircuitInputs};

/// Map the typed pipeline values onto the named circuit signals.
///
/// Pure; all numeric values are serialized as decimal strings, the textual
/// encoding the witness calculator expects. Validation happened earlier (the
/// types can only hold in-range values), so invalid combinations can only
/// surface as prover-stage failures.
pub fn build_circuit_inputs(
    chain_id: u64,
    private_key: &PrivateKey,
    public_key: &PublicKey,
    address: &Address,
    registration_hash: &CircuitField,
) -> CircuitInputs {
    CircuitInputs {
        sender_private_key: private_key.formatted_decimal(),
        sender_public_key: [public_key.x_decimal(), public_key.y_decimal()],
        sender_address: address.to_decimal(),
        chain_id: chain_id.to_string(),
        registration_hash: field_to_decimal(registration_hash),
    }
}
