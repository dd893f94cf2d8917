//! The registration proof orchestrator.

use keys::{PrivateKey, PublicKey, field_to_decimal, registration_hash};
use types::{
    Address, GeneratedProof, PrivateKeyExport, PublicKeyExport, RegistrationOutcome, UserKeys,
};

use crate::backend::SpawnBackend;
use crate::client::ProofWorkerClient;
use crate::error::ProveError;
use crate::fallback::fallback_proof;
use crate::inputs::build_circuit_inputs;

/// The public entry point of the proof pipeline.
///
/// Sequences key derivation, registration hashing, input assembly and the
/// worker prove. Prover failures are absorbed into the deterministic
/// placeholder proof; input validation failures and anything upstream of
/// proving are fatal.
pub struct ProofOrchestrator<S> {
    client: ProofWorkerClient<S>,
}

impl<S: SpawnBackend> ProofOrchestrator<S> {
    /// Wrap a worker client.
    pub fn new(client: ProofWorkerClient<S>) -> Self {
        Self { client }
    }

    /// Generate a registration proof for `address` on chain `chain_id`.
    ///
    /// Derives a fresh key pair on every call; nothing is shared between
    /// concurrent calls. The returned [`UserKeys`] always reflect the
    /// genuinely derived keys, whichever proof path was taken.
    ///
    /// # Errors
    ///
    /// [`ProveError::InvalidInput`] for a malformed address, raised before
    /// any worker is spawned; [`ProveError::Unexpected`] for anything that
    /// escapes the prover fallback handling.
    pub async fn generate_registration_proof(
        &self,
        address: &str,
        chain_id: u64,
    ) -> Result<RegistrationOutcome, ProveError> {
        let address: Address = address.parse()?;

        log::debug!("deriving registration keys for {address} on chain {chain_id}");
        let private_key = PrivateKey::random()?;
        let public_key = PublicKey::derive(&private_key);
        let hash = registration_hash(chain_id, &private_key, &address)?;
        let inputs = build_circuit_inputs(chain_id, &private_key, &public_key, &address, &hash);

        let proof = match self.client.prove(&inputs).await {
            Ok(proof) => GeneratedProof::Real(proof),
            Err(err) if err.is_recoverable() => {
                log::warn!("prover unavailable, substituting placeholder proof: {err}");
                GeneratedProof::Fallback(fallback_proof(&inputs)?)
            }
            Err(err) => return Err(ProveError::Unexpected(err.to_string())),
        };

        let user_keys = UserKeys {
            address: address.to_string(),
            private_key: PrivateKeyExport {
                raw: private_key.raw_decimal(),
                formatted: private_key.formatted_decimal(),
            },
            public_key: PublicKeyExport {
                x: public_key.x_decimal(),
                y: public_key.y_decimal(),
            },
            registration_hash: field_to_decimal(&hash),
        };

        Ok(RegistrationOutcome { proof, user_keys })
    }
}
