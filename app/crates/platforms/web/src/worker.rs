//! The background proving worker.
//!
//! One request, one response, then the worker is torn down by the client.
//! The full prove runs here: fetch the circuit artifacts, calculate the
//! witness with ark-circom (wasmer with the js backend), then build the
//! Groth16 proof with the Circom reduction. The response mirrors the snarkjs
//! `fullProve` shape: decimal-string points with G2 rows in x/y coordinate
//! pairs, and the public signal vector straight from the instance part of
//! the witness.

use std::collections::HashMap;
use std::io::Cursor;

use anyhow::{Context, Result, anyhow, bail};
use ark_bn254::{Bn254, Fq, Fr};
use ark_circom::{CircomReduction, WitnessCalculator, read_zkey};
use ark_ff::PrimeField;
use ark_groth16::{Groth16, Proof};
use ark_std::UniformRand;
use ark_std::rand::rngs::OsRng;
use gloo_worker::oneshot::oneshot;
use num_bigint::{BigInt, BigUint, Sign};
use serde_json::Value;
use types::{CircuitArtifacts, CircuitInputs, ProveRequest, ProveResponse, ProverProof};
use wasmer::{Module, Store};

use crate::fetch::fetch_binary;

#[oneshot]
pub async fn RegistrationProver(request: ProveRequest) -> ProveResponse {
    match prove(&request.inputs).await {
        Ok((proof, public_signals)) => ProveResponse::ok(proof, public_signals),
        Err(err) => {
            log::error!("registration prove failed: {err:#}");
            ProveResponse::err(format!("{err:#}"))
        }
    }
}

/// The circuit artifacts a single prove needs, fetched together.
struct ArtifactBundle {
    circuit_wasm: Vec<u8>,
    zkey: Vec<u8>,
}

impl ArtifactBundle {
    async fn fetch(artifacts: &CircuitArtifacts) -> Result<Self> {
        let circuit_wasm = fetch_binary(&artifacts.wasm_url)
            .await
            .context("fetching circuit wasm")?;
        let zkey = fetch_binary(&artifacts.zkey_url)
            .await
            .context("fetching proving key")?;
        Ok(Self { circuit_wasm, zkey })
    }
}

async fn prove(inputs: &CircuitInputs) -> Result<(ProverProof, Vec<String>)> {
    let bundle = ArtifactBundle::fetch(&CircuitArtifacts::default()).await?;

    let mut store = Store::default();
    let module = Module::new(&store, &bundle.circuit_wasm)
        .map_err(|e| anyhow!("loading circuit wasm: {e}"))?;
    let mut calculator = WitnessCalculator::from_module(&mut store, module)
        .map_err(|e| anyhow!("initialising witness calculator: {e}"))?;

    let witness = calculator
        .calculate_witness(&mut store, witness_inputs(inputs)?, false)
        .map_err(|e| anyhow!("witness calculation: {e}"))?
        .into_iter()
        .map(field_element)
        .collect::<Result<Vec<Fr>>>()?;

    let (proving_key, matrices) =
        read_zkey(&mut Cursor::new(bundle.zkey)).context("parsing proving key")?;
    let num_inputs = matrices.num_instance_variables;
    if witness.len() < num_inputs {
        bail!("witness shorter than the instance: {} < {num_inputs}", witness.len());
    }

    let mut rng = OsRng;
    let r = Fr::rand(&mut rng);
    let s = Fr::rand(&mut rng);
    let proof = Groth16::<Bn254, CircomReduction>::create_proof_with_reduction_and_matrices(
        &proving_key,
        r,
        s,
        &matrices,
        num_inputs,
        matrices.num_constraints,
        &witness,
    )
    .context("proof computation")?;

    // instance variables minus the constant wire 0
    let public_signals = witness[1..num_inputs].iter().map(fr_decimal).collect();
    Ok((snarkjs_proof(&proof), public_signals))
}

/// Turn the typed circuit inputs into the signal map the witness calculator
/// consumes. The serde field names are the circuit signal names, so the JSON
/// encoding is authoritative here.
fn witness_inputs(inputs: &CircuitInputs) -> Result<HashMap<String, Vec<BigInt>>> {
    let Value::Object(signals) =
        serde_json::to_value(inputs).context("encoding circuit inputs")?
    else {
        bail!("circuit inputs must encode to an object");
    };

    let mut map = HashMap::new();
    for (signal, value) in signals {
        let column = match value {
            Value::String(s) => vec![parse_signal(&signal, &s)?],
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => parse_signal(&signal, &s),
                    _ => Err(anyhow!("non-string element in signal {signal}")),
                })
                .collect::<Result<Vec<_>>>()?,
            _ => bail!("unsupported encoding for signal {signal}"),
        };
        map.insert(signal, column);
    }
    Ok(map)
}

fn parse_signal(signal: &str, value: &str) -> Result<BigInt> {
    BigInt::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| anyhow!("signal {signal} is not a decimal integer: {value}"))
}

fn field_element(value: BigInt) -> Result<Fr> {
    let (sign, bytes) = value.to_bytes_le();
    if sign == Sign::Minus {
        bail!("negative value in witness output");
    }
    Ok(Fr::from_le_bytes_mod_order(&bytes))
}

fn fr_decimal(value: &Fr) -> String {
    BigUint::from(value.into_bigint()).to_string()
}

fn fq_decimal(value: &Fq) -> String {
    BigUint::from(value.into_bigint()).to_string()
}

fn snarkjs_proof(proof: &Proof<Bn254>) -> ProverProof {
    ProverProof {
        pi_a: [fq_decimal(&proof.a.x), fq_decimal(&proof.a.y)],
        pi_b: [
            [fq_decimal(&proof.b.x.c0), fq_decimal(&proof.b.x.c1)],
            [fq_decimal(&proof.b.y.c0), fq_decimal(&proof.b.y.c1)],
        ],
        pi_c: [fq_decimal(&proof.c.x), fq_decimal(&proof.c.y)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn signal_map_keeps_circuit_names_and_column_order() {
        let inputs = CircuitInputs {
            sender_private_key: "7".into(),
            sender_public_key: ["11".into(), "13".into()],
            sender_address: "97433442488726861213578988847752201310395502865".into(),
            chain_id: "43113".into(),
            registration_hash: "17".into(),
        };
        let map = witness_inputs(&inputs).expect("valid inputs");

        assert_eq!(map.len(), 5);
        assert_eq!(map["SenderPrivateKey"], vec![BigInt::from(7)]);
        assert_eq!(
            map["SenderPublicKey"],
            vec![BigInt::from(11), BigInt::from(13)]
        );
        assert_eq!(map["ChainID"], vec![BigInt::from(43_113)]);
        assert!(map.contains_key("SenderAddress"));
        assert!(map.contains_key("RegistrationHash"));
    }

    #[wasm_bindgen_test]
    fn non_decimal_signal_is_rejected() {
        let inputs = CircuitInputs {
            sender_private_key: "7".into(),
            sender_public_key: ["11".into(), "13".into()],
            sender_address: "1".into(),
            chain_id: "1".into(),
            registration_hash: "0xff".into(),
        };
        assert!(witness_inputs(&inputs).is_err());
    }
}
