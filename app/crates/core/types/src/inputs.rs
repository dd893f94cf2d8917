//! Named circuit input signals.

use serde::{Deserialize, Serialize};

/// The input signals of the registration circuit, keyed by the exact signal
/// names the compiled circuit declares. All values are decimal strings.
///
/// Built fresh for every registration attempt; never reused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitInputs {
    /// Formatted private key, reduced into the Baby Jubjub subgroup order.
    #[serde(rename = "SenderPrivateKey")]
    pub sender_private_key: String,
    /// Public key coordinates `[x, y]`.
    #[serde(rename = "SenderPublicKey")]
    pub sender_public_key: [String; 2],
    /// Wallet address as a decimal field element.
    #[serde(rename = "SenderAddress")]
    pub sender_address: String,
    /// Chain id as a decimal field element.
    #[serde(rename = "ChainID")]
    pub chain_id: String,
    /// Poseidon commitment over `(chainId, privateKey, address)`.
    #[serde(rename = "RegistrationHash")]
    pub registration_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_circuit_signal_names() {
        let inputs = CircuitInputs {
            sender_private_key: "1".into(),
            sender_public_key: ["2".into(), "3".into()],
            sender_address: "4".into(),
            chain_id: "5".into(),
            registration_hash: "6".into(),
        };
        let value = serde_json::to_value(&inputs).expect("serialize");
        let obj = value.as_object().expect("object");
        for signal in [
            "SenderPrivateKey",
            "SenderPublicKey",
            "SenderAddress",
            "ChainID",
            "RegistrationHash",
        ] {
            assert!(obj.contains_key(signal), "missing signal {signal}");
        }
        assert_eq!(obj.len(), 5);
    }
}
