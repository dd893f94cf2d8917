//! Browser platform for the registration proof pipeline.
//!
//! Hosts the proving worker (witness calculation plus Groth16 over fetched
//! circuit artifacts), the bridge that plugs it into the core worker client,
//! and the `wasm_bindgen` API the dApp calls.

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod worker;

#[cfg(target_arch = "wasm32")]
pub use backend::{DEFAULT_WORKER_URL, RegistrationWorkerSpawner, WorkerBackend};
