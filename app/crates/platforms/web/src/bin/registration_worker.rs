//! Dedicated-worker entry point for the registration prover.

#[cfg(target_arch = "wasm32")]
fn main() {
    use gloo_worker::Registrable;

    console_error_panic_hook::set_once();
    wasm_log::init(wasm_log::Config::new(log::Level::Info));
    web::worker::RegistrationProver::registrar().register();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
