fn main() {
    #[cfg(target_arch = "wasm32")]
    voyago_frontend::run_app();
}
