use leptos::logging::error;

mod app;
mod bootstrap;
mod config;
mod error;
mod mount;
mod router;
mod routes;
mod views;

// Re-export error types for convenience
pub use error::{Error, Result};

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = bootstrap::start() {
        error!("Application failed to start: {}", e);
        wasm_bindgen::throw_str(&e.to_string());
    }
}
