//! WASM entry point for the Leptos CSR app

use financiero_web::{bootstrap, BootstrapConfig, BrowserHost};
use leptos::logging;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = bootstrap(&BrowserHost, BootstrapConfig::default()) {
        logging::error!("{}", err);
        wasm_bindgen::throw_str(&err.to_string());
    }
}
