//! # Shoezshop Storefront Entry Point
//!
//! Headless run of the storefront core.
//!
//! ```text
//! shoez-storefront [CONFIG_PATH]
//! ```
//!
//! Loads configuration, opens local storage, mounts the checkout from the
//! persisted cart and prints the rendered checkout as JSON. Seed a cart
//! first with the `seed` binary of `shoez-db`.

use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    match shoez_storefront::run(config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shoez-storefront: {e}");
            ExitCode::FAILURE
        }
    }
}
