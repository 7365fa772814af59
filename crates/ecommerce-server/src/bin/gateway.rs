//! Gateway: serves `GET /health` only.

use ecommerce_config::ServiceDefaults;
use ecommerce_server::{bootstrap, run_gateway};
use tracing::error;

#[tokio::main]
async fn main() {
    let config = match bootstrap(ServiceDefaults::gateway()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to start gateway: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_gateway(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
