//! Products service: `POST /api/v1/products`, `GET /api/v1/products/{id}`,
//! `GET /health`.

use ecommerce_config::ServiceDefaults;
use ecommerce_core::Product;
use ecommerce_server::{bootstrap, run_service};
use tracing::error;

#[tokio::main]
async fn main() {
    let config = match bootstrap(ServiceDefaults::products()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to start products service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_service::<Product>(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
