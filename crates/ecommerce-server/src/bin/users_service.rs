//! Users service: `POST /api/v1/users`, `GET /api/v1/users/{id}`, `GET /health`.

use ecommerce_config::ServiceDefaults;
use ecommerce_core::User;
use ecommerce_server::{bootstrap, run_service};
use tracing::error;

#[tokio::main]
async fn main() {
    let config = match bootstrap(ServiceDefaults::users()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to start users service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_service::<User>(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
