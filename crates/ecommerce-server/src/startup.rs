//! Server startup utilities.

use ecommerce_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner(service_name: &str) {
    info!(r#"
    ______
   / ____/________  ____ ___  ____ ___  ___  _____________
  / __/ / ___/ __ \/ __ `__ \/ __ `__ \/ _ \/ ___/ ___/ _ \
 / /___/ /__/ /_/ / / / / / / / / / / /  __/ /  / /__/  __/
/_____/\___/\____/_/ /_/ /_/_/ /_/ /_/\___/_/   \___/\___/
    "#);
    info!("Service: {}", service_name);
}

/// Returns the routes a service exposes, for the startup summary.
#[must_use]
pub fn route_summary(kind: Option<&str>) -> Vec<String> {
    let mut routes = vec!["GET  /health".to_string()];
    if let Some(kind) = kind {
        routes.push(format!("POST /api/v1/{}s", kind));
        routes.push(format!("GET  /api/v1/{}s/{{id}}", kind));
    }
    routes
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig, kind: Option<&str>) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Listen:    http://{}", config.service.addr());
    for route in route_summary(kind) {
        info!("Route:     {}", route);
    }
    if kind.is_some() {
        info!("Database:  {}", config.database.redacted_connection_string());
        if config.redis.enabled {
            info!("Cache:     redis://{} (TTL 300s)", config.redis.addr);
        } else {
            info!("Cache:     disabled");
        }
    }
    info!("{}", separator);
}
