//! Service lifecycle: configuration, logging, serving and shutdown.

use crate::di::ServiceModule;
use crate::startup::{print_banner, print_startup_info};
use axum::Router;
use ecommerce_config::{AppConfig, ConfigLoader, ServiceDefaults};
use ecommerce_core::telemetry::init_telemetry;
use ecommerce_core::{EcommerceError, EcommerceResult};
use ecommerce_repository::PostgresEntity;
use ecommerce_rest::{create_health_router, create_router};
use tokio::signal;
use tracing::{error, info};

/// Loads the configuration and installs the global logger.
///
/// Nothing is logged before this returns, so callers report its error on
/// stderr.
pub fn bootstrap(defaults: ServiceDefaults) -> EcommerceResult<AppConfig> {
    let config = ConfigLoader::new(defaults).load()?;
    init_telemetry(&config.telemetry())?;
    Ok(config)
}

/// Runs an entity service until Ctrl-C or SIGTERM.
pub async fn run_service<E: PostgresEntity>(config: AppConfig) -> EcommerceResult<()> {
    print_banner(&config.service.name);
    info!(
        service = %config.service.name,
        environment = %config.service.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting service"
    );

    let module = ServiceModule::<E>::build(&config).await?;
    let router = create_router::<E>(module.entity_service(), &config.service.name);

    print_startup_info(&config, Some(E::KIND));
    let result = serve(router, &config.service.addr()).await;

    module.database_pool().close().await;
    info!("Server shutdown complete");
    result
}

/// Runs the gateway, which only reports its own health.
pub async fn run_gateway(config: AppConfig) -> EcommerceResult<()> {
    print_banner(&config.service.name);
    info!(
        service = %config.service.name,
        environment = %config.service.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting gateway"
    );

    let router = create_health_router(&config.service.name);

    print_startup_info(&config, None);
    serve(router, &config.service.addr()).await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn serve(router: Router, addr: &str) -> EcommerceResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| EcommerceError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EcommerceError::Internal(format!("HTTP server error: {}", e)))
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
