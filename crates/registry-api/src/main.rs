//! Registry API service - entry point.

use caller_registry::{Identity, Registry, Store};
use registry_api::{
    api::{create_router_with_rate_limit, AppState, RateLimitState},
    Config,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting registry API service");

    let signer = Identity::new(config.signer.identity.clone());

    // Initialize storage
    let store = Store::new(config.registry.persist, config.registry.path.clone());

    // Load existing registry; a fresh one is owned by the signer
    let registry = match store.load(&signer).await {
        Ok(r) => {
            info!(
                "Registry ready: {} registrations, owner {}",
                r.count(),
                r.owner()
            );
            r
        }
        Err(e) => {
            error!("Failed to load registry: {}", e);
            info!("Starting with empty registry");
            Registry::new(signer.clone())
        }
    };

    if registry.owner() != &signer {
        info!(
            "Configured signer {} is not the registry owner {}; mutating calls will be rejected",
            signer,
            registry.owner()
        );
    }

    // Create application state
    let state = AppState::new(registry, store, signer);

    // Create rate limiter from config
    let rate_limit = RateLimitState::new(config.rate_limit.global_per_minute);

    // Create router with rate limiting
    let app = create_router_with_rate_limit(state, rate_limit);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
