//! HTTP API for the registry service.

mod handlers;
mod middleware;
mod types;

pub use middleware::{logging_middleware, rate_limit_middleware, RateLimitState};
pub use types::*;

use caller_registry::{Identity, Registry, RegistryEvent, Store};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Capacity of the event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The registry, behind a single write lock
    pub registry: Arc<RwLock<Registry>>,
    /// Persistent storage backend
    pub store: Arc<Store>,
    /// Identity mutating requests are issued as
    pub signer: Identity,
    /// Domain event publisher
    events: broadcast::Sender<RegistryEvent>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: Registry, store: Store, signer: Identity) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            registry: Arc::new(RwLock::new(registry)),
            store: Arc::new(store),
            signer,
            events,
        }
    }

    /// Subscribe to registry events.
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    /// Publish an event to subscribers. Dropped if nobody listens.
    pub(crate) fn publish(&self, event: RegistryEvent) {
        let _ = self.events.send(event);
    }
}

/// Create the API router with default rate limiting.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::new(60))
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        // Health check (no rate limiting)
        .route("/api/health", get(handlers::health))
        // Owner-gated mutations
        .route("/api/register", post(handlers::register))
        .route("/api/revoke", post(handlers::revoke))
        .route("/api/transfer-ownership", post(handlers::transfer_ownership))
        // Public reads
        .route(
            "/api/verify/:agency/:phone_number",
            get(handlers::verify),
        )
        .route("/api/agency/:phone_number", get(handlers::agency_name_by_phone))
        .route("/api/phone/:agency", get(handlers::agency_phone))
        .route("/api/registrations", get(handlers::list_registrations))
        .layer(axum_middleware::from_fn_with_state(
            rate_limit.clone(),
            rate_limit_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
