use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::{
    ContactService, ContactStore, InMemoryContactStore, InMemoryUserStore, UserService, UserStore,
};
use persistence::{ContactRepository, UserRepository};
use shared::password::{Argon2PasswordHasher, PasswordHashing};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{auth, contacts, health};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub contacts: ContactService,
    pub users: UserService,
}

impl AppState {
    /// Builds services over the given stores.
    pub fn new(
        config: Config,
        contact_store: Arc<dyn ContactStore>,
        user_store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHashing>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            contacts: ContactService::new(contact_store),
            users: UserService::new(user_store, hasher),
        }
    }

    /// State backed by PostgreSQL.
    pub fn with_pool(config: Config, pool: PgPool) -> Self {
        Self::new(
            config,
            Arc::new(ContactRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool)),
            Arc::new(Argon2PasswordHasher::new()),
        )
    }

    /// State backed by in-memory stores; nothing survives a restart.
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryContactStore::new()),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
        )
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    create_router(AppState::with_pool(config, pool))
}

pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let contact_routes = Router::new()
        .route(
            "/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/contacts/:id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        );

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(contact_routes)
        .merge(auth_routes)
        .merge(ops_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
