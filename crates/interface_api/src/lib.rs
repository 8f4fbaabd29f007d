//! HTTP API Layer
//!
//! This crate provides the REST API for the case-management system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each record collection
//! - **Middleware**: Request logging
//! - **Error Handling**: Consistent, localized error responses
//!
//! The services own all business rules; handlers only translate between
//! HTTP and service calls, and map [`error::ApiError`] onto status codes.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//! use infra_store::JsonFileStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(JsonFileStore::new("db.json"));
//! let app = create_router(store, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_store::services::{AuditTrail, CaseService, ClientService, LegalTextService};
use infra_store::DocumentStore;

use crate::config::ApiConfig;
use crate::handlers::{audit, cases, clients, health, legal_texts};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub clients: ClientService,
    pub cases: CaseService,
    pub legal_texts: LegalTextService,
    pub audit: AuditTrail,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the record services over a shared store
    pub fn new(store: Arc<dyn DocumentStore>, config: ApiConfig) -> Self {
        Self {
            clients: ClientService::new(store.clone()),
            cases: CaseService::new(store.clone()),
            legal_texts: LegalTextService::new(store.clone()),
            audit: AuditTrail::new(store.clone()),
            store,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - The document store backing every record service
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn DocumentStore>, config: ApiConfig) -> Router {
    let state = AppState::new(store, config);

    // Client routes
    let client_routes = Router::new()
        .route("/", get(clients::list_clients))
        .route("/", post(clients::create_client))
        .route("/:id", get(clients::get_client))
        .route("/:id", put(clients::update_client))
        .route("/:id", delete(clients::delete_client));

    // Case routes
    let case_routes = Router::new()
        .route("/", get(cases::list_cases))
        .route("/", post(cases::create_case))
        .route("/:id", get(cases::get_case))
        .route("/:id", put(cases::update_case))
        .route("/:id", delete(cases::delete_case));

    // Legal text routes
    let legal_text_routes = Router::new()
        .route("/", get(legal_texts::list_legal_texts))
        .route("/", post(legal_texts::create_legal_text))
        .route("/:id", get(legal_texts::get_legal_text))
        .route("/:id", put(legal_texts::update_legal_text))
        .route("/:id", delete(legal_texts::delete_legal_text));

    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/cases", case_routes)
        .nest("/legal-texts", legal_text_routes)
        .route("/audit-logs", get(audit::list_audit_logs))
        .route("/health", get(health::health_check))
        .route("/stats", get(health::stats));

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::route_not_found)
        .layer(axum_middleware::from_fn(middleware::request_log))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// CORS for the local front end: fixed dev origins with credentials.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:5000",
        "http://localhost:3000",
        "http://127.0.0.1:5000",
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
