//! HTTP API Layer
//!
//! This crate provides the REST API for the vehicle quote system using Axum.
//! It is thin transport glue: request bodies are handed to the pricing
//! engine's validator, and its results are mapped to JSON responses. No
//! pricing logic lives here.
//!
//! # Routes
//!
//! - `POST /quote` - validate the request and return a premium quote
//! - `GET /health` - liveness check
//! - anything else - JSON 404
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pricing_engine::RateTable;

use crate::config::ApiConfig;
use crate::handlers::{health, quote};

/// Application state shared across handlers
///
/// The rate table is built once here and only ever read afterwards, so
/// concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub rates: Arc<RateTable>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState {
        config,
        rates: Arc::new(RateTable::standard()),
    };

    Router::new()
        .route("/quote", post(quote::create_quote))
        .route("/health", get(health::health_check))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
