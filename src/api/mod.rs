//! REST API over the reading store and cost engine.
//!
//! Endpoints mirror the service's public surface:
//! - `POST /readings/store` — ingest readings for a meter
//! - `GET /readings/read/{smart_meter_id}` — stored sequence
//! - `GET /price-plans/compare-all/{smart_meter_id}` — cost under every plan
//! - `GET /price-plans/recommend/{smart_meter_id}?limit=N` — cheapest first
//! - `GET /cost/{smart_meter_id}` — trailing-week bill under the meter's
//!   own supplier

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::engine::cost::CostEngine;
use crate::store::accounts::AccountDirectory;
use crate::store::readings::MeterReadingStore;

/// Application state shared across all request handlers.
///
/// The catalog and directory are immutable after startup; the reading store
/// carries its own lock, so the whole state sits behind a plain `Arc`.
pub struct AppState {
    /// Reading store, shared with the engine.
    pub store: Arc<MeterReadingStore>,
    /// Meter-id to supplier directory.
    pub accounts: AccountDirectory,
    /// Cost engine over the store and catalog.
    pub engine: CostEngine,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/readings/store", post(handlers::store_readings))
        .route("/readings/read/{smart_meter_id}", get(handlers::read_readings))
        .route(
            "/price-plans/compare-all/{smart_meter_id}",
            get(handlers::compare_all),
        )
        .route(
            "/price-plans/recommend/{smart_meter_id}",
            get(handlers::recommend),
        )
        .route("/cost/{smart_meter_id}", get(handlers::weekly_cost))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
