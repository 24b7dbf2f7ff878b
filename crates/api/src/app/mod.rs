//! HTTP application wiring (Axum router + shared read-only state).
//!
//! - `state.rs`: the table snapshot and derived control options
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use stockview_inventory::InventoryTable;

pub mod errors;
pub mod routes;
pub mod state;

pub use state::DashboardState;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(table: Arc<InventoryTable>) -> Router {
    let state = Arc::new(DashboardState::new(table));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}
