use axum::{
    routing::{get, post},
    Router,
};

pub mod dashboard;
pub mod system;

/// Router for the page and its JSON endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/api/controls", get(dashboard::controls))
        .route("/api/records", get(dashboard::records))
        .route("/api/figure", post(dashboard::figure))
        .route("/api/info", get(system::info))
}
