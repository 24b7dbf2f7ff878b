use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::DashboardState;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn info(Extension(state): Extension<Arc<DashboardState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "records": state.table().len(),
        "prefixes": state.table().prefixes().len(),
        "loaded_at": state.loaded_at(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
