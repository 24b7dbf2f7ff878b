use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use stockview_dashboard::{build_figure, ViewSelection};

use crate::app::{errors, DashboardState};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn controls(Extension(state): Extension<Arc<DashboardState>>) -> impl IntoResponse {
    Json(state.controls().clone())
}

pub async fn records(Extension(state): Extension<Arc<DashboardState>>) -> impl IntoResponse {
    Json(state.table().records().to_vec())
}

/// Recompute the chart for the posted control selection.
pub async fn figure(
    Extension(state): Extension<Arc<DashboardState>>,
    payload: Result<Json<ViewSelection>, JsonRejection>,
) -> axum::response::Response {
    let selection = match payload {
        Ok(Json(selection)) => selection,
        Err(rejection) => {
            tracing::warn!("rejected figure request: {}", rejection.body_text());
            return errors::json_rejection_to_response(rejection);
        }
    };

    let figure = build_figure(state.table(), &selection);
    if figure.point_count() == 0 {
        tracing::debug!(?selection, "selection matched no records");
    }

    (StatusCode::OK, Json(figure)).into_response()
}
