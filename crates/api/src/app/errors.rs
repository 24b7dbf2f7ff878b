use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a rejected JSON body (bad syntax, unknown sort mode, blank SKU...)
/// to the standard error shape, keeping axum's status code.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    let code = match rejection {
        JsonRejection::JsonDataError(_) => "invalid_selection",
        JsonRejection::JsonSyntaxError(_) => "malformed_json",
        JsonRejection::MissingJsonContentType(_) => "unsupported_media_type",
        _ => "bad_request",
    };
    json_error(rejection.status(), code, rejection.body_text())
}
