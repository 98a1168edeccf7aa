use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vitrine_sheets::AdapterError;

/// Flat `{"error": <message>}` body; the shape consumed by the storefront.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

/// Both adapter failure kinds surface as one generic server error; the
/// fetch/parse distinction is logged, not exposed.
pub fn adapter_error_to_response(err: AdapterError) -> axum::response::Response {
    match &err {
        AdapterError::Fetch(msg) => tracing::error!(error = %msg, "catalog fetch failed"),
        AdapterError::Parse(e) => tracing::error!(error = %e, "catalog export parse failed"),
    }
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products")
}
