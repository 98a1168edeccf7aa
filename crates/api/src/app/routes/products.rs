use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use vitrine_catalog::inquiry_link;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id/inquiry", get(product_inquiry))
}

/// `/api/inquiry` lives beside `/api/products`, not under it.
pub fn inquiry_router() -> Router {
    Router::new().route("/inquiry", get(general_inquiry))
}

/// The published list as a bare JSON array, or a flat error on failure.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products().await {
        Ok(products) => (StatusCode::OK, Json(products.as_slice())).into_response(),
        Err(e) => errors::adapter_error_to_response(e),
    }
}

pub async fn product_inquiry(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let products = match services.products().await {
        Ok(products) => products,
        Err(e) => return errors::adapter_error_to_response(e),
    };

    match products.iter().find(|p| p.id == id) {
        Some(product) => {
            let url = inquiry_link(services.inquiry_config(), Some(product));
            (StatusCode::OK, Json(serde_json::json!({ "url": url }))).into_response()
        }
        None => errors::json_error(StatusCode::NOT_FOUND, "product not found"),
    }
}

pub async fn general_inquiry(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let url = inquiry_link(services.inquiry_config(), None);
    (StatusCode::OK, Json(serde_json::json!({ "url": url }))).into_response()
}
