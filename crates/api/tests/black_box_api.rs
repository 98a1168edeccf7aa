use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::http::StatusCode as AxumStatusCode;
use axum::{Router, routing::get};
use reqwest::StatusCode;
use serde_json::{Value, json};

use vitrine_api::app::{AppServices, build_app};
use vitrine_api::config::ApiConfig;
use vitrine_catalog::InquiryConfig;
use vitrine_sheets::SheetsConfig;

const ENVELOPE_PREFIX: &str = "/*O_o*/\ngoogle.visualization.Query.setResponse(";
const ENVELOPE_SUFFIX: &str = ");";

/// Stub gviz upstream serving a fixed response and counting hits.
struct StubUpstream {
    base_url: String,
    hits: Arc<AtomicUsize>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubUpstream {
    async fn spawn(status: AxumStatusCode, body: String) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let app = Router::new().route(
            "/spreadsheets/d/:id/gviz/tq",
            get(move || {
                let counter = Arc::clone(&counter);
                let body = body.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub upstream");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, hits, handle }
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Build the app (same router as prod) against the stub upstream and
    /// bind it to an ephemeral port.
    async fn spawn(upstream: &StubUpstream) -> Self {
        let mut sheets = SheetsConfig::new("test-sheet");
        sheets.base_url = upstream.base_url.clone();
        sheets.timeout = Duration::from_secs(2);

        let config = ApiConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            sheets,
            inquiry: InquiryConfig {
                phone: "5581999999999".to_string(),
                business_name: "B3 Ambientes Corporativos".to_string(),
            },
            cache_ttl: Duration::from_secs(300),
        };

        let services = Arc::new(AppServices::new(&config).expect("failed to build services"));
        let app = build_app(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn wrap(payload: &Value) -> String {
    format!("{ENVELOPE_PREFIX}{payload}{ENVELOPE_SUFFIX}")
}

fn row(cells: Vec<Value>) -> Value {
    json!({ "c": cells.into_iter().map(|v| {
        if v.is_null() { Value::Null } else { json!({ "v": v }) }
    }).collect::<Vec<_>>() })
}

/// Header row plus the three-row catalog from which only row 1 is
/// publishable (row 2 has no name, row 3 has no image).
fn three_row_export() -> String {
    let rows = vec![
        row(vec![
            json!("id"), json!("nome"), json!("categoria"), json!("tags"),
            json!("imagem_url"), json!("descricao"), json!("status"),
        ]),
        row(vec![
            json!(1), json!("Cadeira X"), json!("Cadeiras"), Value::Null,
            json!("img1.jpg"), json!("desc"), json!("Ativo"),
        ]),
        row(vec![
            json!(2), json!(""), json!("Mesas"), Value::Null,
            json!("img2.jpg"), json!("desc"), json!("Ativo"),
        ]),
        row(vec![
            json!(3), json!("Mesa Y"), json!("Mesas"), Value::Null,
            json!(""), json!("desc"), json!("Ativo"),
        ]),
    ];
    wrap(&json!({ "table": { "rows": rows } }))
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, three_row_export()).await;
    let srv = TestServer::spawn(&upstream).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn products_endpoint_publishes_only_complete_rows() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, three_row_export()).await;
    let srv = TestServer::spawn(&upstream).await;

    let res = reqwest::get(format!("{}/api/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let items = body.as_array().expect("response must be a bare JSON array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["nome"], "Cadeira X");
    assert_eq!(items[0]["categoria"], "Cadeiras");
    assert_eq!(items[0]["imagem_url"], "img1.jpg");
    assert_eq!(items[0]["status"], "Ativo");
}

#[tokio::test]
async fn upstream_failure_maps_to_flat_error() {
    let upstream = StubUpstream::spawn(AxumStatusCode::INTERNAL_SERVER_ERROR, String::new()).await;
    let srv = TestServer::spawn(&upstream).await;

    let res = reqwest::get(format!("{}/api/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_envelope_maps_to_flat_error() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, "<html>not a gviz body</html>".to_string()).await;
    let srv = TestServer::spawn(&upstream).await;

    let res = reqwest::get(format!("{}/api/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn upstream_response_is_reused_within_the_window() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, three_row_export()).await;
    let srv = TestServer::spawn(&upstream).await;

    for _ in 0..3 {
        let res = reqwest::get(format!("{}/api/products", srv.base_url)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn general_inquiry_link_uses_the_generic_message() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, three_row_export()).await;
    let srv = TestServer::spawn(&upstream).await;

    let res = reqwest::get(format!("{}/api/inquiry", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/5581999999999?text="));
    // "Catálogo Geral" appears query-encoded.
    assert!(url.contains("Geral"));
}

#[tokio::test]
async fn product_inquiry_link_interpolates_the_product() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, three_row_export()).await;
    let srv = TestServer::spawn(&upstream).await;

    let res = reqwest::get(format!("{}/api/products/1/inquiry", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/5581999999999?text="));
    assert!(url.contains("Cadeira+X") || url.contains("Cadeira%20X"));
}

#[tokio::test]
async fn inquiry_for_unpublished_product_is_not_found() {
    let upstream = StubUpstream::spawn(AxumStatusCode::OK, three_row_export()).await;
    let srv = TestServer::spawn(&upstream).await;

    // Row 3 exists in the sheet but fails the publish invariant.
    let res = reqwest::get(format!("{}/api/products/3/inquiry", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}
