//! Smoke tests del layout HTTP
//!
//! Las rutas de clientes usan paths completos y se montan con merge,
//! no con nest: dos nest bajo "/api" chocan en el router. Estos tests
//! fijan ese layout y la semántica HTTP que el frontend asume.

use axum::body::{to_bytes, Body};
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceExt;

/// Mismo esqueleto de montaje que el router real: health en raíz,
/// recursos anidados bajo /api y formularios de clientes con merge.
fn test_router() -> Router {
    let classifieds = Router::new()
        .route("/", get(|| async { "list" }))
        .route("/latest", get(|| async { "latest" }))
        .route("/:slug", get(|Path(slug): Path<String>| async move { slug }));

    let customer = Router::new()
        .route("/api/reservations", post(|| async { "reserved" }))
        .route("/api/subscribe", post(|| async { "subscribed" }));

    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({"status": "ok", "service": "vehicle-classifieds-api"})) }),
        )
        .nest("/api/classifieds", classifieds)
        .merge(customer)
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint_shape() {
    let (status, body) = send(test_router(), "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "vehicle-classifieds-api");
}

#[tokio::test]
async fn test_nested_and_merged_routes_coexist() {
    // Si el montaje vuelve a nest("/api", ...) el Router entra en
    // pánico al construirse y este test falla antes del primer request
    let (status, _) = send(test_router(), "GET", "/api/classifieds").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(test_router(), "POST", "/api/reservations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "reserved");

    let (status, body) = send(test_router(), "POST", "/api/subscribe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "subscribed");
}

#[tokio::test]
async fn test_static_segment_wins_over_slug() {
    // "latest" no puede caer en el handler de detalle como si fuera un slug
    let (status, body) = send(test_router(), "GET", "/api/classifieds/latest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "latest");

    let (status, body) = send(test_router(), "GET", "/api/classifieds/bmw-m3-2019").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bmw-m3-2019");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, _) = send(test_router(), "GET", "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_form_routes_reject_get() {
    let (status, _) = send(test_router(), "GET", "/api/reservations").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(test_router(), "GET", "/api/subscribe").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_source_id_header_lookup_is_case_insensitive() {
    // El middleware busca "x-source-id" en minúsculas; el navegador
    // manda "X-Source-Id". HeaderMap normaliza, este test lo fija.
    let app = Router::new().route(
        "/",
        get(|headers: axum::http::HeaderMap| async move {
            match headers.get("x-source-id") {
                Some(value) => value.to_str().unwrap_or("").to_string(),
                None => "missing".to_string(),
            }
        }),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("X-Source-Id", "0a570e48-2a8a-4098-a40e-cfd8a8f0e4b2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "0a570e48-2a8a-4098-a40e-cfd8a8f0e4b2".as_bytes());
}
