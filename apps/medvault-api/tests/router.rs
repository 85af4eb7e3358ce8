//! Requests driven through the full router: path matching, prefixes,
//! extractor rejections and CORS headers.

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use medvault_api::{router, AppState};
use medvault_db::{Database, DbConfig};

async fn app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    router(AppState::new(db))
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, headers, body)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let (status, _, body) = send_request(app, request).await;
    (status, body)
}

async fn add_supplier(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/suppliers",
        Some(json!({ "name": name, "contact": "555-0100" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn add_medicine(app: &Router, name: &str, supplier_id: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/medicines",
        Some(json!({
            "name": name,
            "company": "PharmaCorp",
            "manufacture_date": "2024-01-15",
            "expiry_date": "2026-01-15",
            "quantity": 10,
            "price": 2.5,
            "supplier_id": supplier_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_routes_served_at_root_and_under_api() {
    let app = app().await;

    for uri in ["/health", "/api/health"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    let supplier_id = add_supplier(&app, "MedSupply Co.").await;
    let id = add_medicine(&app, "Paracetamol 500mg", supplier_id).await;

    for uri in ["/medicines", "/api/medicines"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    let (status, body) = send(&app, Method::GET, &format!("/medicines/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["supplier_name"], "MedSupply Co.");

    let (status, body) = send(&app, Method::GET, "/suppliers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "MedSupply Co.");
}

#[tokio::test]
async fn test_update_and_delete_through_router() {
    let app = app().await;
    let supplier_id = add_supplier(&app, "MedSupply Co.").await;
    let id = add_medicine(&app, "Paracetamol 500mg", supplier_id).await;
    let uri = format!("/api/medicines/{}", id);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({
            "name": "Paracetamol 650mg",
            "company": "PharmaCorp",
            "mfg_date": "2024-01-15",
            "exp_date": "2026-06-15",
            "quantity": "25",
            "price": "3.10",
            "supplier_id": supplier_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Medicine updated successfully" }));

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["name"], "Paracetamol 650mg");
    assert_eq!(body["expiry_date"], "2026-06-15");
    assert_eq!(body["price"], 3.1);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Medicine deleted successfully" }));

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Medicine not found" }));
}

#[tokio::test]
async fn test_static_segments_win_over_id() {
    let app = app().await;
    let supplier_id = add_supplier(&app, "MedSupply Co.").await;
    add_medicine(&app, "Paracetamol 500mg", supplier_id).await;

    let (status, body) = send(&app, Method::GET, "/medicines/search?q=para", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/api/medicines/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/medicines/expiring?days=7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn test_non_integer_id_is_json_not_found() {
    let app = app().await;

    for (method, uri) in [
        (Method::GET, "/medicines/abc"),
        (Method::DELETE, "/api/medicines/1.5"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string(), "{}", body);
    }
}

#[tokio::test]
async fn test_bad_bodies_are_json_bad_request() {
    let app = app().await;

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/medicines")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, _, body) = send_request(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid JSON body" }));

    let not_json = Request::builder()
        .method(Method::POST)
        .uri("/api/suppliers")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("name=MedSupply"))
        .unwrap();
    let (status, _, body) = send_request(&app, not_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid JSON body" }));

    let (status, body) = send(&app, Method::POST, "/suppliers", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_repeated_query_keys_use_first_value() {
    let app = app().await;
    let supplier_id = add_supplier(&app, "Ärzte Großhandel").await;
    add_medicine(&app, "Écorce", supplier_id).await;

    // "ärzte" percent-encoded; the second q would match nothing
    let (status, body) = send(
        &app,
        Method::GET,
        "/medicines/search?q=%C3%A4rzte&q=zzz",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Écorce");

    let (status, body) = send(&app, Method::GET, "/medicines/expiring?days=1&days=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn test_current_and_legacy_names_together() {
    let app = app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/suppliers",
        Some(json!({ "name": "a", "supplier_name": "b", "contact": "c" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/suppliers", None).await;
    assert_eq!(body[0]["name"], "a");
}

#[tokio::test]
async fn test_cors_allows_cross_origin_calls() {
    let app = app().await;

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/medicines")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send_request(&app, preflight).await;
    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));

    let get = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:8080")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send_request(&app, get).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
