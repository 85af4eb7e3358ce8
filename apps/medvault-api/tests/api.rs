//! Handler tests against an in-memory database.
//!
//! Handlers are called directly with constructed extractors.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Local};
use serde_json::{json, Value};

use medvault_api::routes::medicine;
use medvault_api::routes::{health, supplier};
use medvault_api::{ApiError, AppState};
use medvault_core::{MedicineInput, MedicinePayload, Money, SupplierPayload};
use medvault_db::{Database, DbConfig};

async fn test_state() -> AppState {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    AppState::new(db)
}

async fn add_supplier(state: &AppState, name: &str) -> i64 {
    let payload: SupplierPayload =
        serde_json::from_value(json!({ "name": name, "contact": "555-0100" })).unwrap();
    let (status, Json(created)) = supplier::create_supplier(State(state.clone()), Ok(Json(payload)))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    created.id
}

fn medicine_body(supplier_id: i64) -> Value {
    json!({
        "name": "Paracetamol 500mg",
        "company": "PharmaCorp",
        "manufacture_date": "2024-01-15",
        "expiry_date": "2026-01-15",
        "quantity": 500,
        "price": 25.50,
        "supplier_id": supplier_id
    })
}

fn payload(body: Value) -> MedicinePayload {
    serde_json::from_value(body).unwrap()
}

async fn create(state: &AppState, body: Value) -> Result<i64, ApiError> {
    medicine::create_medicine(State(state.clone()), Ok(Json(payload(body))))
        .await
        .map(|(_, Json(created))| created.id)
}

async fn medicine_count(state: &AppState) -> i64 {
    state.db.medicines().count().await.unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = health::health_handler().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_and_fetch_medicine() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;

    let (status, Json(created)) = medicine::create_medicine(
        State(state.clone()),
        Ok(Json(payload(medicine_body(supplier_id)))),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.message, "Medicine added successfully");

    let Json(fetched) = medicine::get_medicine(State(state.clone()), Ok(Path(created.id)))
        .await
        .unwrap();

    let body = serde_json::to_value(&fetched).unwrap();
    assert_eq!(body["id"], created.id);
    assert_eq!(body["name"], "Paracetamol 500mg");
    assert_eq!(body["company"], "PharmaCorp");
    assert_eq!(body["manufacture_date"], "2024-01-15");
    assert_eq!(body["expiry_date"], "2026-01-15");
    assert_eq!(body["quantity"], 500);
    assert_eq!(body["price"], 25.5);
    assert_eq!(body["supplier_id"], supplier_id);
    assert_eq!(body["supplier_name"], "MedSupply Co.");
    assert_eq!(body["supplier_contact"], "555-0100");
}

#[tokio::test]
async fn test_legacy_field_names() {
    let state = test_state().await;

    let legacy: SupplierPayload =
        serde_json::from_value(json!({ "supplier_name": "Pharma Distributors", "contact_no": "234" }))
            .unwrap();
    let (_, Json(created)) = supplier::create_supplier(State(state.clone()), Ok(Json(legacy)))
        .await
        .unwrap();

    let id = create(
        &state,
        json!({
            "name": "Aspirin 100mg",
            "company": "Global Meds",
            "mfg_date": "2024-01-05",
            "exp_date": "2025-12-05",
            "quantity": "400",
            "price": "15.25",
            "supplier_id": created.id.to_string()
        }),
    )
    .await
    .unwrap();

    let Json(fetched) = medicine::get_medicine(State(state.clone()), Ok(Path(id)))
        .await
        .unwrap();
    assert_eq!(fetched.medicine.quantity, 400);
    assert_eq!(fetched.medicine.price, Money::from_cents(1525));
    assert_eq!(fetched.supplier_name, "Pharma Distributors");
}

#[tokio::test]
async fn test_negative_quantity_rejected() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;

    let mut body = medicine_body(supplier_id);
    body["quantity"] = json!(-1);

    let err = create(&state, body).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "quantity must be non-negative");
    assert_eq!(medicine_count(&state).await, 0);
}

#[tokio::test]
async fn test_missing_and_invalid_fields() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;

    let mut body = medicine_body(supplier_id);
    body.as_object_mut().unwrap().remove("company");
    let err = create(&state, body).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Missing required field: company");

    let mut body = medicine_body(supplier_id);
    body["price"] = json!("cheap");
    let err = create(&state, body).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);

    let mut body = medicine_body(supplier_id);
    body["expiry_date"] = json!("15/01/2026");
    let err = create(&state, body).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);

    let empty: SupplierPayload = serde_json::from_value(json!({ "name": "  " })).unwrap();
    let err = supplier::create_supplier(State(state.clone()), Ok(Json(empty)))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);

    assert_eq!(medicine_count(&state).await, 0);
}

#[tokio::test]
async fn test_unknown_supplier_rejected() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;

    let err = create(&state, medicine_body(supplier_id + 100))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Database operation failed");
    assert_eq!(medicine_count(&state).await, 0);
}

#[tokio::test]
async fn test_update_medicine() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;
    let id = create(&state, medicine_body(supplier_id)).await.unwrap();

    let mut body = medicine_body(supplier_id);
    body["quantity"] = json!(120);
    let Json(message) = medicine::update_medicine(
        State(state.clone()),
        Ok(Path(id)),
        Ok(Json(payload(body))),
    )
    .await
    .unwrap();
    assert_eq!(message.message, "Medicine updated successfully");

    let Json(fetched) = medicine::get_medicine(State(state.clone()), Ok(Path(id)))
        .await
        .unwrap();
    assert_eq!(fetched.medicine.quantity, 120);
}

#[tokio::test]
async fn test_update_missing_medicine() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;
    let id = create(&state, medicine_body(supplier_id)).await.unwrap();

    let mut body = medicine_body(supplier_id);
    body["name"] = json!("Changed");
    let err = medicine::update_medicine(
        State(state.clone()),
        Ok(Path(id + 1)),
        Ok(Json(payload(body))),
    )
    .await
    .unwrap_err();
    assert_eq!(err, ApiError::not_found("Medicine"));

    let Json(existing) = medicine::get_medicine(State(state.clone()), Ok(Path(id)))
        .await
        .unwrap();
    assert_eq!(existing.medicine.name, "Paracetamol 500mg");
}

#[tokio::test]
async fn test_delete_medicine() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;
    let first = create(&state, medicine_body(supplier_id)).await.unwrap();
    let second = create(&state, medicine_body(supplier_id)).await.unwrap();

    let Json(message) = medicine::delete_medicine(State(state.clone()), Ok(Path(first)))
        .await
        .unwrap();
    assert_eq!(message.message, "Medicine deleted successfully");
    assert_eq!(medicine_count(&state).await, 1);

    let err = medicine::get_medicine(State(state.clone()), Ok(Path(first)))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);

    let err = medicine::delete_medicine(State(state.clone()), Ok(Path(first)))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);

    assert!(medicine::get_medicine(State(state.clone()), Ok(Path(second)))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_and_search() {
    let state = test_state().await;
    let medsupply = add_supplier(&state, "MedSupply Co.").await;
    let global = add_supplier(&state, "Global Pharmaceuticals").await;

    create(&state, medicine_body(medsupply)).await.unwrap();
    let mut body = medicine_body(global);
    body["name"] = json!("Cetirizine 10mg");
    create(&state, body).await.unwrap();

    let Json(suppliers) = supplier::list_suppliers(State(state.clone())).await.unwrap();
    let names: Vec<_> = suppliers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Global Pharmaceuticals", "MedSupply Co."]);

    let Json(all) = medicine::list_medicines(State(state.clone())).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].medicine.name, "Cetirizine 10mg");

    let Json(found) = medicine::search_medicines(
        State(state.clone()),
        Ok(Query(vec![("q".to_string(), "PHARMACEUTICALS".to_string())])),
    )
    .await
    .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].medicine.name, "Cetirizine 10mg");

    let Json(everything) =
        medicine::search_medicines(State(state.clone()), Ok(Query(Vec::new())))
            .await
            .unwrap();
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn test_expiring_window() {
    let state = test_state().await;
    let supplier_id = add_supplier(&state, "MedSupply Co.").await;
    let today = Local::now().date_naive();

    for (name, offset) in [("Today", 0), ("Soon", 10), ("Later", 60), ("Past", -1)] {
        state
            .db
            .medicines()
            .insert(&MedicineInput {
                name: name.to_string(),
                company: "PharmaCorp".to_string(),
                manufacture_date: today - Duration::days(365),
                expiry_date: today + Duration::days(offset),
                quantity: 10,
                price: Money::from_cents(100),
                supplier_id,
            })
            .await
            .unwrap();
    }

    let expiring = |days: Option<&str>| {
        medicine::expiring_medicines(
            State(state.clone()),
            Ok(Query(
                days.map(|d| vec![("days".to_string(), d.to_string())])
                    .unwrap_or_default(),
            )),
        )
    };

    let Json(default_window) = expiring(None).await.unwrap();
    let names: Vec<_> = default_window
        .iter()
        .map(|m| m.medicine.medicine.name.as_str())
        .collect();
    assert_eq!(names, vec!["Today", "Soon"]);
    assert_eq!(default_window[1].days_until_expiry, 10);

    let Json(only_today) = expiring(Some("0")).await.unwrap();
    assert_eq!(only_today.len(), 1);
    assert_eq!(only_today[0].days_until_expiry, 0);

    let Json(wide) = expiring(Some("90")).await.unwrap();
    assert_eq!(wide.len(), 3);

    let Json(fallback) = expiring(Some("soon")).await.unwrap();
    assert_eq!(fallback.len(), 2);

    let Json(negative) = expiring(Some("-5")).await.unwrap();
    assert!(negative.is_empty());
}
