//! Medicine endpoints.
//!
//! Writes validate the whole payload before touching the database, so a
//! rejected request never leaves a partial row behind.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use medvault_core::validation::{normalize_search_query, parse_window_days, validate_medicine};
use medvault_core::{
    CoreError, ExpiringMedicine, MedicinePayload, MedicineWithSupplier,
    DEFAULT_EXPIRY_WINDOW_DAYS,
};
use tracing::{debug, info};

use super::{Created, Message};
use crate::error::ApiError;
use crate::AppState;

/// Raw query string as ordered key/value pairs. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// Query string of `GET /medicines/search`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The first `q` wins when the key is repeated.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        SearchParams {
            q: first_value(pairs, "q"),
        }
    }
}

/// Query string of `GET /medicines/expiring`.
///
/// `days` stays a string so a bad value falls back to the default instead of
/// rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExpiringParams {
    pub days: Option<String>,
}

impl ExpiringParams {
    /// The first `days` wins when the key is repeated.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        ExpiringParams {
            days: first_value(pairs, "days"),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// `GET /medicines`
pub async fn list_medicines(
    State(state): State<AppState>,
) -> Result<Json<Vec<MedicineWithSupplier>>, ApiError> {
    debug!("list_medicines");
    Ok(Json(state.db.medicines().list().await?))
}

/// `GET /medicines/{id}`
pub async fn get_medicine(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MedicineWithSupplier>, ApiError> {
    let Path(id) = id?;
    debug!(id, "get_medicine");

    state
        .db
        .medicines()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::MedicineNotFound(id).into())
}

/// `GET /medicines/search?q=`
pub async fn search_medicines(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<MedicineWithSupplier>>, ApiError> {
    let Query(pairs) = query?;
    let params = SearchParams::from_pairs(&pairs);
    let query = normalize_search_query(params.q.as_deref());
    debug!(query = %query, "search_medicines");

    Ok(Json(state.db.medicines().search(&query).await?))
}

/// `GET /medicines/expiring?days=`
pub async fn expiring_medicines(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<ExpiringMedicine>>, ApiError> {
    let Query(pairs) = query?;
    let params = ExpiringParams::from_pairs(&pairs);
    let days = parse_window_days(params.days.as_deref(), DEFAULT_EXPIRY_WINDOW_DAYS);
    let today = Local::now().date_naive();
    debug!(days, %today, "expiring_medicines");

    Ok(Json(state.db.medicines().expiring(today, days).await?))
}

/// `POST /medicines`
pub async fn create_medicine(
    State(state): State<AppState>,
    payload: Result<Json<MedicinePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    debug!("create_medicine");

    let Json(payload) = payload?;
    let medicine = validate_medicine(&payload)?;
    let id = state.db.medicines().insert(&medicine).await?;

    info!(id, name = %medicine.name, "Medicine created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Medicine added successfully".to_string(),
            id,
        }),
    ))
}

/// `PUT /medicines/{id}`
pub async fn update_medicine(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MedicinePayload>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id?;
    debug!(id, "update_medicine");

    let Json(payload) = payload?;
    let medicine = validate_medicine(&payload)?;
    state.db.medicines().update(id, &medicine).await?;

    info!(id, "Medicine updated");
    Ok(Json(Message::new("Medicine updated successfully")))
}

/// `DELETE /medicines/{id}`
pub async fn delete_medicine(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id?;
    debug!(id, "delete_medicine");

    state.db.medicines().delete(id).await?;

    info!(id, "Medicine deleted");
    Ok(Json(Message::new("Medicine deleted successfully")))
}
