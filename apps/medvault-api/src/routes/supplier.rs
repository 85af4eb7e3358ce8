//! Supplier endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medvault_core::validation::validate_supplier;
use medvault_core::{Supplier, SupplierPayload};
use tracing::{debug, info};

use super::Created;
use crate::error::ApiError;
use crate::AppState;

/// `GET /suppliers`
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    debug!("list_suppliers");
    Ok(Json(state.db.suppliers().list().await?))
}

/// `POST /suppliers`
pub async fn create_supplier(
    State(state): State<AppState>,
    payload: Result<Json<SupplierPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    debug!("create_supplier");

    let Json(payload) = payload?;
    let supplier = validate_supplier(&payload)?;
    let id = state.db.suppliers().insert(&supplier).await?;

    info!(id, name = %supplier.name, "Supplier created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Supplier added successfully".to_string(),
            id,
        }),
    ))
}
