use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// Liveness only; never touches the store.
pub async fn health() -> &'static str {
    "ok"
}

pub async fn check_database(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    db::ping(&state.pool)
        .await
        .map_err(AppError::store("Failed to connect to the database"))?;
    Ok(Json(json!({ "message": "Database connection successful" })))
}
