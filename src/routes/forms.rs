use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::FormSubmission;
use crate::state::SharedState;
use crate::submission::{parser, payload};

#[derive(Deserialize)]
pub struct UpdateCheckedRequest {
    pub id: Option<String>,
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    let raw = parser::parse_body(&headers, body?)
        .await
        .map_err(AppError::BadRequest)?;

    let fields = payload::normalize(raw).map_err(AppError::BadRequest)?;

    let submission = db::forms::create(&state.pool, &fields)
        .await
        .map_err(AppError::store("Failed to submit form"))?;

    tracing::info!("Stored form submission {}", submission.id);

    Ok(Json(json!({
        "message": "Form submitted successfully, View More Courses in Courses Section...",
    })))
}

pub async fn list_unchecked(
    State(state): State<SharedState>,
) -> Result<Json<Vec<FormSubmission>>, AppError> {
    let submissions = db::forms::list_unchecked(&state.pool)
        .await
        .map_err(AppError::store("Failed to fetch data"))?;
    Ok(Json(submissions))
}

pub async fn update_checked(
    State(state): State<SharedState>,
    payload: Result<Json<UpdateCheckedRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;

    let raw_id = req
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("id is required"))?;
    let id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| AppError::bad_request("id is not a valid identifier"))?;

    let matched = db::forms::mark_checked(&state.pool, id)
        .await
        .map_err(AppError::store("Failed to update checked status"))?;

    if matched == 0 {
        tracing::debug!("updateChecked matched no form submission for {id}");
    }

    Ok(Json(json!({ "message": "Checked status updated successfully" })))
}
