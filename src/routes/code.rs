use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::db::code_books::AppendOutcome;
use crate::error::AppError;
use crate::models::CodeSnippet;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SubmitCodeRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
}

#[derive(Deserialize)]
pub struct NamesParams {
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct FullCodeParams {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Treat absent and blank values alike.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn submit(
    State(state): State<SharedState>,
    payload: Result<Json<SubmitCodeRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(req) = payload?;

    let (Some(email), Some(name), Some(language), Some(code)) = (
        present(req.email),
        present(req.name),
        present(req.language),
        present(req.code),
    ) else {
        return Err(AppError::bad_request(
            "email, name, language and code are required",
        ));
    };

    let snippet = CodeSnippet {
        name,
        language,
        code,
        date: Utc::now(),
    };

    let outcome = db::code_books::append_snippet(&state.pool, &email, &snippet)
        .await
        .map_err(AppError::store("Failed to submit code"))?;

    let message = match outcome {
        AppendOutcome::Appended => "Code added to existing user",
        AppendOutcome::Created => "New user created and code added",
    };
    tracing::info!(email = %email, snippet = %snippet.name, "{message}");

    Ok(Json(json!({ "message": message })))
}

pub async fn names_and_languages(
    State(state): State<SharedState>,
    Query(params): Query<NamesParams>,
) -> Result<Response, AppError> {
    let email = present(params.email).ok_or_else(|| AppError::bad_request("email is required"))?;

    let book = db::code_books::find_by_email(&state.pool, &email)
        .await
        .map_err(AppError::store("Failed to fetch code names"))?;

    Ok(match book {
        Some(book) => Json(book.summaries()).into_response(),
        None => Json(json!({ "message": "User not found" })).into_response(),
    })
}

pub async fn full_code(
    State(state): State<SharedState>,
    Query(params): Query<FullCodeParams>,
) -> Result<Response, AppError> {
    let (Some(email), Some(name)) = (present(params.email), present(params.name)) else {
        return Err(AppError::bad_request("email and name are required"));
    };

    let book = db::code_books::find_by_email(&state.pool, &email)
        .await
        .map_err(AppError::store("Failed to fetch code"))?;

    let snippet = book.as_ref().and_then(|b| b.find_snippet(&name));

    Ok(match snippet {
        Some(snippet) => Json(snippet).into_response(),
        None => Json(json!({ "message": "Code not found" })).into_response(),
    })
}
