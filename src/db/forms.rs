use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::form::FORM_SCHEMA_VERSION;
use crate::models::FormSubmission;

pub async fn create(
    pool: &PgPool,
    data: &Map<String, Value>,
) -> Result<FormSubmission, sqlx::Error> {
    sqlx::query_as::<_, FormSubmission>(
        "INSERT INTO form_submissions (id, data, checked, schema_version)
         VALUES ($1, $2, FALSE, $3) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(Json(data))
    .bind(FORM_SCHEMA_VERSION)
    .fetch_one(pool)
    .await
}

pub async fn list_unchecked(pool: &PgPool) -> Result<Vec<FormSubmission>, sqlx::Error> {
    sqlx::query_as::<_, FormSubmission>(
        "SELECT * FROM form_submissions
         WHERE checked = FALSE
         ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(pool)
    .await
}

/// Flip `checked` to true. Returns the number of rows matched, which may be
/// zero for an unknown id.
pub async fn mark_checked(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE form_submissions SET checked = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
