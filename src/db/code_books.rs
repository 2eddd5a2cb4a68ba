use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{CodeBook, CodeSnippet};

/// Whether an append created a new book or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Created,
    Appended,
}

/// Append a snippet to the book for `email`, creating the book if needed.
///
/// One statement: concurrent appends for the same email are serialized by
/// the row lock and never lose a snippet or create a second book.
pub async fn append_snippet(
    pool: &PgPool,
    email: &str,
    snippet: &CodeSnippet,
) -> Result<AppendOutcome, sqlx::Error> {
    // xmax is 0 only on a freshly inserted row version
    let created: bool = sqlx::query_scalar(
        "INSERT INTO code_books (email, snippets)
         VALUES ($1, jsonb_build_array($2::jsonb))
         ON CONFLICT (email) DO UPDATE
             SET snippets = code_books.snippets || EXCLUDED.snippets,
                 updated_at = now()
         RETURNING (xmax = 0)",
    )
    .bind(email)
    .bind(Json(snippet))
    .fetch_one(pool)
    .await?;

    Ok(if created {
        AppendOutcome::Created
    } else {
        AppendOutcome::Appended
    })
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<CodeBook>, sqlx::Error> {
    sqlx::query_as::<_, CodeBook>("SELECT * FROM code_books WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}
