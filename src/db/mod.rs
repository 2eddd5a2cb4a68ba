pub mod code_books;
pub mod forms;

use sqlx::PgPool;

/// Round-trip a trivial query to prove the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
