//! Pack persistence operations.
//!
//! Packs are stored whole, as a JSONB document keyed by id, in the `packs`
//! table. `add` is an upsert, so a pack re-registering itself on startup
//! replaces its previous registration.

use flyte_pack::{Pack, PackRepository, RepositoryError};
use sqlx::PgPool;

use super::DbError;

impl From<DbError> for RepositoryError {
    fn from(err: DbError) -> Self {
        RepositoryError::storage(err)
    }
}

fn to_document(pack: &Pack) -> Result<serde_json::Value, DbError> {
    Ok(serde_json::to_value(pack)?)
}

fn from_document(document: serde_json::Value) -> Result<Pack, DbError> {
    Ok(serde_json::from_value(document)?)
}

/// [`PackRepository`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgPackRepository {
    pool: PgPool,
}

impl PgPackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[axum::async_trait]
impl PackRepository for PgPackRepository {
    async fn add(&self, pack: Pack) -> Result<(), RepositoryError> {
        let document = to_document(&pack)?;

        sqlx::query(
            "INSERT INTO packs (id, document, created_at, updated_at)
             VALUES ($1, $2, NOW(), NOW())
             ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document, updated_at = NOW()",
        )
        .bind(&pack.id)
        .bind(&document)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM packs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Pack, RepositoryError> {
        let document: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT document FROM packs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(DbError::from)?;

        let document = document.ok_or(RepositoryError::NotFound)?;
        Ok(from_document(document)?)
    }

    async fn find_all(&self) -> Result<Vec<Pack>, RepositoryError> {
        let documents: Vec<serde_json::Value> =
            sqlx::query_scalar("SELECT document FROM packs ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(DbError::from)?;

        documents
            .into_iter()
            .map(|document| from_document(document).map_err(RepositoryError::from))
            .collect()
    }
}
