//! Repository for the `atividades` table.

use gestao_core::types::DbId;
use sqlx::PgPool;

use crate::models::atividade::{Atividade, AtividadeFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, projeto_id, descricao, data_criacao, prazo";

/// Provides CRUD operations for activities.
pub struct AtividadeRepo;

impl AtividadeRepo {
    /// Insert a new activity. `data_criacao` is filled in by the database.
    pub async fn create(pool: &PgPool, input: &AtividadeFields) -> Result<Atividade, sqlx::Error> {
        let query = format!(
            "INSERT INTO atividades (projeto_id, descricao, prazo)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Atividade>(&query)
            .bind(input.projeto_id)
            .bind(&input.descricao)
            .bind(input.prazo)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Atividade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM atividades WHERE id = $1");
        sqlx::query_as::<_, Atividade>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all activities in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Atividade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM atividades ORDER BY id");
        sqlx::query_as::<_, Atividade>(&query).fetch_all(pool).await
    }

    /// List activities of a project. Empty when the project has none or
    /// does not exist.
    pub async fn list_by_projeto(
        pool: &PgPool,
        projeto_id: DbId,
    ) -> Result<Vec<Atividade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM atividades WHERE projeto_id = $1 ORDER BY id");
        sqlx::query_as::<_, Atividade>(&query)
            .bind(projeto_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the writable fields of an activity. `data_criacao` is left
    /// untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AtividadeFields,
    ) -> Result<Option<Atividade>, sqlx::Error> {
        let query = format!(
            "UPDATE atividades SET
                projeto_id = $2,
                descricao = $3,
                prazo = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Atividade>(&query)
            .bind(id)
            .bind(input.projeto_id)
            .bind(&input.descricao)
            .bind(input.prazo)
            .fetch_optional(pool)
            .await
    }

    /// Delete an activity. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM atividades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
