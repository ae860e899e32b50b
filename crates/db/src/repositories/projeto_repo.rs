//! Repository for the `projetos` table.

use gestao_core::types::DbId;
use sqlx::PgPool;

use crate::models::projeto::{Projeto, ProjetoFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, descricao, cliente_id, status";

/// Provides CRUD operations for projects.
pub struct ProjetoRepo;

impl ProjetoRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjetoFields) -> Result<Projeto, sqlx::Error> {
        let query = format!(
            "INSERT INTO projetos (nome, descricao, cliente_id, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Projeto>(&query)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.cliente_id)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Projeto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos WHERE id = $1");
        sqlx::query_as::<_, Projeto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a project with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projetos WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Projeto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos ORDER BY id");
        sqlx::query_as::<_, Projeto>(&query).fetch_all(pool).await
    }

    /// List projects owned by a client. Empty when the client has none or
    /// does not exist.
    pub async fn list_by_cliente(
        pool: &PgPool,
        cliente_id: DbId,
    ) -> Result<Vec<Projeto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos WHERE cliente_id = $1 ORDER BY id");
        sqlx::query_as::<_, Projeto>(&query)
            .bind(cliente_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every writable field of a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjetoFields,
    ) -> Result<Option<Projeto>, sqlx::Error> {
        let query = format!(
            "UPDATE projetos SET
                nome = $2,
                descricao = $3,
                cliente_id = $4,
                status = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Projeto>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.cliente_id)
            .bind(input.status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and its activities. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projetos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(projeto_id = id, rows = result.rows_affected(), "Delete projetos");
        Ok(result.rows_affected() > 0)
    }
}
