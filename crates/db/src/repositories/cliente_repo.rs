//! Repository for the `clientes` table.

use gestao_core::types::DbId;
use sqlx::PgPool;

use crate::models::cliente::{Cliente, ClienteFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, email, telefone";

/// Name of the unique constraint on `clientes.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "uq_clientes_email";

/// Provides CRUD operations for clients.
pub struct ClienteRepo;

impl ClienteRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &ClienteFields) -> Result<Cliente, sqlx::Error> {
        let query = format!(
            "INSERT INTO clientes (nome, email, telefone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.telefone)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clientes WHERE id = $1");
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a client with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clientes WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether another client already uses `email` (exact match).
    ///
    /// `exclude_id` skips the client being updated.
    pub async fn email_taken(
        pool: &PgPool,
        email: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM clientes
                WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// List all clients in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clientes ORDER BY id");
        sqlx::query_as::<_, Cliente>(&query).fetch_all(pool).await
    }

    /// Replace every writable field of a client.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ClienteFields,
    ) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!(
            "UPDATE clientes SET
                nome = $2,
                email = $3,
                telefone = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.telefone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client and, through `ON DELETE CASCADE`, its projects and
    /// their activities in one statement. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(cliente_id = id, rows = result.rows_affected(), "Delete clientes");
        Ok(result.rows_affected() > 0)
    }
}
