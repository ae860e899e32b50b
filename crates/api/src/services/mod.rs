//! Data access contract shared by the REST and GraphQL layers.
//!
//! Each entity gets a zero-sized service implementing [`Resource`] (and
//! [`ChildResource`] when it has an owning parent). Services run field
//! validation, check store-backed rules (email uniqueness, parent
//! existence), then delegate to the repositories in `gestao_db`.

pub mod atividade;
pub mod cliente;
pub mod projeto;

use async_trait::async_trait;
use gestao_core::error::CoreError;
use gestao_core::types::DbId;
use gestao_db::models::FillFrom;
use gestao_db::DbPool;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

pub use atividade::AtividadeService;
pub use cliente::ClienteService;
pub use projeto::ProjetoService;

/// Uniform CRUD operations for one entity type.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Entity name used in not-found errors and logs.
    const ENTITY: &'static str;

    type Record: Serialize + Send + 'static;
    type Input: DeserializeOwned + FillFrom<Self::Record> + Send + 'static;

    /// All records in storage order.
    async fn list(pool: &DbPool) -> AppResult<Vec<Self::Record>>;

    async fn find(pool: &DbPool, id: DbId) -> AppResult<Option<Self::Record>>;

    /// Fetch a record, failing with `NotFound` if it does not exist.
    async fn get(pool: &DbPool, id: DbId) -> AppResult<Self::Record> {
        Self::find(pool, id)
            .await?
            .ok_or_else(|| not_found(Self::ENTITY, id))
    }

    /// Validate and persist a new record.
    async fn create(pool: &DbPool, input: Self::Input) -> AppResult<Self::Record>;

    /// Validate and replace every writable field of an existing record.
    async fn update(pool: &DbPool, id: DbId, input: Self::Input) -> AppResult<Self::Record>;

    /// Apply the supplied fields onto the stored record, keeping the rest,
    /// and save the result through the same validation as [`Self::update`].
    async fn partial_update(pool: &DbPool, id: DbId, patch: Self::Input) -> AppResult<Self::Record> {
        let current = Self::get(pool, id).await?;
        let input = patch.fill_from(&current);
        Self::update(pool, id, input).await
    }

    /// Remove a record and everything it owns. `Ok(false)` when absent.
    async fn delete(pool: &DbPool, id: DbId) -> AppResult<bool>;
}

/// Entities owned by a parent record.
#[async_trait]
pub trait ChildResource: Resource {
    /// Records owned by `parent_id`. Empty both when the parent has no
    /// children and when the parent does not exist.
    async fn list_by_parent(pool: &DbPool, parent_id: DbId) -> AppResult<Vec<Self::Record>>;
}

pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Turn a foreign-key violation on insert/update into a not-found error for
/// the referenced parent. Covers a parent deleted between check and write.
pub(crate) fn parent_violation(err: sqlx::Error, parent: &'static str, parent_id: DbId) -> AppError {
    if err
        .as_database_error()
        .is_some_and(|e| e.is_foreign_key_violation())
    {
        not_found(parent, parent_id)
    } else {
        AppError::Database(err)
    }
}
