//! Cliente service.

use async_trait::async_trait;
use gestao_core::cliente::EMAIL_TAKEN_MESSAGE;
use gestao_core::error::CoreError;
use gestao_core::types::DbId;
use gestao_db::models::cliente::{Cliente, ClienteInput};
use gestao_db::repositories::cliente_repo::EMAIL_UNIQUE_CONSTRAINT;
use gestao_db::repositories::ClienteRepo;
use gestao_db::DbPool;

use super::{not_found, Resource};
use crate::error::{AppError, AppResult};

pub struct ClienteService;

/// Reject `email` if another client already uses it.
async fn ensure_email_available(
    pool: &DbPool,
    email: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if ClienteRepo::email_taken(pool, email, exclude_id).await? {
        return Err(CoreError::invalid_field("email", EMAIL_TAKEN_MESSAGE).into());
    }
    Ok(())
}

/// A concurrent writer can claim the email after the pre-check; report the
/// constraint violation the same way.
fn email_violation(err: sqlx::Error) -> AppError {
    let is_email_conflict = err.as_database_error().is_some_and(|e| {
        e.is_unique_violation() && e.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
    });
    if is_email_conflict {
        CoreError::invalid_field("email", EMAIL_TAKEN_MESSAGE).into()
    } else {
        AppError::Database(err)
    }
}

#[async_trait]
impl Resource for ClienteService {
    const ENTITY: &'static str = "Cliente";

    type Record = Cliente;
    type Input = ClienteInput;

    async fn list(pool: &DbPool) -> AppResult<Vec<Cliente>> {
        Ok(ClienteRepo::list(pool).await?)
    }

    async fn find(pool: &DbPool, id: DbId) -> AppResult<Option<Cliente>> {
        Ok(ClienteRepo::find_by_id(pool, id).await?)
    }

    async fn create(pool: &DbPool, input: ClienteInput) -> AppResult<Cliente> {
        let fields = input.validate()?;
        ensure_email_available(pool, &fields.email, None).await?;

        let cliente = ClienteRepo::create(pool, &fields)
            .await
            .map_err(email_violation)?;

        tracing::info!(cliente_id = cliente.id, "Cliente created");
        Ok(cliente)
    }

    async fn update(pool: &DbPool, id: DbId, input: ClienteInput) -> AppResult<Cliente> {
        Self::get(pool, id).await?;
        let fields = input.validate()?;
        ensure_email_available(pool, &fields.email, Some(id)).await?;

        let cliente = ClienteRepo::update(pool, id, &fields)
            .await
            .map_err(email_violation)?
            .ok_or_else(|| not_found(Self::ENTITY, id))?;

        tracing::info!(cliente_id = id, "Cliente updated");
        Ok(cliente)
    }

    async fn delete(pool: &DbPool, id: DbId) -> AppResult<bool> {
        let deleted = ClienteRepo::delete(pool, id).await?;
        if deleted {
            tracing::info!(cliente_id = id, "Cliente deleted with its projetos and atividades");
        }
        Ok(deleted)
    }
}
