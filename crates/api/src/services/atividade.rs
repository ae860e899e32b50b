//! Atividade service.

use async_trait::async_trait;
use gestao_core::types::DbId;
use gestao_db::models::atividade::{Atividade, AtividadeInput};
use gestao_db::repositories::{AtividadeRepo, ProjetoRepo};
use gestao_db::DbPool;

use super::{not_found, parent_violation, ChildResource, Resource};
use crate::error::AppResult;

const PARENT: &str = "Projeto";

pub struct AtividadeService;

async fn ensure_projeto_exists(pool: &DbPool, projeto_id: DbId) -> AppResult<()> {
    if ProjetoRepo::exists(pool, projeto_id).await? {
        Ok(())
    } else {
        Err(not_found(PARENT, projeto_id))
    }
}

#[async_trait]
impl Resource for AtividadeService {
    const ENTITY: &'static str = "Atividade";

    type Record = Atividade;
    type Input = AtividadeInput;

    async fn list(pool: &DbPool) -> AppResult<Vec<Atividade>> {
        Ok(AtividadeRepo::list(pool).await?)
    }

    async fn find(pool: &DbPool, id: DbId) -> AppResult<Option<Atividade>> {
        Ok(AtividadeRepo::find_by_id(pool, id).await?)
    }

    async fn create(pool: &DbPool, input: AtividadeInput) -> AppResult<Atividade> {
        let fields = input.validate()?;
        ensure_projeto_exists(pool, fields.projeto_id).await?;

        let atividade = AtividadeRepo::create(pool, &fields)
            .await
            .map_err(|e| parent_violation(e, PARENT, fields.projeto_id))?;

        tracing::info!(
            atividade_id = atividade.id,
            projeto_id = atividade.projeto_id,
            prazo = %atividade.prazo,
            "Atividade created"
        );
        Ok(atividade)
    }

    /// `data_criacao` is not part of [`AtividadeInput`] and is kept as stored.
    async fn update(pool: &DbPool, id: DbId, input: AtividadeInput) -> AppResult<Atividade> {
        Self::get(pool, id).await?;
        let fields = input.validate()?;
        ensure_projeto_exists(pool, fields.projeto_id).await?;

        let atividade = AtividadeRepo::update(pool, id, &fields)
            .await
            .map_err(|e| parent_violation(e, PARENT, fields.projeto_id))?
            .ok_or_else(|| not_found(Self::ENTITY, id))?;

        tracing::info!(atividade_id = id, "Atividade updated");
        Ok(atividade)
    }

    async fn delete(pool: &DbPool, id: DbId) -> AppResult<bool> {
        let deleted = AtividadeRepo::delete(pool, id).await?;
        if deleted {
            tracing::info!(atividade_id = id, "Atividade deleted");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ChildResource for AtividadeService {
    async fn list_by_parent(pool: &DbPool, projeto_id: DbId) -> AppResult<Vec<Atividade>> {
        Ok(AtividadeRepo::list_by_projeto(pool, projeto_id).await?)
    }
}
