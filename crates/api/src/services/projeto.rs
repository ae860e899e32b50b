//! Projeto service.

use async_trait::async_trait;
use gestao_core::types::DbId;
use gestao_db::models::projeto::{Projeto, ProjetoInput};
use gestao_db::repositories::{ClienteRepo, ProjetoRepo};
use gestao_db::DbPool;

use super::{not_found, parent_violation, ChildResource, Resource};
use crate::error::AppResult;

const PARENT: &str = "Cliente";

pub struct ProjetoService;

async fn ensure_cliente_exists(pool: &DbPool, cliente_id: DbId) -> AppResult<()> {
    if ClienteRepo::exists(pool, cliente_id).await? {
        Ok(())
    } else {
        Err(not_found(PARENT, cliente_id))
    }
}

#[async_trait]
impl Resource for ProjetoService {
    const ENTITY: &'static str = "Projeto";

    type Record = Projeto;
    type Input = ProjetoInput;

    async fn list(pool: &DbPool) -> AppResult<Vec<Projeto>> {
        Ok(ProjetoRepo::list(pool).await?)
    }

    async fn find(pool: &DbPool, id: DbId) -> AppResult<Option<Projeto>> {
        Ok(ProjetoRepo::find_by_id(pool, id).await?)
    }

    async fn create(pool: &DbPool, input: ProjetoInput) -> AppResult<Projeto> {
        let fields = input.validate()?;
        ensure_cliente_exists(pool, fields.cliente_id).await?;

        let projeto = ProjetoRepo::create(pool, &fields)
            .await
            .map_err(|e| parent_violation(e, PARENT, fields.cliente_id))?;

        tracing::info!(
            projeto_id = projeto.id,
            cliente_id = projeto.cliente_id,
            status = %projeto.status,
            "Projeto created"
        );
        Ok(projeto)
    }

    async fn update(pool: &DbPool, id: DbId, input: ProjetoInput) -> AppResult<Projeto> {
        Self::get(pool, id).await?;
        let fields = input.validate()?;
        ensure_cliente_exists(pool, fields.cliente_id).await?;

        let projeto = ProjetoRepo::update(pool, id, &fields)
            .await
            .map_err(|e| parent_violation(e, PARENT, fields.cliente_id))?
            .ok_or_else(|| not_found(Self::ENTITY, id))?;

        tracing::info!(projeto_id = id, status = %projeto.status, "Projeto updated");
        Ok(projeto)
    }

    async fn delete(pool: &DbPool, id: DbId) -> AppResult<bool> {
        let deleted = ProjetoRepo::delete(pool, id).await?;
        if deleted {
            tracing::info!(projeto_id = id, "Projeto deleted with its atividades");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ChildResource for ProjetoService {
    async fn list_by_parent(pool: &DbPool, cliente_id: DbId) -> AppResult<Vec<Projeto>> {
        Ok(ProjetoRepo::list_by_cliente(pool, cliente_id).await?)
    }
}
