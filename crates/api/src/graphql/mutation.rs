//! GraphQL mutations. Create and update return the affected record wrapped
//! in a payload; delete returns `{ success }`.

use async_graphql::{Context, Object, Result, SimpleObject, ID};
use gestao_db::DbPool;

use super::error::{does_not_exist, parse_id, to_graphql_error};
use super::inputs::{AtividadeInput, ClienteInput, ProjetoInput};
use super::types::{AtividadeType, ClienteType, ProjetoType};
use crate::services::{AtividadeService, ClienteService, ProjetoService, Resource};

#[derive(SimpleObject)]
pub struct ClientePayload {
    pub cliente: ClienteType,
}

#[derive(SimpleObject)]
pub struct ProjetoPayload {
    pub projeto: ProjetoType,
}

#[derive(SimpleObject)]
pub struct AtividadePayload {
    pub atividade: AtividadeType,
}

/// Result of a delete. `success` is `false` when nothing matched the id.
#[derive(SimpleObject)]
pub struct DeletePayload {
    pub success: bool,
}

/// Delete through `R`, reporting a missing or malformed id as `success: false`.
async fn delete_by_id<R: Resource>(ctx: &Context<'_>, id: &ID) -> Result<DeletePayload> {
    let pool = ctx.data::<DbPool>()?;
    let success = match parse_id(id) {
        Some(id) => R::delete(pool, id).await.map_err(to_graphql_error)?,
        None => false,
    };
    Ok(DeletePayload { success })
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // -- Cliente --------------------------------------------------------------

    async fn create_cliente(&self, ctx: &Context<'_>, input: ClienteInput) -> Result<ClientePayload> {
        let pool = ctx.data::<DbPool>()?;
        let cliente = ClienteService::create(pool, input.into())
            .await
            .map_err(to_graphql_error)?;
        Ok(ClientePayload {
            cliente: ClienteType(cliente),
        })
    }

    async fn update_cliente(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ClienteInput,
    ) -> Result<ClientePayload> {
        let pool = ctx.data::<DbPool>()?;
        let id = parse_id(&id).ok_or_else(|| does_not_exist("Cliente"))?;
        let cliente = ClienteService::update(pool, id, input.into())
            .await
            .map_err(to_graphql_error)?;
        Ok(ClientePayload {
            cliente: ClienteType(cliente),
        })
    }

    async fn delete_cliente(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        delete_by_id::<ClienteService>(ctx, &id).await
    }

    // -- Projeto --------------------------------------------------------------

    async fn create_projeto(&self, ctx: &Context<'_>, input: ProjetoInput) -> Result<ProjetoPayload> {
        let pool = ctx.data::<DbPool>()?;
        let projeto = ProjetoService::create(pool, input.try_into()?)
            .await
            .map_err(to_graphql_error)?;
        Ok(ProjetoPayload {
            projeto: ProjetoType(projeto),
        })
    }

    async fn update_projeto(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ProjetoInput,
    ) -> Result<ProjetoPayload> {
        let pool = ctx.data::<DbPool>()?;
        let id = parse_id(&id).ok_or_else(|| does_not_exist("Projeto"))?;
        let projeto = ProjetoService::update(pool, id, input.try_into()?)
            .await
            .map_err(to_graphql_error)?;
        Ok(ProjetoPayload {
            projeto: ProjetoType(projeto),
        })
    }

    async fn delete_projeto(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        delete_by_id::<ProjetoService>(ctx, &id).await
    }

    // -- Atividade ------------------------------------------------------------

    async fn create_atividade(
        &self,
        ctx: &Context<'_>,
        input: AtividadeInput,
    ) -> Result<AtividadePayload> {
        let pool = ctx.data::<DbPool>()?;
        let atividade = AtividadeService::create(pool, input.try_into()?)
            .await
            .map_err(to_graphql_error)?;
        Ok(AtividadePayload {
            atividade: AtividadeType(atividade),
        })
    }

    async fn update_atividade(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: AtividadeInput,
    ) -> Result<AtividadePayload> {
        let pool = ctx.data::<DbPool>()?;
        let id = parse_id(&id).ok_or_else(|| does_not_exist("Atividade"))?;
        let atividade = AtividadeService::update(pool, id, input.try_into()?)
            .await
            .map_err(to_graphql_error)?;
        Ok(AtividadePayload {
            atividade: AtividadeType(atividade),
        })
    }

    async fn delete_atividade(&self, ctx: &Context<'_>, id: ID) -> Result<DeletePayload> {
        delete_by_id::<AtividadeService>(ctx, &id).await
    }
}
