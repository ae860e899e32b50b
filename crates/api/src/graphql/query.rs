//! Read-only GraphQL queries.

use async_graphql::{Context, Object, Result};
use gestao_core::types::DbId;
use gestao_db::DbPool;

use super::error::{exception_error, to_graphql_error};
use super::types::{AtividadeType, ClienteType, ProjetoType};
use crate::services::{
    AtividadeService, ChildResource, ClienteService, ProjetoService, Resource,
};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    // -- Cliente --------------------------------------------------------------

    /// All clients.
    async fn all_clientes(&self, ctx: &Context<'_>) -> Result<Vec<ClienteType>> {
        let pool = ctx.data::<DbPool>()?;
        let clientes = ClienteService::list(pool).await.map_err(to_graphql_error)?;
        Ok(clientes.into_iter().map(ClienteType).collect())
    }

    /// A client by id. Fails with "Cliente does not exist." when absent.
    async fn get_cliente(&self, ctx: &Context<'_>, id: DbId) -> Result<ClienteType> {
        let pool = ctx.data::<DbPool>()?;
        let cliente = ClienteService::get(pool, id).await.map_err(to_graphql_error)?;
        Ok(ClienteType(cliente))
    }

    // -- Projeto --------------------------------------------------------------

    async fn all_projetos(&self, ctx: &Context<'_>) -> Result<Vec<ProjetoType>> {
        let pool = ctx.data::<DbPool>()?;
        let projetos = ProjetoService::list(pool).await.map_err(to_graphql_error)?;
        Ok(projetos.into_iter().map(ProjetoType).collect())
    }

    async fn get_projeto(&self, ctx: &Context<'_>, id: DbId) -> Result<ProjetoType> {
        let pool = ctx.data::<DbPool>()?;
        let projeto = ProjetoService::get(pool, id).await.map_err(to_graphql_error)?;
        Ok(ProjetoType(projeto))
    }

    /// Projects of a client; empty when the client has none or does not exist.
    async fn get_projetos_by_cliente_id(
        &self,
        ctx: &Context<'_>,
        cliente_id: DbId,
    ) -> Result<Vec<ProjetoType>> {
        let pool = ctx.data::<DbPool>()?;
        let projetos = ProjetoService::list_by_parent(pool, cliente_id)
            .await
            .map_err(exception_error)?;
        Ok(projetos.into_iter().map(ProjetoType).collect())
    }

    // -- Atividade ------------------------------------------------------------

    async fn all_atividades(&self, ctx: &Context<'_>) -> Result<Vec<AtividadeType>> {
        let pool = ctx.data::<DbPool>()?;
        let atividades = AtividadeService::list(pool).await.map_err(to_graphql_error)?;
        Ok(atividades.into_iter().map(AtividadeType).collect())
    }

    async fn get_atividade(&self, ctx: &Context<'_>, id: DbId) -> Result<AtividadeType> {
        let pool = ctx.data::<DbPool>()?;
        let atividade = AtividadeService::get(pool, id).await.map_err(to_graphql_error)?;
        Ok(AtividadeType(atividade))
    }

    /// Activities of a project; empty when the project has none or does not exist.
    async fn get_atividades_by_projeto_id(
        &self,
        ctx: &Context<'_>,
        projeto_id: DbId,
    ) -> Result<Vec<AtividadeType>> {
        let pool = ctx.data::<DbPool>()?;
        let atividades = AtividadeService::list_by_parent(pool, projeto_id)
            .await
            .map_err(exception_error)?;
        Ok(atividades.into_iter().map(AtividadeType).collect())
    }
}
