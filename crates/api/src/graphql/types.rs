//! GraphQL object types.
//!
//! Each type wraps its database row and resolves relations lazily, so
//! `cliente { projetos { atividades { ... } } }` works at any depth.

use async_graphql::{Context, Object, Result, ID};
use gestao_core::types::{DbId, Timestamp};
use gestao_db::models::atividade::Atividade;
use gestao_db::models::cliente::Cliente;
use gestao_db::models::projeto::Projeto;
use gestao_db::DbPool;

use super::error::to_graphql_error;
use super::scalars::Date;
use crate::services::{
    AtividadeService, ChildResource, ClienteService, ProjetoService, Resource,
};

fn to_id(id: DbId) -> ID {
    ID(id.to_string())
}

// ---------------------------------------------------------------------------
// Cliente
// ---------------------------------------------------------------------------

pub struct ClienteType(pub Cliente);

#[Object]
impl ClienteType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn nome(&self) -> &str {
        &self.0.nome
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn telefone(&self) -> Option<&str> {
        self.0.telefone.as_deref()
    }

    /// Projects owned by this client.
    async fn projetos(&self, ctx: &Context<'_>) -> Result<Vec<ProjetoType>> {
        let pool = ctx.data::<DbPool>()?;
        let projetos = ProjetoService::list_by_parent(pool, self.0.id)
            .await
            .map_err(to_graphql_error)?;
        Ok(projetos.into_iter().map(ProjetoType).collect())
    }
}

// ---------------------------------------------------------------------------
// Projeto
// ---------------------------------------------------------------------------

pub struct ProjetoType(pub Projeto);

#[Object]
impl ProjetoType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn nome(&self) -> &str {
        &self.0.nome
    }

    async fn descricao(&self) -> &str {
        &self.0.descricao
    }

    /// One of `em_andamento`, `concluido`, `pausado`.
    async fn status(&self) -> &'static str {
        self.0.status.as_str()
    }

    /// The owning client.
    async fn cliente(&self, ctx: &Context<'_>) -> Result<ClienteType> {
        let pool = ctx.data::<DbPool>()?;
        let cliente = ClienteService::get(pool, self.0.cliente_id)
            .await
            .map_err(to_graphql_error)?;
        Ok(ClienteType(cliente))
    }

    /// Activities of this project.
    async fn atividades(&self, ctx: &Context<'_>) -> Result<Vec<AtividadeType>> {
        let pool = ctx.data::<DbPool>()?;
        let atividades = AtividadeService::list_by_parent(pool, self.0.id)
            .await
            .map_err(to_graphql_error)?;
        Ok(atividades.into_iter().map(AtividadeType).collect())
    }
}

// ---------------------------------------------------------------------------
// Atividade
// ---------------------------------------------------------------------------

pub struct AtividadeType(pub Atividade);

#[Object]
impl AtividadeType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn descricao(&self) -> &str {
        &self.0.descricao
    }

    async fn data_criacao(&self) -> Timestamp {
        self.0.data_criacao
    }

    async fn prazo(&self) -> Date {
        Date(self.0.prazo)
    }

    /// The owning project.
    async fn projeto(&self, ctx: &Context<'_>) -> Result<ProjetoType> {
        let pool = ctx.data::<DbPool>()?;
        let projeto = ProjetoService::get(pool, self.0.projeto_id)
            .await
            .map_err(to_graphql_error)?;
        Ok(ProjetoType(projeto))
    }
}
