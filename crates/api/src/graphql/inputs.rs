//! GraphQL input objects and their conversion into service inputs.

use async_graphql::{InputObject, ID};
use gestao_core::atividade::PRAZO_FORMAT;
use gestao_db::models::{atividade, cliente, projeto};

use super::error::{does_not_exist, parse_id};
use super::scalars::Date;

#[derive(Debug, InputObject)]
pub struct ClienteInput {
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
}

impl From<ClienteInput> for cliente::ClienteInput {
    fn from(input: ClienteInput) -> Self {
        Self {
            nome: Some(input.nome),
            email: Some(input.email),
            telefone: input.telefone,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct ProjetoInput {
    pub nome: String,
    pub descricao: Option<String>,
    pub cliente_id: ID,
    /// Defaults to `em_andamento`.
    pub status: Option<String>,
}

impl TryFrom<ProjetoInput> for projeto::ProjetoInput {
    type Error = async_graphql::Error;

    fn try_from(input: ProjetoInput) -> Result<Self, Self::Error> {
        let cliente_id = parse_id(&input.cliente_id).ok_or_else(|| does_not_exist("Cliente"))?;
        Ok(Self {
            nome: Some(input.nome),
            descricao: input.descricao,
            cliente_id: Some(cliente_id),
            status: input.status,
        })
    }
}

#[derive(Debug, InputObject)]
pub struct AtividadeInput {
    pub projeto_id: ID,
    pub descricao: String,
    pub prazo: Date,
}

impl TryFrom<AtividadeInput> for atividade::AtividadeInput {
    type Error = async_graphql::Error;

    fn try_from(input: AtividadeInput) -> Result<Self, Self::Error> {
        let projeto_id = parse_id(&input.projeto_id).ok_or_else(|| does_not_exist("Projeto"))?;
        Ok(Self {
            projeto_id: Some(projeto_id),
            descricao: Some(input.descricao),
            prazo: Some(input.prazo.0.format(PRAZO_FORMAT).to_string()),
        })
    }
}
