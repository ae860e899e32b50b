//! Cliente entity model and DTOs.

use gestao_core::cliente;
use gestao_core::error::CoreError;
use gestao_core::types::DbId;
use gestao_core::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FillFrom;

/// A client row from the `clientes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Cliente {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
}

/// Request body for creating or updating a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClienteInput {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

/// Validated writable fields of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClienteFields {
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
}

impl ClienteInput {
    /// Trim and validate the input. A blank phone becomes `None`.
    pub fn validate(self) -> Result<ClienteFields, CoreError> {
        let nome = self.nome.map(|s| s.trim().to_string());
        let email = self.email.map(|s| s.trim().to_string());
        let telefone = cliente::normalize_telefone(self.telefone.as_deref());

        let mut errors = FieldErrors::new();
        cliente::validate(
            &mut errors,
            nome.as_deref(),
            email.as_deref(),
            telefone.as_deref(),
        );

        match (nome, email) {
            (Some(nome), Some(email)) if errors.is_empty() => Ok(ClienteFields {
                nome,
                email,
                telefone,
            }),
            _ => Err(CoreError::Validation(errors)),
        }
    }
}

impl FillFrom<Cliente> for ClienteInput {
    fn fill_from(self, current: &Cliente) -> Self {
        Self {
            nome: self.nome.or_else(|| Some(current.nome.clone())),
            email: self.email.or_else(|| Some(current.email.clone())),
            telefone: self.telefone.or_else(|| current.telefone.clone()),
        }
    }
}
