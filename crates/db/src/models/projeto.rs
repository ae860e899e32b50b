//! Projeto entity model and DTOs.

use gestao_core::error::CoreError;
use gestao_core::projeto::{self, ProjetoStatus};
use gestao_core::types::DbId;
use gestao_core::validation::{require, FieldErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FillFrom;

/// A project row from the `projetos` table.
///
/// The owning client is exposed as `cliente` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Projeto {
    pub id: DbId,
    pub nome: String,
    pub descricao: String,
    #[serde(rename = "cliente")]
    pub cliente_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: ProjetoStatus,
}

/// Request body for creating or updating a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjetoInput {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    #[serde(rename = "cliente")]
    pub cliente_id: Option<DbId>,
    /// Defaults to `em_andamento` if omitted.
    pub status: Option<String>,
}

/// Validated writable fields of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjetoFields {
    pub nome: String,
    pub descricao: String,
    pub cliente_id: DbId,
    pub status: ProjetoStatus,
}

impl ProjetoInput {
    /// Trim and validate the input, resolving the status.
    pub fn validate(self) -> Result<ProjetoFields, CoreError> {
        let nome = self.nome.map(|s| s.trim().to_string());
        let descricao = self.descricao.as_deref().map(str::trim).unwrap_or_default();

        let mut errors = FieldErrors::new();
        let status = projeto::validate(&mut errors, nome.as_deref(), self.status.as_deref());
        let cliente_id = require(&mut errors, "cliente", self.cliente_id);

        match (nome, cliente_id) {
            (Some(nome), Some(cliente_id)) if errors.is_empty() => Ok(ProjetoFields {
                nome,
                descricao: descricao.to_string(),
                cliente_id,
                status,
            }),
            _ => Err(CoreError::Validation(errors)),
        }
    }
}

impl FillFrom<Projeto> for ProjetoInput {
    fn fill_from(self, current: &Projeto) -> Self {
        Self {
            nome: self.nome.or_else(|| Some(current.nome.clone())),
            descricao: self.descricao.or_else(|| Some(current.descricao.clone())),
            cliente_id: self.cliente_id.or(Some(current.cliente_id)),
            status: self.status.or_else(|| Some(current.status.as_str().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn omitted_fields_take_defaults() {
        let input: ProjetoInput =
            serde_json::from_str(r#"{"nome": "projeto1", "cliente": 7}"#).unwrap();
        let fields = input.validate().unwrap();
        assert_eq!(fields.descricao, "");
        assert_eq!(fields.cliente_id, 7);
        assert_eq!(fields.status, ProjetoStatus::EmAndamento);
    }

    #[test]
    fn missing_cliente_is_a_field_error() {
        let input: ProjetoInput = serde_json::from_str(r#"{"nome": "projeto1"}"#).unwrap();
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation(e)) if e.get("cliente").is_some() && e.get("nome").is_none()
        );
    }

    #[test]
    fn fill_from_keeps_stored_status() {
        let current = Projeto {
            id: 1,
            nome: "projeto1".into(),
            descricao: "d".into(),
            cliente_id: 3,
            status: ProjetoStatus::Pausado,
        };
        let patch = ProjetoInput {
            nome: Some("renamed".into()),
            ..Default::default()
        };
        let fields = patch.fill_from(&current).validate().unwrap();
        assert_eq!(fields.nome, "renamed");
        assert_eq!(fields.descricao, "d");
        assert_eq!(fields.cliente_id, 3);
        assert_eq!(fields.status, ProjetoStatus::Pausado);
    }

    #[test]
    fn row_serializes_owner_as_cliente() {
        let row = Projeto {
            id: 1,
            nome: "projeto1".into(),
            descricao: String::new(),
            cliente_id: 3,
            status: ProjetoStatus::Concluido,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["cliente"], 3);
        assert_eq!(json["status"], "concluido");
        assert!(json.get("cliente_id").is_none());
    }
}
