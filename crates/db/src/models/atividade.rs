//! Atividade entity model and DTOs.

use gestao_core::atividade::{self, PRAZO_FORMAT};
use gestao_core::error::CoreError;
use gestao_core::types::{Date, DbId, Timestamp};
use gestao_core::validation::{require, FieldErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FillFrom;

/// An activity row from the `atividades` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Atividade {
    pub id: DbId,
    #[serde(rename = "projeto")]
    pub projeto_id: DbId,
    pub descricao: String,
    /// Set by the database on insert; never written afterwards.
    pub data_criacao: Timestamp,
    pub prazo: Date,
}

/// Request body for creating or updating an activity.
///
/// `data_criacao` is not accepted; any such key in the body is ignored.
/// `prazo` stays raw so a malformed date is reported against its field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtividadeInput {
    #[serde(rename = "projeto")]
    pub projeto_id: Option<DbId>,
    pub descricao: Option<String>,
    pub prazo: Option<String>,
}

/// Validated writable fields of an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtividadeFields {
    pub projeto_id: DbId,
    pub descricao: String,
    pub prazo: Date,
}

impl AtividadeInput {
    pub fn validate(self) -> Result<AtividadeFields, CoreError> {
        let descricao = self.descricao.map(|s| s.trim().to_string());

        let mut errors = FieldErrors::new();
        let projeto_id = require(&mut errors, "projeto", self.projeto_id);
        let prazo = atividade::validate(&mut errors, descricao.as_deref(), self.prazo.as_deref());

        match (projeto_id, descricao, prazo) {
            (Some(projeto_id), Some(descricao), Some(prazo)) if errors.is_empty() => {
                Ok(AtividadeFields {
                    projeto_id,
                    descricao,
                    prazo,
                })
            }
            _ => Err(CoreError::Validation(errors)),
        }
    }
}

impl FillFrom<Atividade> for AtividadeInput {
    fn fill_from(self, current: &Atividade) -> Self {
        Self {
            projeto_id: self.projeto_id.or(Some(current.projeto_id)),
            descricao: self.descricao.or_else(|| Some(current.descricao.clone())),
            prazo: self
                .prazo
                .or_else(|| Some(current.prazo.format(PRAZO_FORMAT).to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn prazo_parses_iso_date() {
        let input: AtividadeInput = serde_json::from_str(
            r#"{"projeto": 1, "descricao": "Primeira Atividade", "prazo": "2024-12-31",
                "data_criacao": "2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let fields = input.validate().unwrap();
        assert_eq!(fields.prazo, Date::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn malformed_prazo_is_a_field_error() {
        let input: AtividadeInput =
            serde_json::from_str(r#"{"projeto": 1, "descricao": "x", "prazo": "31/12/2024"}"#)
                .unwrap();
        assert_matches!(
            input.validate(),
            Err(CoreError::Validation(e))
                if e.get("prazo") == Some(&[atividade::PRAZO_FORMAT_MESSAGE.to_string()][..])
        );
    }

    #[test]
    fn fill_from_round_trips_stored_prazo() {
        let current = Atividade {
            id: 1,
            projeto_id: 2,
            descricao: "x".into(),
            data_criacao: Timestamp::default(),
            prazo: Date::from_ymd_opt(2024, 12, 31).unwrap(),
        };
        let patch = AtividadeInput {
            descricao: Some("y".into()),
            ..Default::default()
        };
        let fields = patch.fill_from(&current).validate().unwrap();
        assert_eq!(fields.descricao, "y");
        assert_eq!(fields.projeto_id, 2);
        assert_eq!(fields.prazo, current.prazo);
    }
}
