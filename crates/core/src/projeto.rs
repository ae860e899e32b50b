//! Projeto status and field rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{check_required_text, FieldErrors};

/// Maximum length of a project name.
pub const NOME_MAX_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a project. Stored as its snake_case string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjetoStatus {
    #[default]
    EmAndamento,
    Concluido,
    Pausado,
}

impl ProjetoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmAndamento => "em_andamento",
            Self::Concluido => "concluido",
            Self::Pausado => "pausado",
        }
    }

    /// Parse a status from its stored string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "em_andamento" => Some(Self::EmAndamento),
            "concluido" => Some(Self::Concluido),
            "pausado" => Some(Self::Pausado),
            _ => None,
        }
    }
}

impl fmt::Display for ProjetoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ProjetoStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| CoreError::invalid_field("status", invalid_choice(&value)))
    }
}

fn invalid_choice(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a candidate project record, recording failures into `errors`,
/// and resolve its status.
///
/// Only an absent `status` falls back to [`ProjetoStatus::EmAndamento`]; any
/// supplied value must name a status exactly. Existence of the owning client
/// is checked by the caller.
pub fn validate(errors: &mut FieldErrors, nome: Option<&str>, status: Option<&str>) -> ProjetoStatus {
    check_required_text(errors, "nome", nome, Some(NOME_MAX_LEN));

    match status {
        None => ProjetoStatus::default(),
        Some(raw) => ProjetoStatus::parse(raw).unwrap_or_else(|| {
            errors.add("status", invalid_choice(raw));
            ProjetoStatus::default()
        }),
    }
}
