//! Cliente field rules.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::validation::{check_required_text, FieldErrors};

/// Maximum length of a client name.
pub const NOME_MAX_LEN: usize = 255;

/// Maximum length of an email address.
pub const EMAIL_MAX_LEN: usize = 254;

/// A leading `+` followed by 9 to 20 ASCII digits. Mirrored by the
/// `ck_clientes_telefone` constraint.
pub const TELEFONE_PATTERN: &str = r"^\+[0-9]{9,20}$";

static TELEFONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TELEFONE_PATTERN).expect("valid regex"));

pub const TELEFONE_MESSAGE: &str =
    "Phone number must be entered in the format: '+999999999'. Up to 20 digits allowed.";

pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

pub const EMAIL_TAKEN_MESSAGE: &str = "cliente with this email already exists.";

/// Whether `value` is a well-formed phone number.
pub fn is_valid_telefone(value: &str) -> bool {
    TELEFONE_RE.is_match(value)
}

/// Whether `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

/// Collapse an empty or whitespace-only phone to `None`.
pub fn normalize_telefone(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validate a candidate client record, recording failures into `errors`.
///
/// `None` means the field was not supplied. `telefone` must already be
/// normalized (see [`normalize_telefone`]). Email uniqueness needs the store
/// and is checked by the caller.
pub fn validate(
    errors: &mut FieldErrors,
    nome: Option<&str>,
    email: Option<&str>,
    telefone: Option<&str>,
) {
    check_required_text(errors, "nome", nome, Some(NOME_MAX_LEN));

    match email {
        Some(email) if !email.trim().is_empty() && !is_valid_email(email) => {
            errors.add("email", INVALID_EMAIL_MESSAGE);
        }
        _ => check_required_text(errors, "email", email, Some(EMAIL_MAX_LEN)),
    }

    if let Some(telefone) = telefone {
        if !is_valid_telefone(telefone) {
            errors.add("telefone", TELEFONE_MESSAGE);
        }
    }
}
