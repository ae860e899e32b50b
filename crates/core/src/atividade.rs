//! Atividade field rules.
//!
//! The creation timestamp is assigned by the store and is not part of any
//! writable input, so only the description and deadline are checked here.

use crate::types::Date;
use crate::validation::{check_required_text, require, FieldErrors};

/// Wire format of a deadline.
pub const PRAZO_FORMAT: &str = "%Y-%m-%d";

pub const PRAZO_FORMAT_MESSAGE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

/// Parse a `YYYY-MM-DD` deadline.
pub fn parse_prazo(value: &str) -> Option<Date> {
    Date::parse_from_str(value.trim(), PRAZO_FORMAT).ok()
}

/// Validate a candidate activity record, recording failures into `errors`,
/// and resolve its deadline. Existence of the owning project is checked by
/// the caller.
pub fn validate(errors: &mut FieldErrors, descricao: Option<&str>, prazo: Option<&str>) -> Option<Date> {
    check_required_text(errors, "descricao", descricao, None);

    let prazo = require(errors, "prazo", prazo)?;
    let parsed = parse_prazo(prazo);
    if parsed.is_none() {
        errors.add("prazo", PRAZO_FORMAT_MESSAGE);
    }
    parsed
}
