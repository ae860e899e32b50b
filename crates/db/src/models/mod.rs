//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO shared by create, full and partial update
//! - A validated `*Fields` struct listing exactly the writable columns
//!
//! Input fields are optional so a missing field is reported as a field
//! error by `validate()` rather than failing deserialization.

pub mod atividade;
pub mod cliente;
pub mod projeto;

/// An input DTO that can be completed from the stored record, so a partial
/// update runs through the same validation as a full one.
pub trait FillFrom<R> {
    /// Take every field absent from `self` from `current`.
    fn fill_from(self, current: &R) -> Self;
}
