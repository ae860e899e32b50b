//! Domain model, types, and validation rules shared by the database and
//! API layers.
//!
//! Everything here is pure: no I/O, no database access. Rules that need the
//! store (email uniqueness, parent existence) live in the API services.

pub mod atividade;
pub mod cliente;
pub mod error;
pub mod projeto;
pub mod types;
pub mod validation;
