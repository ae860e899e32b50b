//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Validation happens before a
//! repository is called; repositories only speak SQL.

pub mod atividade_repo;
pub mod cliente_repo;
pub mod projeto_repo;

pub use atividade_repo::AtividadeRepo;
pub use cliente_repo::ClienteRepo;
pub use projeto_repo::ProjetoRepo;
