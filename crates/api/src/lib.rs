//! Gestao API server library.
//!
//! Exposes the core building blocks (config, state, error handling, the
//! data access services, REST routes, and the GraphQL schema) so integration
//! tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
