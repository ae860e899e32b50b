pub mod health;

use axum::routing::get;
use axum::Router;

use crate::graphql;
use crate::handlers::resource;
use crate::services::{AtividadeService, ClienteService, ProjetoService, Resource};
use crate::state::AppState;

/// Build the REST and GraphQL route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /clientes/                         list, create
/// /clientes/{id}/                    get, update, partial update, delete
/// /clientes/{id}/projetos/           projetos of a cliente
///
/// /projetos/                         list, create
/// /projetos/{id}/                    get, update, partial update, delete
/// /projetos/{id}/atividades/         atividades of a projeto
///
/// /atividades/                       list, create
/// /atividades/{id}/                  get, update, partial update, delete
///
/// /graphql/                          GraphQL (POST), GraphiQL (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<ClienteService>("clientes"))
        .merge(resource_routes::<ProjetoService>("projetos"))
        .merge(resource_routes::<AtividadeService>("atividades"))
        .route(
            "/clientes/{id}/projetos/",
            get(resource::list_by_parent::<ProjetoService>),
        )
        .route(
            "/projetos/{id}/atividades/",
            get(resource::list_by_parent::<AtividadeService>),
        )
        .route(
            "/graphql/",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
}

/// List and detail routes for one resource.
///
/// ```text
/// GET    /{name}/        -> list
/// POST   /{name}/        -> create
/// GET    /{name}/{id}/   -> get_by_id
/// PUT    /{name}/{id}/   -> update
/// PATCH  /{name}/{id}/   -> partial_update
/// DELETE /{name}/{id}/   -> delete
/// ```
fn resource_routes<R: Resource>(name: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{name}/"),
            get(resource::list::<R>).post(resource::create::<R>),
        )
        .route(
            &format!("/{name}/{{id}}/"),
            get(resource::get_by_id::<R>)
                .put(resource::update::<R>)
                .patch(resource::partial_update::<R>)
                .delete(resource::delete::<R>),
        )
}
