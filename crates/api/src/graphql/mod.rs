//! GraphQL schema over the same data access services as the REST layer.
//!
//! Served at `/graphql/`: POST executes queries, GET renders GraphiQL.

pub mod error;
pub mod inputs;
pub mod mutation;
pub mod query;
pub mod scalars;
pub mod types;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use gestao_db::DbPool;

use crate::state::AppState;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema. Resolvers read the pool from context data.
pub fn build_schema(pool: DbPool) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// POST /graphql/
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET /graphql/
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql/").finish())
}
