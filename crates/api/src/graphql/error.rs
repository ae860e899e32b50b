//! Mapping from [`AppError`] to GraphQL errors.

use async_graphql::ErrorExtensions;
use gestao_core::error::CoreError;
use gestao_core::types::DbId;

use crate::error::AppError;

/// `"<Entity> does not exist."`
pub fn does_not_exist(entity: &str) -> async_graphql::Error {
    async_graphql::Error::new(format!("{entity} does not exist."))
}

/// Convert a service error into a GraphQL error with a readable message.
///
/// Validation failures carry the field map under `extensions.fields`.
pub fn to_graphql_error(err: AppError) -> async_graphql::Error {
    match err {
        AppError::Core(CoreError::NotFound { entity, .. }) => does_not_exist(entity),
        AppError::Core(CoreError::Validation(fields)) => {
            let message = format!("Validation failed: {fields}");
            match async_graphql::to_value(&fields) {
                Ok(value) => async_graphql::Error::new(message)
                    .extend_with(|_, ext| ext.set("fields", value)),
                Err(_) => async_graphql::Error::new(message),
            }
        }
        AppError::BadRequest(msg) => async_graphql::Error::new(msg),
        other => {
            tracing::error!(error = %other, "GraphQL resolver failed");
            async_graphql::Error::new("An internal error occurred")
        }
    }
}

/// Wrap any failure of the by-parent queries as `"Exception error: ..."`.
///
/// Store failures are logged in full and described to the client only
/// generically.
pub fn exception_error(err: AppError) -> async_graphql::Error {
    let description = match &err {
        AppError::Core(core) => core.to_string(),
        AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
        AppError::Database(db_err) => {
            tracing::error!(error = %db_err, "By-parent query failed");
            "An internal error occurred".to_string()
        }
    };
    async_graphql::Error::new(format!("Exception error: {description}"))
}

/// Parse a GraphQL `ID` into a database id. Ids that are not integers
/// cannot name any row.
pub fn parse_id(id: &async_graphql::ID) -> Option<DbId> {
    id.parse().ok()
}
