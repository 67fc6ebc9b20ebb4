//! HTTP request handlers.
//!
//! Controllers extract path, query and body input, convert DTOs into parameter types,
//! delegate to services and convert domain models back into DTOs.

pub mod auth;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::server::error::AppError;

/// Unwraps a JSON body, reporting a missing or malformed body as `BadRequest(message)`.
pub fn require_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            Err(AppError::BadRequest(message.to_string()))
        }
    }
}

/// Unwraps path parameters. An unknown favorite kind or a non-numeric id becomes a
/// `BadRequest` so it is answered with the JSON error body.
pub fn require_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    match path {
        Ok(Path(params)) => Ok(params),
        Err(rejection) => {
            tracing::debug!("Rejected path parameters: {}", rejection);
            Err(AppError::BadRequest(
                "Parámetros de ruta inválidos".to_string(),
            ))
        }
    }
}

/// Unwraps query parameters, reporting unparsable values as `BadRequest`.
pub fn require_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            tracing::debug!("Rejected query string: {}", rejection);
            Err(AppError::BadRequest(
                "Parámetros de consulta inválidos".to_string(),
            ))
        }
    }
}

/// Handler for every route that is not registered.
pub async fn fallback() -> AppError {
    AppError::NotFound("Not found".to_string())
}
