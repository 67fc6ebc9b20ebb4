//! Error hierarchy of the API.
//!
//! Handlers and services return `AppError`; its `IntoResponse` impl renders every
//! failure as `{"message", "status_code"}` so clients see one error shape.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Error returned by every handler.
///
/// `AuthError` picks its own status. Lookups that miss are reported through
/// `BadRequest`. Anything else becomes a generic 500 with the detail logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or unparsable environment variable at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401 / 403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Query or connection failure from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unknown route. Missing records are reported as `BadRequest` instead,
    /// which existing clients rely on.
    #[error("{0}")]
    NotFound(String),

    /// Rejected input or an unknown id. The message is sent as is.
    #[error("{0}")]
    BadRequest(String),

    /// Failure whose detail must stay server-side.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    fn json(status: StatusCode, message: String) -> Response {
        (
            status,
            Json(ErrorDto {
                message,
                status_code: status.as_u16(),
            }),
        )
            .into_response()
    }
}

/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 401 / 403 - `AuthErr`, see `AuthError::into_response()`
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => Self::json(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => Self::json(StatusCode::BAD_REQUEST, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                Self::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers with the generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        AppError::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
