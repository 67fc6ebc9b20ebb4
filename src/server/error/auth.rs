use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or claim validation.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Email unknown or password mismatch during login.
    #[error("Bad username or password")]
    InvalidCredentials,

    /// The token's jti is on the denylist.
    #[error("Token {0} has been revoked")]
    TokenRevoked(String),

    /// The token subject does not resolve to a stored user.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks the privilege for the operation.
    #[error("User {0} is not allowed to perform this operation")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant except `AccessDenied` results in 401 Unauthorized. Details are
/// logged at debug level while the client receives a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing Authorization Header"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Token inválido"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Bad username or password"),
            Self::TokenRevoked(_) => (StatusCode::UNAUTHORIZED, "Token has been revoked"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "El usuario no existe"),
            Self::AccessDenied(_) => (StatusCode::FORBIDDEN, "Acceso denegado"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
                status_code: status.as_u16(),
            }),
        )
            .into_response()
    }
}
