use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthMessageDto, LoginDto, ProtectedDto, TokenDto},
        user::UserDto,
    },
    server::{
        controller::require_path,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::auth::LoginParams,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange email and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Signed token and the user id it was issued for
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Bad username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload.ok().map(|Json(dto)| dto))?;

    let (token, user_id) = AuthService::new(&state.db, &state.tokens)
        .login(params)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token, user_id })))
}

/// Protected greeting for the token holder.
///
/// A revoked token is answered with `200 OK` and a denial message without a user,
/// which existing clients check for. Any other token problem is a `401`.
#[utoipa::path(
    get,
    path = "/helloprotected",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Greeting with the token holder, or a denial for a revoked token", body = ProtectedDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn hello_protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = match AuthGuard::new(&state, &headers).require(&[]).await {
        Ok(claims) => claims,
        Err(AppError::AuthErr(AuthError::TokenRevoked(jti))) => {
            tracing::debug!("Protected access with revoked token {}", jti);
            return Ok((
                StatusCode::OK,
                Json(ProtectedDto {
                    msg: "Token has been revoked".to_string(),
                    user: None,
                }),
            ));
        }
        Err(err) => return Err(err),
    };

    let user = AuthService::new(&state.db, &state.tokens)
        .token_user(&claims)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProtectedDto {
            msg: "Hola, esta es una ruta protegida".to_string(),
            user: Some(user.into_dto()),
        }),
    ))
}

/// Revoke the bearer token of the request.
///
/// # Returns
/// - `200 OK` - Token added to the denylist
/// - `401 Unauthorized` - Missing, invalid or already revoked token
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token revoked", body = AuthMessageDto),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state, &headers).require(&[]).await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(&claims)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthMessageDto {
            msg: "Sesión cerrada exitósamente".to_string(),
        }),
    ))
}

/// Suspend or reactivate a user.
///
/// Toggles `is_active` of the target user. Only the privileged user may call it.
///
/// # Access Control
/// - `Admin` - Token subject must be the configured privileged user id
///
/// # Returns
/// - `200 OK` - The user with the new flag
/// - `400 Bad Request` - Id is 0 or the user does not exist
/// - `401 Unauthorized` - Missing, invalid or revoked token
/// - `403 Forbidden` - Caller is not the privileged user
#[utoipa::path(
    put,
    path = "/suspendido/{user_id}",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    params(
        ("user_id" = i32, Path, description = "Target user id")
    ),
    responses(
        (status = 200, description = "User with toggled is_active", body = UserDto),
        (status = 400, description = "Id is 0 or user does not exist", body = ErrorDto),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorDto),
        (status = 403, description = "Caller is not the privileged user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn suspend_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = require_path(path)?;
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).toggle_active(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
