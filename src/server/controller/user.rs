use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoritesDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::{require_path, require_query},
        error::AppError,
        model::user::CreateUserParams,
        service::{favorite::FavoriteService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoritesQuery {
    /// Only return favorites owned by this user
    pub user_id: Option<i32>,
}

/// List all users.
///
/// # Returns
/// - `200 OK` - Every user in storage order, without passwords
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Create a new user.
///
/// Requires `email` and `password`. An empty or missing `description` is replaced with
/// a placeholder. The password is stored as an argon2 hash.
///
/// # Returns
/// - `201 Created` - User created
/// - `400 Bad Request` - Missing body or fields, or email already registered
/// - `500 Internal Server Error` - Creation failed and was rolled back
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = MessageDto),
        (status = 400, description = "Invalid body or duplicate email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload.ok().map(|Json(dto)| dto))?;

    UserService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Usuario creado exitósamente")),
    ))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Id is 0 or the user does not exist
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Id is 0 or user does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user by id.
///
/// Favorites owned by the user are removed with it.
///
/// # Returns
/// - `200 OK` - Plain string confirmation
/// - `400 Bad Request` - Id is 0 or the user does not exist
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 400, description = "Id is 0 or user does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json("usuario eliminado exitósamente")))
}

/// Aggregated favorites of every kind.
///
/// Each entry carries the favorite id, the owner's email and the linked item.
#[utoipa::path(
    get,
    path = "/user/favorites",
    tag = USER_TAG,
    params(FavoritesQuery),
    responses(
        (status = 200, description = "Favorites grouped by kind", body = FavoritesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    query: Result<Query<FavoritesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = require_query(query)?;
    let favorites = FavoriteService::new(&state.db).get_all(query.user_id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}
