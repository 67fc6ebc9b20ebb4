use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{CreateFavoriteDto, FavoriteKind},
    },
    server::{
        controller::{require_body, require_path},
        error::AppError,
        model::favorite::CreateFavoriteParams,
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add a favorite.
///
/// Links an existing user to an existing catalog item of the given kind.
///
/// # Returns
/// - `201 Created` - Favorite created
/// - `400 Bad Request` - Body invalid, or the user or item does not exist
#[utoipa::path(
    post,
    path = "/favorites/{kind}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKind, Path, description = "people, planet or vehicle")
    ),
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = MessageDto),
        (status = 400, description = "Invalid body or unknown user or item", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    path: Result<Path<FavoriteKind>, PathRejection>,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let kind = require_path(path)?;
    let dto = require_body(payload, "Body está vacío o es inválido")?;
    let params = CreateFavoriteParams::from_dto(kind, dto)?;

    FavoriteService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Favorito creado exitósamente")),
    ))
}

/// Remove a favorite.
#[utoipa::path(
    delete,
    path = "/favorites/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKind, Path, description = "people, planet or vehicle"),
        ("id" = i32, Path, description = "Favorite id")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = String),
        (status = 400, description = "Id is 0 or favorite does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    path: Result<Path<(FavoriteKind, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (kind, id) = require_path(path)?;
    FavoriteService::new(&state.db).delete(kind, id).await?;

    Ok((StatusCode::OK, Json("favorito eliminado exitósamente")))
}
