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
        people::{CreatePeopleDto, PeopleDto, SearchPeopleDto, UpdatePeopleDto},
    },
    server::{
        controller::{require_body, require_path},
        error::AppError,
        model::people::{CreatePeopleParams, UpdatePeopleParams},
        service::people::PeopleService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

const EMPTY_BODY: &str = "Body está vacío o es inválido";

#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<PeopleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PeopleService::new(&state.db).get_all().await?;

    let people_dto: Vec<PeopleDto> = people.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(people_dto)))
}

/// Create a character.
///
/// Only `name` is required. Names are not unique, so posting the same name twice
/// creates two characters.
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePeopleDto,
    responses(
        (status = 201, description = "Character created", body = MessageDto),
        (status = 400, description = "Missing body or name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_people(
    State(state): State<AppState>,
    payload: Result<Json<CreatePeopleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePeopleParams::from_dto(require_body(payload, EMPTY_BODY)?)?;

    PeopleService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Personaje creado exitósamente")),
    ))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "The character", body = PeopleDto),
        (status = 400, description = "Id is 0 or character does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    let people = PeopleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(people.into_dto())))
}

/// Rename a character.
///
/// `name` is applied only when present and not null. Returns the updated character.
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    request_body = UpdatePeopleDto,
    responses(
        (status = 200, description = "Updated character", body = PeopleDto),
        (status = 400, description = "Id is 0, character does not exist or body invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_people(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdatePeopleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    let params = UpdatePeopleParams::from_dto(id, require_body(payload, EMPTY_BODY)?);

    let people = PeopleService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(people.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Character deleted", body = String),
        (status = 400, description = "Id is 0 or character does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_people(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    PeopleService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json("personaje eliminado exitósamente")))
}

/// Search characters by exact name.
///
/// # Returns
/// - `200 OK` - Every character with that name, possibly none
/// - `400 Bad Request` - Body missing or without `name`
#[utoipa::path(
    post,
    path = "/people/busqueda",
    tag = PEOPLE_TAG,
    request_body = SearchPeopleDto,
    responses(
        (status = 200, description = "Matching characters", body = Vec<PeopleDto>),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_people(
    State(state): State<AppState>,
    payload: Result<Json<SearchPeopleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Some(name) = require_body(payload, EMPTY_BODY)?.name else {
        return Err(AppError::BadRequest("name es requerido".to_string()));
    };

    let people = PeopleService::new(&state.db).search(&name).await?;

    let people_dto: Vec<PeopleDto> = people.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(people_dto)))
}
