//! Catalog endpoints for planets.

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
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        controller::{require_body, require_path},
        error::AppError,
        model::planet::CreatePlanetParams,
        service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// List all planets.
///
/// # Returns
/// - `200 OK` - Every planet in storage order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let planets_dto: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

/// Create a planet.
///
/// Only `name` is required. Every other attribute is stored as given or left null.
///
/// # Returns
/// - `201 Created` - Planet created
/// - `400 Bad Request` - Invalid body or name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = MessageDto),
        (status = 400, description = "Missing body or name, or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = require_body(payload, "Body está vacío o es inválido")?;
    let params = CreatePlanetParams::from_dto(dto)?;

    PlanetService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Planeta creado exitósamente")),
    ))
}

/// Get a planet by id.
///
/// # Arguments
/// - `id` - Planet id from the path, must not be 0
///
/// # Returns
/// - `200 OK` - The planet
/// - `400 Bad Request` - Id is invalid or no planet has it
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 400, description = "Id is 0 or planet does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Delete a planet by id.
///
/// Favorites pointing at the planet are removed with it.
///
/// # Returns
/// - `200 OK` - Plain string confirmation
/// - `400 Bad Request` - Id is invalid or no planet has it
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet deleted", body = String),
        (status = 400, description = "Id is 0 or planet does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    PlanetService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json("planeta eliminado exitósamente")))
}
