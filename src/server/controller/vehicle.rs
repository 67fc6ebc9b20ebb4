//! Catalog endpoints for vehicles.

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
        vehicle::{CreateVehicleDto, VehicleDto},
    },
    server::{
        controller::{require_body, require_path},
        error::AppError,
        model::vehicle::CreateVehicleParams,
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// List all vehicles.
///
/// # Returns
/// - `200 OK` - Every vehicle in storage order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db).get_all().await?;

    let vehicles_dto: Vec<VehicleDto> = vehicles.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(vehicles_dto)))
}

/// Create a vehicle.
///
/// Only `name` is required. Every other attribute is stored as given or left null.
///
/// # Returns
/// - `201 Created` - Vehicle created
/// - `400 Bad Request` - Invalid body or name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/vehicle",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = MessageDto),
        (status = 400, description = "Missing body or name, or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = require_body(payload, "Body está vacío o es inválido")?;
    let params = CreateVehicleParams::from_dto(dto)?;

    VehicleService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Vehículo creado exitósamente")),
    ))
}

/// Get a vehicle by id.
///
/// # Arguments
/// - `id` - Vehicle id from the path, must not be 0
///
/// # Returns
/// - `200 OK` - The vehicle
/// - `400 Bad Request` - Id is invalid or no vehicle has it
#[utoipa::path(
    get,
    path = "/vehicle/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 400, description = "Id is 0 or vehicle does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    let vehicle = VehicleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Delete a vehicle by id.
///
/// Favorites pointing at the vehicle are removed with it.
///
/// # Returns
/// - `200 OK` - Plain string confirmation
/// - `400 Bad Request` - Id is invalid or no vehicle has it
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/vehicle/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle deleted", body = String),
        (status = 400, description = "Id is 0 or vehicle does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_path(path)?;
    VehicleService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json("vehículo eliminado exitósamente")))
}
