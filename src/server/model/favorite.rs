//! Favorite domain models.
//!
//! Each favorite pairs the join row id with the owner's email and the linked catalog
//! item, which is the shape the aggregated favorites endpoint reports.

use crate::{
    model::favorite::{
        CreateFavoriteDto, FavoriteKind, FavoritePeopleDto, FavoritePlanetDto,
        FavoriteVehicleDto, FavoritesDto,
    },
    server::{
        error::AppError,
        model::{people::People, planet::Planet, vehicle::Vehicle},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritePeople {
    pub id: i32,
    pub user_email: String,
    pub people: People,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_email: String,
    pub planet: Planet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteVehicle {
    pub id: i32,
    pub user_email: String,
    pub vehicle: Vehicle,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    pub people: Vec<FavoritePeople>,
    pub planets: Vec<FavoritePlanet>,
    pub vehicles: Vec<FavoriteVehicle>,
}

impl Favorites {
    pub fn into_dto(self) -> FavoritesDto {
        FavoritesDto {
            people: self
                .people
                .into_iter()
                .map(|f| FavoritePeopleDto {
                    id: f.id,
                    user_email: f.user_email,
                    character_name: f.people.name,
                })
                .collect(),
            planets: self
                .planets
                .into_iter()
                .map(|f| FavoritePlanetDto {
                    id: f.id,
                    user_email: f.user_email,
                    planet_name: f.planet.name,
                    planet_diameter: f.planet.diameter,
                    planet_rotation_period: f.planet.rotation_period,
                    planet_orbital_period: f.planet.orbital_period,
                    planet_gravity: f.planet.gravity,
                    planet_population: f.planet.population,
                    planet_climate: f.planet.climate,
                    planet_terrain: f.planet.terrain,
                    planet_surface_water: f.planet.surface_water,
                })
                .collect(),
            vehicles: self
                .vehicles
                .into_iter()
                .map(|f| FavoriteVehicleDto {
                    id: f.id,
                    user_email: f.user_email,
                    vehicle_name: f.vehicle.name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFavoriteParams {
    pub kind: FavoriteKind,
    pub user_id: i32,
    pub item_id: i32,
}

impl CreateFavoriteParams {
    pub fn from_dto(kind: FavoriteKind, dto: CreateFavoriteDto) -> Result<Self, AppError> {
        let (Some(user_id), Some(item_id)) = (dto.user_id, dto.item_id) else {
            return Err(AppError::BadRequest(
                "user_id e item_id son requeridos".to_string(),
            ));
        };

        Ok(Self {
            kind,
            user_id,
            item_id,
        })
    }
}
