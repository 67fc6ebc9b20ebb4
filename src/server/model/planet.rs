use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: Option<f64>,
    pub rotation_period: Option<f64>,
    pub orbital_period: Option<f64>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            gravity: self.gravity,
            population: self.population,
            climate: self.climate,
            terrain: self.terrain,
            surface_water: self.surface_water,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            diameter: entity.diameter,
            rotation_period: entity.rotation_period,
            orbital_period: entity.orbital_period,
            gravity: entity.gravity,
            population: entity.population,
            climate: entity.climate,
            terrain: entity.terrain,
            surface_water: entity.surface_water,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanetParams {
    pub name: String,
    pub diameter: Option<f64>,
    pub rotation_period: Option<f64>,
    pub orbital_period: Option<f64>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

impl CreatePlanetParams {
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_empty(dto.name, "name es inválido")?,
            diameter: dto.diameter,
            rotation_period: dto.rotation_period,
            orbital_period: dto.orbital_period,
            gravity: dto.gravity,
            population: dto.population,
            climate: dto.climate,
            terrain: dto.terrain,
            surface_water: dto.surface_water,
        })
    }
}
